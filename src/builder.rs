use std::path::PathBuf;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::ChefConfig;
use crate::pantry::{InMemoryPantry, JsonFilePantry, PantrySource};
use crate::selector::RecipeSelector;
use crate::{Catalog, ChefError, Diet, PantryItem};

/// Where the recipes come from
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Catalog already loaded by the caller
    Loaded(Arc<Catalog>),
    /// JSON file read at lookup time
    File(PathBuf),
    /// Catalog bundled with the crate
    Builtin,
}

/// Where the pantry contents come from
#[derive(Debug, Clone)]
pub enum PantryInput {
    /// JSON file read at lookup time
    File(PathBuf),
    /// Items supplied directly
    Items(Vec<PantryItem>),
}

/// How to choose among recipes that can be made
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Highest readiness, earliest in the catalog on ties (default)
    #[default]
    Optimal,
    /// Uniformly random among makeable recipes
    Random,
}

impl SelectionMode {
    pub fn prefers_optimal(&self) -> bool {
        matches!(self, SelectionMode::Optimal)
    }
}

/// One recipe considered by a lookup
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateReport {
    pub name: String,
    pub readiness: f64,
    pub makeable: bool,
}

/// Everything a lookup produced, for callers that want to show their working
#[derive(Debug, Clone, PartialEq)]
pub struct FindReport {
    pub diet: Diet,
    pub mode: SelectionMode,
    /// Pantry contents the lookup saw, sorted by name
    pub pantry: Vec<(String, f64)>,
    /// Each recipe suitable for `diet`, in catalog order
    pub candidates: Vec<CandidateReport>,
    pub recipe: Option<String>,
}

/// Builder for configuring and running a recipe lookup
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    diet: Option<Diet>,
    diet_tag: Option<String>,
    mode: SelectionMode,
    seed: Option<u64>,
    catalog: Option<CatalogSource>,
    pantry: Option<PantryInput>,
}

impl RecipeFinderBuilder {
    /// Apply defaults from configuration
    ///
    /// Call this first; later builder calls override what it sets.
    pub fn config(mut self, config: &ChefConfig) -> Self {
        self.diet = Some(config.default_diet);
        self.diet_tag = None;
        self.mode = if config.prefer_optimal {
            SelectionMode::Optimal
        } else {
            SelectionMode::Random
        };
        self.seed = config.seed;
        self.catalog = Some(match &config.catalog_path {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Builtin,
        });
        self.pantry = Some(PantryInput::File(config.pantry_path.clone()));
        self
    }

    /// Restrict the lookup to recipes suitable for `diet`
    ///
    /// # Example
    /// ```
    /// use pantry_chef::{Diet, RecipeFinder};
    ///
    /// let builder = RecipeFinder::builder().diet(Diet::Vegan);
    /// ```
    pub fn diet(mut self, diet: Diet) -> Self {
        self.diet = Some(diet);
        self.diet_tag = None;
        self
    }

    /// Restrict the lookup by a diet given as text
    ///
    /// The tag is parsed when the lookup runs; an unknown tag makes
    /// [`find`](Self::find) fail with [`ChefError::InvalidInput`].
    pub fn diet_tag(mut self, tag: impl Into<String>) -> Self {
        self.diet_tag = Some(tag.into());
        self
    }

    /// Pick a random makeable recipe instead of the most ready one
    pub fn random(mut self) -> Self {
        self.mode = SelectionMode::Random;
        self
    }

    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Seed the random source so random picks are reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = Some(CatalogSource::Loaded(catalog.into()));
        self
    }

    pub fn catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(CatalogSource::File(path.into()));
        self
    }

    /// Read the pantry from a JSON file
    ///
    /// # Example
    /// ```
    /// use pantry_chef::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().pantry_file("pantry.json");
    /// ```
    pub fn pantry_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.pantry = Some(PantryInput::File(path.into()));
        self
    }

    /// Use these items as the pantry
    pub fn items(mut self, items: Vec<PantryItem>) -> Self {
        self.pantry = Some(PantryInput::Items(items));
        self
    }

    /// Run the lookup and return the chosen recipe name, if any
    ///
    /// # Errors
    /// Returns `ChefError` if:
    /// - No pantry was specified
    /// - The diet tag is not recognized
    /// - The catalog or pantry cannot be read or is invalid
    ///
    /// # Example
    /// ```
    /// use pantry_chef::{Diet, RecipeFinder};
    ///
    /// let recipe = RecipeFinder::builder()
    ///     .diet(Diet::Vegan)
    ///     .items(vec![])
    ///     .find()
    ///     .unwrap();
    /// assert_eq!(recipe, None);
    /// ```
    pub fn find(self) -> Result<Option<String>, ChefError> {
        let mut lookup = self.prepare()?;
        lookup.selector.get_recipe(
            lookup.diet,
            lookup.mode.prefers_optimal(),
            lookup.rng.as_mut(),
        )
    }

    /// Run the lookup and also return the pantry and every candidate's readiness
    pub fn report(self) -> Result<FindReport, ChefError> {
        let mut lookup = self.prepare()?;
        let selection = lookup.selector.select(
            lookup.diet,
            lookup.mode.prefers_optimal(),
            lookup.rng.as_mut(),
        )?;

        let mut pantry: Vec<(String, f64)> = selection
            .pantry
            .iter()
            .map(|(name, quantity)| (name.to_string(), quantity))
            .collect();
        pantry.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(FindReport {
            diet: lookup.diet,
            mode: lookup.mode,
            pantry,
            candidates: selection
                .scored
                .iter()
                .map(|candidate| CandidateReport {
                    name: candidate.recipe.name.clone(),
                    readiness: candidate.readiness,
                    makeable: candidate.makeable,
                })
                .collect(),
            recipe: selection.chosen.map(|recipe| recipe.name.clone()),
        })
    }

    fn prepare(self) -> Result<Lookup, ChefError> {
        let pantry: Box<dyn PantrySource> = match self.pantry {
            Some(PantryInput::File(path)) => Box::new(JsonFilePantry::new(path)),
            Some(PantryInput::Items(items)) => Box::new(InMemoryPantry::new(items)),
            None => {
                return Err(ChefError::BuilderError(
                    "No pantry specified. Use .pantry_file() or .items()".to_string(),
                ))
            }
        };

        let diet = match self.diet_tag {
            Some(tag) => tag.parse::<Diet>()?,
            None => self.diet.unwrap_or_default(),
        };

        let catalog = match self.catalog.unwrap_or(CatalogSource::Builtin) {
            CatalogSource::Loaded(catalog) => catalog,
            CatalogSource::File(path) => Arc::new(Catalog::load(path)?),
            CatalogSource::Builtin => Arc::new(Catalog::builtin()?),
        };

        let rng: Box<dyn RngCore> = match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };

        Ok(Lookup {
            selector: RecipeSelector::new(catalog, pantry),
            diet,
            mode: self.mode,
            rng,
        })
    }
}

struct Lookup {
    selector: RecipeSelector<Box<dyn PantrySource>>,
    diet: Diet,
    mode: SelectionMode,
    rng: Box<dyn RngCore>,
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for finding a recipe
    ///
    /// # Example
    /// ```
    /// use pantry_chef::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
