use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::ChefError;
use crate::model::{Diet, Recipe};

const BUILTIN_CATALOG: &str = include_str!("../data/recipes.json");

/// Immutable, validated list of recipes
///
/// Order is preserved from the source; optimal selection breaks ties by it.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, rejecting recipes that could never be selected sensibly
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, ChefError> {
        let mut seen = HashSet::new();

        for recipe in &recipes {
            if recipe.name.trim().is_empty() {
                return Err(ChefError::InvalidCatalog(
                    "recipe name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(recipe.name.as_str()) {
                return Err(ChefError::InvalidCatalog(format!(
                    "duplicate recipe name '{}'",
                    recipe.name
                )));
            }
            if recipe.ingredients.is_empty() {
                return Err(ChefError::InvalidCatalog(format!(
                    "recipe '{}' has no ingredients",
                    recipe.name
                )));
            }
            if let Some((ingredient, quantity)) = recipe
                .ingredients
                .iter()
                .find(|(_, quantity)| !quantity.is_finite() || **quantity <= 0.0)
            {
                return Err(ChefError::InvalidCatalog(format!(
                    "recipe '{}' requires a non-positive quantity of '{}': {}",
                    recipe.name, ingredient, quantity
                )));
            }
            if recipe.diets.is_empty() {
                return Err(ChefError::InvalidCatalog(format!(
                    "recipe '{}' lists no diets",
                    recipe.name
                )));
            }
        }

        debug!("Validated catalog with {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    /// Parse a JSON array of recipes
    pub fn from_json_str(json: &str) -> Result<Self, ChefError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChefError> {
        let path = path.as_ref();
        info!("Loading recipe catalog from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// The catalog bundled with the crate
    pub fn builtin() -> Result<Self, ChefError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Recipes suitable for `diet`, in catalog order
    pub fn for_diet(&self, diet: Diet) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(move |recipe| recipe.suits(diet))
    }
}
