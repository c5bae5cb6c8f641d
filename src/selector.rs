use std::sync::Arc;

use log::{debug, info};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::ChefError;
use crate::model::{Diet, Recipe};
use crate::pantry::{Pantry, PantrySource};
use crate::readiness::{can_make, readiness};

/// A diet-matching recipe scored against one pantry snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    /// Mean ingredient coverage, used for ranking and display
    pub readiness: f64,
    /// Every ingredient is on hand in the required quantity
    pub makeable: bool,
}

/// Outcome of one lookup, all from a single pantry read
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub pantry: Pantry,
    /// Recipes suitable for the diet, in catalog order
    pub scored: Vec<ScoredRecipe<'a>>,
    pub chosen: Option<&'a Recipe>,
}

/// Picks a recipe the pantry can fully cover
///
/// The catalog is shared and never mutated; the pantry source is read once per
/// request.
pub struct RecipeSelector<P> {
    catalog: Arc<Catalog>,
    pantry: P,
}

impl<P: PantrySource> RecipeSelector<P> {
    pub fn new(catalog: Arc<Catalog>, pantry: P) -> Self {
        Self { catalog, pantry }
    }

    /// Fresh snapshot of what is on hand
    pub fn available_items(&self) -> Result<Pantry, ChefError> {
        Pantry::snapshot(&self.pantry)
    }

    /// Score every recipe suitable for `diet`, in catalog order
    pub fn readiness_of_recipes(&self, diet: Diet, pantry: &Pantry) -> Vec<ScoredRecipe<'_>> {
        self.catalog
            .for_diet(diet)
            .map(|recipe| ScoredRecipe {
                recipe,
                readiness: readiness(recipe, pantry),
                makeable: can_make(recipe, pantry),
            })
            .collect()
    }

    /// Read the pantry once, score the candidates and choose one
    pub fn select<R: Rng + ?Sized>(
        &self,
        diet: Diet,
        prefer_optimal: bool,
        rng: &mut R,
    ) -> Result<Selection<'_>, ChefError> {
        let pantry = self.available_items()?;
        let scored = self.readiness_of_recipes(diet, &pantry);

        if scored.is_empty() {
            debug!("No recipes in the catalog suit the {} diet", diet);
            return Ok(Selection {
                pantry,
                scored,
                chosen: None,
            });
        }

        let chosen = choose_recipe(&scored, prefer_optimal, rng);
        match chosen {
            Some(recipe) => info!(
                "Selected '{}' for the {} diet ({} mode)",
                recipe.name,
                diet,
                if prefer_optimal { "optimal" } else { "random" }
            ),
            None => debug!(
                "None of the {} {} recipes can be made with the current pantry",
                scored.len(),
                diet
            ),
        }

        Ok(Selection {
            pantry,
            scored,
            chosen,
        })
    }

    /// Name of a recipe that can be made right now, or `None`
    ///
    /// With `prefer_optimal` the highest-readiness recipe wins and ties go to
    /// the earliest recipe in the catalog. Otherwise one makeable recipe is
    /// drawn uniformly from `rng`.
    pub fn get_recipe<R: Rng + ?Sized>(
        &self,
        diet: Diet,
        prefer_optimal: bool,
        rng: &mut R,
    ) -> Result<Option<String>, ChefError> {
        let selection = self.select(diet, prefer_optimal, rng)?;
        Ok(selection.chosen.map(|recipe| recipe.name.clone()))
    }

    /// Like [`get_recipe`](Self::get_recipe), for a diet given as text
    ///
    /// An unrecognized tag is an [`ChefError::InvalidInput`], never `None`.
    pub fn get_recipe_for_tag<R: Rng + ?Sized>(
        &self,
        diet: &str,
        prefer_optimal: bool,
        rng: &mut R,
    ) -> Result<Option<String>, ChefError> {
        let diet: Diet = diet.parse()?;
        self.get_recipe(diet, prefer_optimal, rng)
    }
}

/// Pick among scored recipes, considering only the makeable ones
pub fn choose_recipe<'a, R: Rng + ?Sized>(
    scored: &[ScoredRecipe<'a>],
    prefer_optimal: bool,
    rng: &mut R,
) -> Option<&'a Recipe> {
    let ready: Vec<ScoredRecipe<'a>> = scored
        .iter()
        .copied()
        .filter(|candidate| candidate.makeable)
        .collect();

    debug!("{} of {} candidates are makeable", ready.len(), scored.len());

    if prefer_optimal {
        let mut best: Option<ScoredRecipe<'a>> = None;
        for candidate in ready {
            // strict comparison keeps the earliest recipe on ties
            if best.map_or(true, |b| candidate.readiness > b.readiness) {
                best = Some(candidate);
            }
        }
        best.map(|candidate| candidate.recipe)
    } else {
        ready.choose(rng).map(|candidate| candidate.recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PantryItem;
    use crate::pantry::InMemoryPantry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn selector(recipes: Vec<Recipe>, items: Vec<PantryItem>) -> RecipeSelector<InMemoryPantry> {
        RecipeSelector::new(
            Arc::new(Catalog::new(recipes).unwrap()),
            InMemoryPantry::new(items),
        )
    }

    fn scored(recipe: &Recipe, readiness: f64, makeable: bool) -> ScoredRecipe<'_> {
        ScoredRecipe {
            recipe,
            readiness,
            makeable,
        }
    }

    #[test]
    fn test_readiness_of_recipes_only_covers_requested_diet() {
        let selector = selector(
            vec![
                Recipe::new("Bread", [("flour", 1.0)], [Diet::Normal, Diet::Vegan]),
                Recipe::new("Omelette", [("egg", 2.0)], [Diet::Normal]),
            ],
            vec![PantryItem::new("egg", 1.0), PantryItem::new("flour", 1.0)],
        );
        let pantry = selector.available_items().unwrap();

        let vegan = selector.readiness_of_recipes(Diet::Vegan, &pantry);
        assert_eq!(vegan.len(), 1);
        assert_eq!(vegan[0].recipe.name, "Bread");
        assert_eq!(vegan[0].readiness, 1.0);
        assert!(vegan[0].makeable);

        let normal = selector.readiness_of_recipes(Diet::Normal, &pantry);
        let names: Vec<&str> = normal.iter().map(|c| c.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Omelette"]);
        assert_eq!(normal[1].readiness, 0.5);
        assert!(!normal[1].makeable);
    }

    #[test]
    fn test_choose_recipe_optimal_prefers_catalog_order_on_ties() {
        let first = Recipe::new("First", [("a", 1.0)], [Diet::Normal]);
        let second = Recipe::new("Second", [("a", 1.0)], [Diet::Normal]);
        let candidates = vec![scored(&first, 1.0, true), scored(&second, 1.0, true)];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let chosen = choose_recipe(&candidates, true, &mut rng).unwrap();
            assert_eq!(chosen.name, "First");
        }
    }

    #[test]
    fn test_choose_recipe_ignores_unmakeable_even_at_full_score() {
        // a shortfall the mean rounded away still scores 1.0
        let rounded = Recipe::new("Rounded", [("a", 1.0)], [Diet::Normal]);
        let ready = Recipe::new("Ready", [("b", 1.0)], [Diet::Normal]);
        let candidates = vec![scored(&rounded, 1.0, false), scored(&ready, 1.0, true)];
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(choose_recipe(&candidates, true, &mut rng).unwrap().name, "Ready");
        for _ in 0..20 {
            assert_eq!(choose_recipe(&candidates, false, &mut rng).unwrap().name, "Ready");
        }
    }

    #[test]
    fn test_choose_recipe_none_ready() {
        let partial = Recipe::new("Partial", [("a", 1.0)], [Diet::Normal]);
        let candidates = vec![scored(&partial, 0.5, false)];
        let mut rng = StdRng::seed_from_u64(1);

        assert!(choose_recipe(&candidates, true, &mut rng).is_none());
        assert!(choose_recipe(&candidates, false, &mut rng).is_none());
        assert!(choose_recipe(&[], false, &mut rng).is_none());
    }

    #[test]
    fn test_random_mode_covers_all_ready_recipes() {
        let a = Recipe::new("A", [("x", 1.0)], [Diet::Normal]);
        let b = Recipe::new("B", [("x", 1.0)], [Diet::Normal]);
        let c = Recipe::new("C", [("x", 1.0)], [Diet::Normal]);
        let candidates = vec![scored(&a, 1.0, true), scored(&b, 1.0, true), scored(&c, 1.0, true)];
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<&str> = (0..100)
            .filter_map(|_| choose_recipe(&candidates, false, &mut rng))
            .map(|recipe| recipe.name.as_str())
            .collect();
        assert_eq!(seen.len(), 3, "Random selection should reach every ready recipe");
    }

    #[test]
    fn test_select_returns_snapshot_scores_and_choice() {
        let selector = selector(
            vec![
                Recipe::new("Bread", [("flour", 1.0)], [Diet::Normal]),
                Recipe::new("Cake", [("flour", 1.0), ("sugar", 1.0)], [Diet::Normal]),
            ],
            vec![PantryItem::new("flour", 1.0)],
        );
        let mut rng = StdRng::seed_from_u64(0);

        let selection = selector.select(Diet::Normal, true, &mut rng).unwrap();
        assert_eq!(selection.pantry.quantity("flour"), 1.0);
        assert_eq!(selection.scored.len(), 2);
        assert_eq!(selection.chosen.map(|r| r.name.as_str()), Some("Bread"));

        let selection = selector.select(Diet::Vegan, true, &mut rng).unwrap();
        assert!(selection.scored.is_empty());
        assert!(selection.chosen.is_none());
    }

    #[test]
    fn test_get_recipe_for_tag_rejects_unknown_diet() {
        let selector = selector(
            vec![Recipe::new("Bread", [("flour", 1.0)], [Diet::Normal])],
            vec![PantryItem::new("flour", 1.0)],
        );
        let mut rng = StdRng::seed_from_u64(0);

        let result = selector.get_recipe_for_tag("keto", true, &mut rng);
        assert!(matches!(result, Err(ChefError::InvalidInput(_))));

        let result = selector.get_recipe_for_tag("NORMAL", true, &mut rng).unwrap();
        assert_eq!(result.as_deref(), Some("Bread"));
    }

    #[test]
    fn test_get_recipe_rejects_bad_pantry() {
        let selector = selector(
            vec![Recipe::new("Bread", [("flour", 1.0)], [Diet::Normal])],
            vec![PantryItem::new("flour", -2.0)],
        );
        let mut rng = StdRng::seed_from_u64(0);

        let result = selector.get_recipe(Diet::Normal, true, &mut rng);
        assert!(matches!(result, Err(ChefError::InvalidInput(_))));
    }
}
