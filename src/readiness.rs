//! Readiness: how much of a recipe the pantry can cover.
//!
//! Each ingredient contributes `min(on_hand / required, 1.0)`; the recipe's
//! readiness is the mean over its ingredients. The mean is for ranking and
//! display only. Whether a recipe can be made is decided per ingredient by
//! [`can_make`], since a float mean can round a shortfall up to `1.0`.

use crate::model::Recipe;
use crate::pantry::Pantry;

/// Coverage of an ingredient that is on hand in full
pub const FULLY_READY: f64 = 1.0;

/// Fraction of `recipe` the pantry can cover, in `[0.0, 1.0]`
pub fn readiness(recipe: &Recipe, pantry: &Pantry) -> f64 {
    if recipe.ingredients.is_empty() {
        return 0.0;
    }

    let covered: f64 = recipe
        .ingredients
        .iter()
        .map(|(name, required)| ingredient_coverage(pantry.quantity(name), *required))
        .sum();

    covered / recipe.ingredients.len() as f64
}

/// True when every ingredient is on hand in at least the required quantity
///
/// A recipe with no ingredients is never makeable.
pub fn can_make(recipe: &Recipe, pantry: &Pantry) -> bool {
    !recipe.ingredients.is_empty()
        && recipe
            .ingredients
            .iter()
            .all(|(name, required)| pantry.quantity(name) >= *required)
}

fn ingredient_coverage(on_hand: f64, required: f64) -> f64 {
    if on_hand >= required {
        FULLY_READY
    } else {
        (on_hand / required).clamp(0.0, FULLY_READY)
    }
}
