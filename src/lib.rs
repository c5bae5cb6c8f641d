pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod pantry;
pub mod readiness;
pub mod selector;

// Re-export commonly used types
pub use builder::{CandidateReport, FindReport, RecipeFinder, RecipeFinderBuilder, SelectionMode};
pub use catalog::Catalog;
pub use config::ChefConfig;
pub use error::ChefError;
pub use model::{Diet, PantryItem, Recipe};
pub use pantry::{InMemoryPantry, JsonFilePantry, Pantry, PantrySource};
pub use selector::{RecipeSelector, ScoredRecipe, Selection};

/// Find a recipe using configuration from `config.toml` and the environment
///
/// # Example
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// if let Some(name) = pantry_chef::find_recipe()? {
///     println!("Tonight: {}", name);
/// }
/// # Ok(())
/// # }
/// ```
pub fn find_recipe() -> Result<Option<String>, ChefError> {
    let config = ChefConfig::load()?;
    find_recipe_with_config(&config)
}

/// Find a recipe using the given configuration
pub fn find_recipe_with_config(config: &ChefConfig) -> Result<Option<String>, ChefError> {
    RecipeFinder::builder().config(config).find()
}
