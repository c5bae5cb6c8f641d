use crate::error::ChefError;
use crate::model::PantryItem;
use crate::pantry::PantrySource;

/// Pantry held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryPantry {
    items: Vec<PantryItem>,
}

impl InMemoryPantry {
    pub fn new(items: Vec<PantryItem>) -> Self {
        Self { items }
    }
}

impl PantrySource for InMemoryPantry {
    fn get_all(&self) -> Result<Vec<PantryItem>, ChefError> {
        Ok(self.items.clone())
    }
}
