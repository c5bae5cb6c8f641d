mod file;
mod memory;

pub use file::JsonFilePantry;
pub use memory::InMemoryPantry;

use std::collections::HashMap;

use log::debug;

use crate::error::ChefError;
use crate::model::PantryItem;

/// Read-only access to whatever stores the pantry contents
pub trait PantrySource {
    /// Return every item currently in the pantry
    fn get_all(&self) -> Result<Vec<PantryItem>, ChefError>;
}

impl<T: PantrySource + ?Sized> PantrySource for &T {
    fn get_all(&self) -> Result<Vec<PantryItem>, ChefError> {
        (**self).get_all()
    }
}

impl<T: PantrySource + ?Sized> PantrySource for Box<T> {
    fn get_all(&self) -> Result<Vec<PantryItem>, ChefError> {
        (**self).get_all()
    }
}

/// Snapshot of ingredient name to quantity on hand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pantry {
    items: HashMap<String, f64>,
}

impl Pantry {
    /// Build a snapshot, summing duplicate names
    pub fn from_items(items: impl IntoIterator<Item = PantryItem>) -> Result<Self, ChefError> {
        let mut map: HashMap<String, f64> = HashMap::new();

        for item in items {
            if !item.quantity.is_finite() || item.quantity < 0.0 {
                return Err(ChefError::InvalidInput(format!(
                    "pantry item '{}' has invalid quantity {}",
                    item.name, item.quantity
                )));
            }
            *map.entry(item.name).or_insert(0.0) += item.quantity;
        }

        debug!("Pantry snapshot holds {} distinct items", map.len());
        Ok(Self { items: map })
    }

    /// Fetch a fresh snapshot from `source`
    pub fn snapshot(source: &impl PantrySource) -> Result<Self, ChefError> {
        Self::from_items(source.get_all()?)
    }

    /// Quantity on hand; zero for unknown items
    pub fn quantity(&self, name: &str) -> f64 {
        self.items.get(name).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_quantity(&self) -> f64 {
        self.items.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.items.iter().map(|(name, quantity)| (name.as_str(), *quantity))
    }
}
