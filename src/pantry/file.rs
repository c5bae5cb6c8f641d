use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::error::ChefError;
use crate::model::PantryItem;
use crate::pantry::PantrySource;

/// Pantry stored as a JSON array of `{"name": .., "quantity": ..}` objects
///
/// The file is re-read on every call so each request sees the current contents.
#[derive(Debug, Clone)]
pub struct JsonFilePantry {
    path: PathBuf,
}

impl JsonFilePantry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PantrySource for JsonFilePantry {
    fn get_all(&self) -> Result<Vec<PantryItem>, ChefError> {
        debug!("Reading pantry from {}", self.path.display());
        let contents = fs::read_to_string(&self.path)?;
        let items: Vec<PantryItem> = serde_json::from_str(&contents)?;
        Ok(items)
    }
}
