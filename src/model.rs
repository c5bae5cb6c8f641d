use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChefError;

/// Dietary tag used to restrict which recipes are eligible
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Diet {
    #[default]
    Normal,
    Vegetarian,
    Vegan,
    Pescatarian,
    GlutenFree,
}

impl Diet {
    /// Every recognized diet, in declaration order
    pub const ALL: [Diet; 5] = [
        Diet::Normal,
        Diet::Vegetarian,
        Diet::Vegan,
        Diet::Pescatarian,
        Diet::GlutenFree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Normal => "normal",
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
            Diet::Pescatarian => "pescatarian",
            Diet::GlutenFree => "gluten_free",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = ChefError;

    /// Case-insensitive; `-` and `_` are interchangeable
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Diet::ALL
            .into_iter()
            .find(|diet| diet.as_str() == normalized)
            .ok_or_else(|| {
                ChefError::InvalidInput(format!(
                    "unrecognized diet '{}' (expected one of: {})",
                    s,
                    Diet::ALL.map(|d| d.as_str()).join(", ")
                ))
            })
    }
}

impl TryFrom<String> for Diet {
    type Error = ChefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A recipe definition from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Ingredient name to required quantity
    pub ingredients: BTreeMap<String, f64>,
    pub diets: BTreeSet<Diet>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl IntoIterator<Item = (impl Into<String>, f64)>,
        diets: impl IntoIterator<Item = Diet>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients
                .into_iter()
                .map(|(name, quantity)| (name.into(), quantity))
                .collect(),
            diets: diets.into_iter().collect(),
        }
    }

    pub fn suits(&self, diet: Diet) -> bool {
        self.diets.contains(&diet)
    }
}

/// One row as returned by a pantry source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    pub quantity: f64,
}

impl PantryItem {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}
