use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::model::Diet;

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChefConfig {
    /// Recipe catalog JSON file; the bundled catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Pantry JSON file
    #[serde(default = "default_pantry_path")]
    pub pantry_path: PathBuf,
    /// Diet used when none is requested explicitly
    #[serde(default)]
    pub default_diet: Diet,
    /// Pick the most ready recipe instead of a random one
    #[serde(default = "default_prefer_optimal")]
    pub prefer_optimal: bool,
    /// Seed for random selection, for reproducible picks
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            pantry_path: default_pantry_path(),
            default_diet: Diet::default(),
            prefer_optimal: default_prefer_optimal(),
            seed: None,
        }
    }
}

// Default value functions
fn default_pantry_path() -> PathBuf {
    PathBuf::from("pantry.json")
}

fn default_prefer_optimal() -> bool {
    true
}

impl ChefConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY_CHEF__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY_CHEF__DEFAULT_DIET
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from `config.toml` and `PANTRY_CHEF__*` environment variables
pub fn load_config() -> Result<ChefConfig, ConfigError> {
    load_config_from("config")
}

/// Same as [`load_config`], reading the file named `file_stem` (extension optional)
pub fn load_config_from(file_stem: &str) -> Result<ChefConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_stem).required(false))
        .add_source(
            Environment::with_prefix("PANTRY_CHEF")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = ChefConfig::default();
        assert_eq!(config.pantry_path, PathBuf::from("pantry.json"));
        assert_eq!(config.default_diet, Diet::Normal);
        assert!(config.prefer_optimal);
        assert!(config.catalog_path.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("absent");

        let config = load_config_from(stem.to_str().unwrap()).unwrap();
        assert_eq!(config.pantry_path, default_pantry_path());
        assert!(config.prefer_optimal);
    }

    #[test]
    fn test_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chef.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
catalog_path = "recipes.json"
pantry_path = "/tmp/my-pantry.json"
default_diet = "Gluten-Free"
prefer_optimal = false
seed = 99
"#
        )
        .unwrap();

        let config = load_config_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("recipes.json")));
        assert_eq!(config.pantry_path, PathBuf::from("/tmp/my-pantry.json"));
        assert_eq!(config.default_diet, Diet::GlutenFree);
        assert!(!config.prefer_optimal);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_unknown_diet_in_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chef.toml");
        std::fs::write(&path, "default_diet = \"carnivore\"\n").unwrap();

        assert!(load_config_from(path.to_str().unwrap()).is_err());
    }
}
