use thiserror::Error;

/// Errors that can occur while loading recipes or selecting one
#[derive(Error, Debug)]
pub enum ChefError {
    /// A caller-supplied value was not acceptable (unknown diet, bad quantity)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The recipe catalog violates one of its invariants
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Failed to read a catalog or pantry file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a catalog or pantry file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
