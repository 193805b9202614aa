use std::path::PathBuf;
use thiserror::Error;

/// Wikimap error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Failed to fetch catalog: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Failed to load catalog from {url}: HTTP {status}")]
    Load { url: String, status: u16 },

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Wikimap operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create a load error for a non-success HTTP fetch
    pub fn load(url: impl Into<String>, status: u16) -> Self {
        Error::Load {
            url: url.into(),
            status,
        }
    }

    /// Create a catalog validation error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Error::Catalog(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
