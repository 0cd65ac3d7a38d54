use thiserror::Error;

/// Errors emitted while building or querying a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown type: {0}")]
    UnknownType(String),
    #[error("duplicate type: {0}")]
    DuplicateType(String),
    #[error("unsupported registry format: {0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
