use std::error::Error;
use std::fmt::Display;

/// Error type for application operations
#[derive(Debug)]
pub enum AppError {
    /// Error while persisting an entity
    PersistenceError(String),
    /// Entity or configuration failed validation
    ValidationError(String),
    /// Malformed configuration input
    ConfigError(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::PersistenceError(msg) => write!(f, "Persistence error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for AppError {}
