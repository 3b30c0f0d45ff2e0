//! Error types for warnsdorff.
//!
//! All fallible operations return `Result<T, TourError>`. The tick path
//! itself is infallible: a stuck tour is a state transition, not an
//! error, and wrong-state commands are benign no-ops.

use thiserror::Error;

/// Result type alias for tour operations.
pub type TourResult<T> = Result<T, TourError>;

/// Unified error type for configuration and setup.
#[derive(Debug, Error)]
pub enum TourError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TourError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
