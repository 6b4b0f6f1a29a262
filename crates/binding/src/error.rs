//! Error types for request binding

use thiserror::Error;

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, BindError>;

/// Errors raised while binding request parameters
#[derive(Debug, Error)]
pub enum BindError {
    /// A parameter was supplied with a value that does not parse as the target type
    #[error("Invalid value '{value}' for parameter '{name}': {reason}")]
    InvalidValue {
        /// Parameter name
        name: String,
        /// Raw (decoded) parameter value
        value: String,
        /// Parser error message
        reason: String,
    },

    /// Binding configuration could not be loaded
    #[error("Invalid binding configuration: {0}")]
    Config(#[from] toml::de::Error),
}
