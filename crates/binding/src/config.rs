//! Binding configuration
//!
//! Controls how borderline request parameters are bound. Can be embedded in a
//! larger service config or loaded from TOML on its own.
//!
//! # Example
//!
//! ```toml
//! # Treat `?name=` like `?name`, i.e. present with a null value (default: true)
//! empty_as_null = true
//!
//! # Which occurrence wins when a parameter repeats: "first" (default) or "last"
//! duplicates = "first"
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Which occurrence of a repeated parameter is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// The first occurrence wins
    #[default]
    First,
    /// The last occurrence wins
    Last,
}

/// Configuration for binding query parameters to omittable values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindConfig {
    /// Bind `name=` (empty value) as present-with-null instead of an empty string.
    #[serde(default = "default_empty_as_null")]
    pub empty_as_null: bool,
    /// Occurrence that wins when a parameter is repeated.
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

fn default_empty_as_null() -> bool {
    true
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            empty_as_null: default_empty_as_null(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl BindConfig {
    /// Parse a configuration from TOML text
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `BindError::Config` if the text is not valid TOML or has
    /// values of the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
