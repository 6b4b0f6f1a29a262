//! Omittable - tell absent fields apart from present-but-null fields
//!
//! `Option<T>` cannot say whether a PATCH body left a field out or set it to
//! `null`. `Omittable<Option<T>>` can.
//!
//! # Quick Start
//!
//! ```
//! use omittable::Omittable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct PersonPatch {
//!     #[serde(default, skip_serializing_if = "Omittable::is_absent")]
//!     name: Omittable<Option<String>>,
//!     #[serde(default, skip_serializing_if = "Omittable::is_absent")]
//!     age: Omittable<u32>,
//! }
//!
//! let patch: PersonPatch = serde_json::from_str(r#"{"name":null}"#).unwrap();
//! assert!(patch.name.is_null());
//! assert!(patch.age.is_absent());
//!
//! let mut name = Some("Karl".to_string());
//! patch.name.apply_to(&mut name);
//! assert_eq!(name, None);
//! ```
//!
//! # Architecture
//!
//! - `omittable-core`: the `Omittable` type, its combinators and the codec adapter
//! - `omittable-binding`: binding request query parameters to `Omittable` values

// Re-export the public API from the member crates
pub use omittable_binding::{BindConfig, BindError, DuplicatePolicy, QueryParams};
pub use omittable_core::*;

/// Request binding
pub mod binding {
    pub use omittable_binding::*;
}
