//! Core types for omittable values
//!
//! This crate defines:
//! - Omittable: container distinguishing "absent" from "present, possibly null"
//! - Error: extraction error type
//! - Codec adapter: `FieldCodec`, `FieldEncoding`, serde integration
//! - JSON codec (feature `json`): `JsonCodec`, `encode_field`, `decode_field`
//! - JSON schema (feature `schemars`): transparent `JsonSchema` impl
//!
//! ## Declaring omittable fields
//!
//! ```
//! use omittable_core::Omittable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct PersonPatch {
//!     #[serde(default, skip_serializing_if = "Omittable::is_absent")]
//!     name: Omittable<Option<String>>,
//! }
//!
//! let patch: PersonPatch = serde_json::from_str("{}").unwrap();
//! assert!(patch.name.is_absent());
//!
//! let patch: PersonPatch = serde_json::from_str(r#"{"name":null}"#).unwrap();
//! assert!(patch.name.is_null());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod omittable;

#[cfg(feature = "schemars")]
pub mod schema;

pub use codec::{decode, encode, FieldCodec, FieldEncoding};
pub use error::{Error, Result};
pub use omittable::{DisplayNullable, IntoIter, Iter, Omittable};

#[cfg(feature = "json")]
pub use codec::json::{decode_field, encode_field, JsonCodec, JsonCodecError};
