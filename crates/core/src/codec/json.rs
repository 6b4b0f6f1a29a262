//! JSON codec
//!
//! `JsonCodec` encodes field values as `serde_json::Value`. The field helpers
//! work on a raw JSON object, which is what a PATCH handler usually holds:
//!
//! ```
//! use omittable_core::codec::json::{decode_field, encode_field};
//! use omittable_core::Omittable;
//! use serde_json::{json, Map};
//!
//! let body = json!({ "email": null });
//! let object = body.as_object().unwrap();
//!
//! let email: Omittable<Option<String>> = decode_field(object, "email").unwrap();
//! let name: Omittable<Option<String>> = decode_field(object, "name").unwrap();
//! assert!(email.is_null());
//! assert!(name.is_absent());
//!
//! let mut out = Map::new();
//! encode_field(&mut out, "email", &email).unwrap();
//! encode_field(&mut out, "name", &name).unwrap();
//! assert_eq!(serde_json::Value::Object(out), body);
//! ```

use super::{decode, encode, FieldCodec, FieldEncoding};
use crate::omittable::Omittable;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Result type alias for JSON codec operations
pub type Result<T> = std::result::Result<T, JsonCodecError>;

/// Errors raised by the JSON codec
#[derive(Debug, Error)]
pub enum JsonCodecError {
    /// The value could not be converted to or from JSON
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// A named field could not be converted to or from JSON
    #[error("JSON codec error in field '{name}': {source}")]
    Field {
        /// Name of the offending field
        name: String,
        /// Underlying serde_json error
        #[source]
        source: serde_json::Error,
    },
}

impl JsonCodecError {
    fn in_field(self, name: &str) -> Self {
        match self {
            JsonCodecError::Json(source) => JsonCodecError::Field {
                name: name.to_string(),
                source,
            },
            other => other,
        }
    }
}

/// Field codec producing `serde_json::Value` payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl FieldCodec for JsonCodec {
    type Payload = Value;
    type Error = JsonCodecError;

    fn encode_value<T>(&self, value: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        Ok(serde_json::to_value(value)?)
    }

    fn decode_value<T>(&self, payload: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(payload)?)
    }
}

/// Write an omittable field into a JSON object
///
/// The key is inserted only if the value is present. Returns whether the key
/// was written.
///
/// # Errors
///
/// Returns `JsonCodecError::Field` if the value cannot be converted to JSON.
pub fn encode_field<T>(object: &mut Map<String, Value>, name: &str, value: &Omittable<T>) -> Result<bool>
where
    T: Serialize,
{
    match encode(&JsonCodec, value).map_err(|e| e.in_field(name))? {
        FieldEncoding::Emit(payload) => {
            object.insert(name.to_string(), payload);
            Ok(true)
        }
        FieldEncoding::Skip => Ok(false),
    }
}

/// Read an omittable field from a JSON object
///
/// A missing key yields `Omittable::Absent`; any present key, `null`
/// included, yields `Omittable::Present`.
///
/// # Errors
///
/// Returns `JsonCodecError::Field` if the value does not match `T`.
pub fn decode_field<T>(object: &Map<String, Value>, name: &str) -> Result<Omittable<T>>
where
    T: DeserializeOwned,
{
    match object.get(name) {
        Some(payload) => decode(&JsonCodec, payload.clone()).map_err(|e| e.in_field(name)),
        None => Ok(Omittable::absent()),
    }
}
