//! Codec adapter for omittable fields
//!
//! Serialization frameworks decide per field whether to write anything.
//! This module makes that decision explicit:
//!
//! ```text
//! encode(codec, &Omittable<T>) -> Skip | Emit(payload)
//! decode(codec, payload)       -> Omittable::Present(value)
//! ```
//!
//! - An absent value is never handed to the codec; the caller omits the field
//! - A present value is encoded exactly once, null payloads included
//! - Decoding only ever sees fields that exist in the source payload, so it
//!   always yields a present value; missing fields are the caller's business
//!   (usually `Default`, which is absent)
//!
//! ## Module Structure
//!
//! - `serialize`: serde `Serialize`/`Deserialize` for `Omittable<T>`
//! - `json`: `serde_json` codec and JSON object field helpers (feature `json`)

mod serialize;

#[cfg(feature = "json")]
pub mod json;

pub use serialize::ABSENT_NOT_SKIPPED;

use crate::omittable::Omittable;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Outcome of encoding one omittable field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEncoding<P> {
    /// Leave the field out of the enclosing structure
    Skip,
    /// Write the field with this payload
    Emit(P),
}

impl<P> FieldEncoding<P> {
    /// Check if the field should be left out
    #[inline]
    pub fn is_skip(&self) -> bool {
        matches!(self, FieldEncoding::Skip)
    }

    /// Get the payload to write, if any
    pub fn into_payload(self) -> Option<P> {
        match self {
            FieldEncoding::Emit(payload) => Some(payload),
            FieldEncoding::Skip => None,
        }
    }
}

/// A serialization layer that can encode and decode single field values
///
/// Implement this for any format; `encode` and `decode` take care of
/// translating absence into a skipped field.
pub trait FieldCodec {
    /// Encoded form of one field value
    type Payload;

    /// Error raised by the underlying format
    type Error;

    /// Encode a present value
    fn encode_value<T>(&self, value: &T) -> Result<Self::Payload, Self::Error>
    where
        T: Serialize + ?Sized;

    /// Decode a value from a field known to be present
    fn decode_value<T>(&self, payload: Self::Payload) -> Result<T, Self::Error>
    where
        T: DeserializeOwned;
}

/// Encode an omittable field
///
/// Returns `Skip` without touching the codec when the value is absent.
///
/// # Errors
///
/// Propagates errors from `C::encode_value`.
pub fn encode<C, T>(codec: &C, value: &Omittable<T>) -> Result<FieldEncoding<C::Payload>, C::Error>
where
    C: FieldCodec,
    T: Serialize,
{
    match value {
        Omittable::Present(value) => codec.encode_value(value).map(FieldEncoding::Emit),
        Omittable::Absent => Ok(FieldEncoding::Skip),
    }
}

/// Decode a field that is present in the source payload
///
/// # Errors
///
/// Propagates errors from `C::decode_value`.
pub fn decode<C, T>(codec: &C, payload: C::Payload) -> Result<Omittable<T>, C::Error>
where
    C: FieldCodec,
    T: DeserializeOwned,
{
    codec.decode_value(payload).map(Omittable::of)
}
