//! serde integration
//!
//! `Omittable<T>` serializes exactly like `T`. Skipping is the job of the
//! enclosing struct, which marks each omittable field with:
//!
//! ```text
//! #[serde(default, skip_serializing_if = "Omittable::is_absent")]
//! ```
//!
//! `default` yields `Omittable::Absent` for a field missing from the input;
//! `skip_serializing_if` drops absent fields from the output.
//!
//! Do not leave out `default`. Without it serde decodes a missing
//! `Omittable<Option<T>>` field as `Present(None)`, i.e. as an explicit null.

use crate::omittable::Omittable;
use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};

/// Error message raised when an absent value reaches a serializer
pub const ABSENT_NOT_SKIPPED: &str =
    "absent value must be skipped, mark the field with #[serde(default, skip_serializing_if = \"Omittable::is_absent\")]";

impl<T: Serialize> Serialize for Omittable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Omittable::Present(value) => value.serialize(serializer),
            Omittable::Absent => Err(<S::Error as ser::Error>::custom(ABSENT_NOT_SKIPPED)),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Omittable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Omittable::Present)
    }
}
