//! JSON schema integration
//!
//! An omittable field documents exactly like a plain `T` field. Optionality
//! comes from the `#[serde(default)]` attribute every omittable field already
//! carries, which `schemars` turns into "not required".

use crate::omittable::Omittable;
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use std::borrow::Cow;

impl<T: JsonSchema> JsonSchema for Omittable<T> {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        T::schema_name()
    }

    fn schema_id() -> Cow<'static, str> {
        T::schema_id()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        gen.subschema_for::<T>()
    }
}
