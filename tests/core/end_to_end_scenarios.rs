//! End-to-end scenarios for the Omittable type and its serde integration

use crate::common::*;
use omittable::Error;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TestDto {
    #[serde(default, skip_serializing_if = "Omittable::is_absent")]
    name: Omittable<String>,
    #[serde(default, skip_serializing_if = "Omittable::is_absent")]
    count: Omittable<i32>,
    #[serde(default, skip_serializing_if = "Omittable::is_absent")]
    nullable: Omittable<Option<String>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    email: Option<String>,
    age: u32,
}

#[derive(Debug, Deserialize)]
struct PersonPatch {
    #[serde(default)]
    name: Omittable<String>,
    #[serde(default)]
    email: Omittable<Option<String>>,
    #[serde(default)]
    age: Omittable<u32>,
}

impl PersonPatch {
    fn apply(self, person: &mut Person) -> usize {
        [
            self.name.apply_to(&mut person.name),
            self.email.apply_to(&mut person.email),
            self.age.apply_to(&mut person.age),
        ]
        .into_iter()
        .filter(|written| *written)
        .count()
    }
}

fn karl() -> Person {
    Person {
        name: "Karl".to_string(),
        email: Some("karl@example.com".to_string()),
        age: 40,
    }
}

#[test]
fn test_map_string_length() {
    assert_eq!(
        Omittable::of("Hello, World!").map(|s| s.len()),
        Omittable::of(13)
    );
}

#[test]
fn test_filter_on_absent_skips_predicate() {
    let calls = CallCounter::new();
    let result = Omittable::<Box<dyn std::any::Any>>::absent().filter(|x| {
        calls.hit();
        x.is::<String>()
    });
    assert!(result.is_absent());
    assert_eq!(calls.count(), 0);
}

#[test]
fn test_encode_omits_absent_field() {
    let dto = TestDto {
        name: Omittable::of("Test".to_string()),
        count: Omittable::of(123),
        nullable: Omittable::absent(),
    };

    let encoded = serde_json::to_value(&dto).unwrap();
    assert_eq!(encoded, json!({ "name": "Test", "count": 123 }));
    assert!(encoded.get("nullable").is_none());

    let decoded: TestDto = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded.nullable, Omittable::absent());
    assert_eq!(decoded, dto);
}

#[test]
fn test_encode_keeps_null_field() {
    let dto = TestDto {
        name: Omittable::of("Test".to_string()),
        count: Omittable::of(123),
        nullable: Omittable::of(None),
    };

    let encoded = serde_json::to_string(&dto).unwrap();
    assert_eq!(encoded, r#"{"name":"Test","count":123,"nullable":null}"#);

    let decoded: TestDto = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.nullable, Omittable::of(None));
    assert_eq!(decoded, dto);
}

#[test]
fn test_or_else_throw() {
    assert_eq!(
        Omittable::<String>::absent().or_else_throw(),
        Err(Error::NoSuchElement)
    );
    assert_eq!(Omittable::of("x").or_else_throw(), Ok("x"));
}

#[test]
fn test_or_is_lazy() {
    let calls = CallCounter::new();
    let kept = Omittable::of("x").or(|| {
        calls.hit();
        Omittable::of("y")
    });
    assert_eq!(kept, Omittable::of("x"));
    assert_eq!(calls.count(), 0);

    let replaced = Omittable::<&str>::absent().or(|| Omittable::of("y"));
    assert_eq!(replaced, Omittable::of("y"));
}

#[test]
fn test_patch_request_body() {
    let mut person = karl();
    let patch: PersonPatch = serde_json::from_str(r#"{"email":null,"age":41}"#).unwrap();
    assert!(patch.name.is_absent());
    assert!(patch.email.is_null());

    assert_eq!(patch.apply(&mut person), 2);
    assert_eq!(
        person,
        Person {
            name: "Karl".to_string(),
            email: None,
            age: 41,
        }
    );
}

#[test]
fn test_empty_patch_changes_nothing() {
    let mut person = karl();
    let patch: PersonPatch = serde_json::from_str("{}").unwrap();
    assert_eq!(patch.apply(&mut person), 0);
    assert_eq!(person, karl());
}
