//! Guard checks shared by the parsers.
//!
//! Each guard either returns the validated value or the first
//! [`ValidationError`] it finds.

use serde_json::{Map, Value};

use crate::error::{JsonKind, ValidationError};

/// Returns `value` as an object, or fails naming `context`.
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    context: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(ValidationError::NotAnObject {
            context: context.to_string(),
            given: JsonKind::of(other),
        }),
    }
}

/// Returns `value` as an array, or fails naming `context`.
pub(crate) fn expect_array<'a>(
    value: &'a Value,
    context: &str,
) -> Result<&'a Vec<Value>, ValidationError> {
    match value {
        Value::Array(array) => Ok(array),
        other => Err(ValidationError::NotAnArray {
            context: context.to_string(),
            given: JsonKind::of(other),
        }),
    }
}

/// Returns the required, non-empty string member `member` of `object`.
pub(crate) fn required_string<'a>(
    object: &'a Map<String, Value>,
    member: &'static str,
    context: &str,
) -> Result<&'a str, ValidationError> {
    let value = object
        .get(member)
        .ok_or_else(|| ValidationError::MissingMember {
            context: context.to_string(),
            member,
        })?;

    let Some(value) = value.as_str() else {
        return Err(ValidationError::InvalidMember {
            context: context.to_string(),
            member: member.to_string(),
            expected: "a string",
            given: JsonKind::of(value),
        });
    };

    if value.is_empty() {
        return Err(ValidationError::EmptyMember {
            context: context.to_string(),
            member,
        });
    }

    Ok(value)
}

/// Returns the optional string member `member` of `object`.
pub(crate) fn optional_string(
    object: &Map<String, Value>,
    member: &'static str,
    context: &str,
) -> Result<Option<String>, ValidationError> {
    object
        .get(member)
        .map(|value| {
            value
                .as_str()
                .map(ToString::to_string)
                .ok_or_else(|| ValidationError::InvalidMember {
                    context: context.to_string(),
                    member: member.to_string(),
                    expected: "a string",
                    given: JsonKind::of(value),
                })
        })
        .transpose()
}

/// Fails with the first member of `reserved` present in `object`.
pub(crate) fn reject_reserved(
    object: &Map<String, Value>,
    reserved: &[&'static str],
    context: &'static str,
) -> Result<(), ValidationError> {
    match reserved.iter().find(|name| object.contains_key(**name)) {
        Some(member) => Err(ValidationError::ReservedMember { context, member }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: &Value) -> &Map<String, Value> {
        value.as_object().unwrap()
    }

    #[test]
    fn test_expect_object_accepts_empty_object_and_rejects_empty_array() {
        assert!(expect_object(&json!({}), "Meta").is_ok());
        assert!(matches!(
            expect_object(&json!([]), "Meta"),
            Err(ValidationError::NotAnObject {
                given: JsonKind::Array,
                ..
            })
        ));
    }

    #[test]
    fn test_required_string_distinguishes_missing_invalid_and_empty() {
        let value = json!({"type": "", "id": 1});

        assert!(matches!(
            required_string(object(&value), "type", "Resource object"),
            Err(ValidationError::EmptyMember { member: "type", .. })
        ));
        assert!(matches!(
            required_string(object(&value), "id", "Resource object"),
            Err(ValidationError::InvalidMember {
                given: JsonKind::Number,
                ..
            })
        ));
        assert!(matches!(
            required_string(object(&json!({})), "id", "Resource object"),
            Err(ValidationError::MissingMember { member: "id", .. })
        ));
    }

    #[test]
    fn test_optional_string() {
        let value = json!({"title": "Oops", "status": 422});

        assert_eq!(
            optional_string(object(&value), "title", "Error object").unwrap(),
            Some("Oops".to_string())
        );
        assert_eq!(
            optional_string(object(&value), "detail", "Error object").unwrap(),
            None
        );
        assert!(optional_string(object(&value), "status", "Error object").is_err());
    }

    #[test]
    fn test_reject_reserved_reports_first_reserved_name() {
        let value = json!({"links": null, "id": null});

        assert_eq!(
            reject_reserved(object(&value), &["type", "id", "links"], "attributes"),
            Err(ValidationError::ReservedMember {
                context: "attributes",
                member: "id",
            })
        );
        assert!(reject_reserved(object(&json!({"name": 1})), &["type"], "attributes").is_ok());
    }

    #[test]
    fn test_expect_array() {
        assert!(expect_array(&json!([1]), "Errors").is_ok());
        assert!(matches!(
            expect_array(&json!({"foo": "bar"}), "Errors"),
            Err(ValidationError::NotAnArray {
                given: JsonKind::Object,
                ..
            })
        ));
    }
}
