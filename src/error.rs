//! Error types for the JSON:API parsing engine.
//!
//! This module contains the single validation error raised by every parser,
//! plus the configuration error raised by [`ParserConfigBuilder`](crate::ParserConfigBuilder).
//!
//! # Error Handling
//!
//! Every parser returns `Result<T, ValidationError>` and stops at the first
//! violation it finds. No partially built [`Item`](crate::Item),
//! [`Links`](crate::Links) or [`ErrorCollection`](crate::ErrorCollection)
//! is ever returned.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_client::{MetaParser, ValidationError};
//! use serde_json::json;
//!
//! let result = MetaParser::new().parse(&json!([]));
//! assert!(matches!(result, Err(ValidationError::NotAnObject { .. })));
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::model::{LinkSource, RelationKind};

/// The kind of a decoded JSON value, used to describe what was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// Any number.
    Number,
    /// Any string.
    String,
    /// Any array, including `[]`.
    Array,
    /// Any object, including `{}`.
    Object,
}

impl JsonKind {
    /// Returns the kind of the given value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A violation of the JSON:API document structure.
///
/// Each variant renders a message naming the offending member and, where
/// relevant, the kind of value that was given.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value that must be an object was something else.
    #[error("{context} MUST be an object, \"{given}\" given.")]
    NotAnObject {
        /// What was being parsed (e.g. "Resource object", "Meta").
        context: String,
        /// The kind of value that was given.
        given: JsonKind,
    },

    /// A value that must be an array was something else.
    #[error("{context} MUST be an array, \"{given}\" given.")]
    NotAnArray {
        /// What was being parsed.
        context: String,
        /// The kind of value that was given.
        given: JsonKind,
    },

    /// A required member is absent.
    #[error("{context} MUST contain a `{member}` property.")]
    MissingMember {
        /// What was being parsed.
        context: String,
        /// The name of the missing member.
        member: &'static str,
    },

    /// A member has the wrong kind of value.
    #[error("{context} property `{member}` MUST be {expected}, \"{given}\" given.")]
    InvalidMember {
        /// What was being parsed.
        context: String,
        /// The name of the offending member.
        member: String,
        /// Human-readable description of the accepted kinds.
        expected: &'static str,
        /// The kind of value that was given.
        given: JsonKind,
    },

    /// A member that must be a non-empty string is empty.
    #[error("{context} property `{member}` MUST NOT be an empty string.")]
    EmptyMember {
        /// What was being parsed.
        context: String,
        /// The name of the offending member.
        member: &'static str,
    },

    /// A reserved name appears where it is not allowed.
    #[error("Property `{member}` is not allowed in {context}.")]
    ReservedMember {
        /// The container the name appeared in ("attributes" or "relationships").
        context: &'static str,
        /// The reserved name.
        member: &'static str,
    },

    /// The same name is used by an attribute and a relationship.
    #[error("Relationship and attribute names MUST be unique, `{name}` is used by both.")]
    DuplicateName {
        /// The shared name.
        name: String,
    },

    /// A relationship object has none of `links`, `data` or `meta`.
    #[error("Relationship `{name}` MUST contain at least one of the following properties: `links`, `data`, `meta`.")]
    EmptyRelationship {
        /// The relationship name.
        name: String,
    },

    /// Relationship `data` is not null, an object or an array.
    #[error("Resource linkage of relationship `{name}` MUST be null, an object or an array, \"{given}\" given.")]
    InvalidLinkage {
        /// The relationship name.
        name: String,
        /// The kind of value that was given.
        given: JsonKind,
    },

    /// A links object lacks the links its context requires.
    #[error("{link_source} links object MUST contain at least one of the following properties: {required}.")]
    MissingRequiredLinks {
        /// Where the links object appeared.
        link_source: LinkSource,
        /// The required link names, formatted for display.
        required: &'static str,
    },

    /// A link value has the wrong kind.
    ///
    /// `self` and `related` are not nullable; every other link is.
    #[error("Link \"{name}\" has to be an object{}, \"{given}\" given.", link_kinds(.nullable))]
    InvalidLink {
        /// The link name.
        name: String,
        /// Whether `null` would have been accepted.
        nullable: bool,
        /// The kind of value that was given.
        given: JsonKind,
    },

    /// A link object has no `href`.
    #[error("Link \"{name}\" must have a \"href\" attribute.")]
    MissingHref {
        /// The link name.
        name: String,
    },

    /// Relationship data disagrees with the declared relation.
    #[error("Relationship `{name}` is declared as {declared} but its data is {given}.")]
    CardinalityMismatch {
        /// The relationship name.
        name: String,
        /// The declared relation kind.
        declared: RelationKind,
        /// The shape of the data that was given.
        given: JsonKind,
    },

    /// A resource has more relationships than the configured limit allows.
    #[error("Resource object has {count} relationships, the limit is {limit}.")]
    TooManyRelationships {
        /// The number of relationships found.
        count: usize,
        /// The configured limit.
        limit: usize,
    },

    /// An errors array is empty.
    #[error("Errors array cannot be empty and MUST have at least one object.")]
    EmptyErrors,

    /// A violation reported by a caller-supplied parser.
    #[error("{0}")]
    Custom(String),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn link_kinds(nullable: &bool) -> &'static str {
    if *nullable {
        ", string or null"
    } else {
        " or string"
    }
}

impl ValidationError {
    /// Creates a [`ValidationError::Custom`] with the given message.
    ///
    /// Intended for [`ErrorParser`](crate::ErrorParser) implementations
    /// outside this crate.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Errors that can occur while building a [`ParserConfig`](crate::ParserConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A limit was set to a value that would reject every document.
    #[error("Invalid limit for '{field}': {value}. The limit must be at least 1.")]
    InvalidLimit {
        /// The name of the offending setting.
        field: &'static str,
        /// The value that was provided.
        value: usize,
    },

    /// A cardinality policy name was not recognized.
    #[error("Invalid cardinality policy '{value}'. Expected 'reject' or 'infer'.")]
    InvalidCardinalityPolicy {
        /// The value that was provided.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_kind_of_covers_every_value() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(false)), JsonKind::Boolean);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("foo")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn test_not_an_object_message_names_given_kind() {
        let error = ValidationError::NotAnObject {
            context: "Meta".to_string(),
            given: JsonKind::Array,
        };
        assert_eq!(
            error.to_string(),
            "Meta MUST be an object, \"array\" given."
        );
    }

    #[test]
    fn test_invalid_link_message_depends_on_nullability() {
        let strict = ValidationError::InvalidLink {
            name: "self".to_string(),
            nullable: false,
            given: JsonKind::Null,
        };
        assert_eq!(
            strict.to_string(),
            "Link \"self\" has to be an object or string, \"null\" given."
        );

        let lenient = ValidationError::InvalidLink {
            name: "next".to_string(),
            nullable: true,
            given: JsonKind::Number,
        };
        assert_eq!(
            lenient.to_string(),
            "Link \"next\" has to be an object, string or null, \"number\" given."
        );
    }

    #[test]
    fn test_missing_required_links_message_names_source() {
        let error = ValidationError::MissingRequiredLinks {
            link_source: LinkSource::Error,
            required: "`about`",
        };
        let message = error.to_string();
        assert!(message.starts_with("error links object"));
        assert!(message.contains("`about`"));
    }

    #[test]
    fn test_config_error_message() {
        let error = ConfigError::InvalidLimit {
            field: "max_relationships",
            value: 0,
        };
        let message = error.to_string();
        assert!(message.contains("max_relationships"));
        assert!(message.contains("at least 1"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ValidationError::EmptyErrors;
        let _: &dyn std::error::Error = &error;
    }
}
