//! Links parsing.

use serde_json::Value;

use super::guards::expect_object;
use super::MetaParser;
use crate::error::{JsonKind, ValidationError};
use crate::model::{Link, LinkSource, Links};

/// Links that must hold an object or string whenever their key is present.
const NON_NULLABLE_LINKS: [&str; 2] = ["self", "related"];

/// Parses links objects.
///
/// Which links must be present depends on the [`LinkSource`]:
///
/// - `Error`: `about`
/// - `Relationship`: `self` or `related`
/// - `Document`, `Item`: none
///
/// Every link may be a string, an object with an `href`, or `null`, except
/// `self` and `related` which may not be `null`.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{LinkSource, LinksParser};
/// use serde_json::json;
///
/// let parser = LinksParser::new();
/// let links = parser
///     .parse(
///         &json!({"related": {"href": "http://x/a/author", "meta": {"count": 1}}}),
///         LinkSource::Relationship,
///     )
///     .unwrap();
///
/// let related = links.get("related").unwrap();
/// assert_eq!(related.href, "http://x/a/author");
/// assert!(related.meta.is_some());
///
/// assert!(parser.parse(&json!({}), LinkSource::Relationship).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LinksParser {
    meta_parser: MetaParser,
}

impl LinksParser {
    /// Creates a links parser.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            meta_parser: MetaParser::new(),
        }
    }

    /// Parses `raw` into [`Links`], applying the rules of `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `raw` is not an object, lacks the
    /// links `source` requires, or holds an invalid link.
    pub fn parse(&self, raw: &Value, source: LinkSource) -> Result<Links, ValidationError> {
        let object = expect_object(raw, "Links object")?;

        match source {
            LinkSource::Error if !object.contains_key("about") => {
                return Err(ValidationError::MissingRequiredLinks {
                    link_source: source,
                    required: "`about`",
                });
            }
            LinkSource::Relationship
                if !object.contains_key("self") && !object.contains_key("related") =>
            {
                return Err(ValidationError::MissingRequiredLinks {
                    link_source: source,
                    required: "`self`, `related`",
                });
            }
            _ => {}
        }

        object
            .iter()
            .map(|(name, value)| Ok((name.clone(), self.build_link(name, value)?)))
            .collect()
    }

    fn build_link(&self, name: &str, value: &Value) -> Result<Option<Link>, ValidationError> {
        let nullable = !NON_NULLABLE_LINKS.contains(&name);

        match value {
            Value::Null if nullable => Ok(None),
            Value::String(href) => Ok(Some(Link::new(href.as_str()))),
            Value::Object(object) => {
                let Some(href) = object.get("href") else {
                    return Err(ValidationError::MissingHref {
                        name: name.to_string(),
                    });
                };
                let Some(href) = href.as_str() else {
                    return Err(ValidationError::InvalidMember {
                        context: format!("Link \"{name}\""),
                        member: "href".to_string(),
                        expected: "a string",
                        given: JsonKind::of(href),
                    });
                };
                let meta = object
                    .get("meta")
                    .map(|meta| self.meta_parser.parse(meta))
                    .transpose()?;

                Ok(Some(Link {
                    href: href.to_string(),
                    meta,
                }))
            }
            other => Err(ValidationError::InvalidLink {
                name: name.to_string(),
                nullable,
                given: JsonKind::of(other),
            }),
        }
    }
}
