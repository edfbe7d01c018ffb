//! Links objects.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::Meta;

/// Where a links object appeared, which decides the links it must contain.
///
/// - [`LinkSource::Error`] requires `about`
/// - [`LinkSource::Relationship`] requires `self` or `related`
/// - [`LinkSource::Document`] and [`LinkSource::Item`] require nothing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkSource {
    /// Top-level document links.
    Document,
    /// Links of an error object.
    Error,
    /// Links of a resource object.
    Item,
    /// Links of a relationship object.
    Relationship,
}

impl LinkSource {
    /// Returns the lowercase name of this source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Error => "error",
            Self::Item => "item",
            Self::Relationship => "relationship",
        }
    }
}

impl fmt::Display for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single link.
///
/// `href` is kept exactly as given. An empty string is not rejected, so
/// callers that need a usable URL must check for it themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The link's URL.
    pub href: String,
    /// Meta information about the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Link {
    /// Creates a link without meta.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            meta: None,
        }
    }

    /// Attaches meta to the link.
    #[must_use]
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// A links object, keyed by link name.
///
/// A name mapped to `None` was present in the document with a `null` value.
/// `self` and `related` are never mapped to `None`.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{LinkSource, LinksParser};
/// use serde_json::json;
///
/// let links = LinksParser::new()
///     .parse(&json!({"self": "http://x/a", "prev": null}), LinkSource::Document)
///     .unwrap();
///
/// assert_eq!(links.get("self").unwrap().href, "http://x/a");
/// assert!(links.contains("prev"));
/// assert!(links.get("prev").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Links(HashMap<String, Option<Link>>);

impl Links {
    /// Wraps the given links.
    #[must_use]
    pub const fn new(links: HashMap<String, Option<Link>>) -> Self {
        Self(links)
    }

    /// Returns the link named `name`, or `None` if it is absent or null.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Link> {
        self.0.get(name).and_then(Option::as_ref)
    }

    /// Returns `true` if `name` is present, even with a `null` value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of entries, including null ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Link>)> {
        self.0
            .iter()
            .map(|(name, link)| (name.as_str(), link.as_ref()))
    }

    /// Consumes the links and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, Option<Link>> {
        self.0
    }
}

impl FromIterator<(String, Option<Link>)> for Links {
    fn from_iter<I: IntoIterator<Item = (String, Option<Link>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_serializes_without_null_meta() {
        let link = Link::new("http://example.com");
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({"href": "http://example.com"})
        );
    }

    #[test]
    fn test_links_distinguish_null_from_absent() {
        let links: Links = [
            ("self".to_string(), Some(Link::new("http://x/a"))),
            ("prev".to_string(), None),
        ]
        .into_iter()
        .collect();

        assert_eq!(links.len(), 2);
        assert!(links.contains("prev"));
        assert!(links.get("prev").is_none());
        assert!(!links.contains("next"));
        assert_eq!(
            links.get("self").map(|l| l.href.as_str()),
            Some("http://x/a")
        );
    }

    #[test]
    fn test_link_source_display() {
        assert_eq!(LinkSource::Relationship.to_string(), "relationship");
        assert_eq!(LinkSource::Document.as_str(), "document");
    }
}
