//! Free-form meta information.

use serde::Serialize;
use serde_json::{Map, Value};

/// Non-standard meta information attached to a document, resource,
/// relationship, link or error.
///
/// Values are kept verbatim and never interpreted.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::MetaParser;
/// use serde_json::json;
///
/// let meta = MetaParser::new().parse(&json!({"copyright": "ACME"})).unwrap();
/// assert_eq!(meta.get("copyright"), Some(&json!("ACME")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Meta(Map<String, Value>);

impl Meta {
    /// Wraps the given key/value pairs.
    #[must_use]
    pub const fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Consumes the meta and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Meta {
    fn from(values: Map<String, Value>) -> Self {
        Self(values)
    }
}
