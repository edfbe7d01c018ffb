//! Resource objects and stub items.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use super::{Links, Meta, Relation};

/// The `(type, id)` pair identifying a resource.
///
/// Document assemblers use this as the key of their included-resource index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    /// The resource type.
    pub item_type: String,
    /// The resource id.
    pub id: String,
}

impl ItemKey {
    /// Creates a key from a type and an id.
    #[must_use]
    pub fn new(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.item_type, self.id)
    }
}

impl From<ItemKey> for Item {
    fn from(key: ItemKey) -> Self {
        Self::new(key.item_type, key.id)
    }
}

/// A parsed resource object.
///
/// An item built from a resource identifier (a "stub") carries only its type
/// and id. It becomes a complete resource once a document assembler swaps it
/// for the matching included resource.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{ItemParser, TypeMapper};
/// use serde_json::json;
///
/// let parser = ItemParser::new(TypeMapper::new());
/// let item = parser
///     .parse(&json!({
///         "type": "articles",
///         "id": "1",
///         "attributes": {"title": "Rails is Omakase"}
///     }))
///     .unwrap();
///
/// assert_eq!(item.item_type(), "articles");
/// assert_eq!(item.attribute("title"), Some(&json!("Rails is Omakase")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    item_type: String,
    id: String,
    attributes: Map<String, Value>,
    relations: HashMap<String, Relation>,
    links: Option<Links>,
    meta: Option<Meta>,
}

impl Item {
    /// Creates a stub item with only a type and an id.
    #[must_use]
    pub fn new(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            id: id.into(),
            attributes: Map::new(),
            relations: HashMap::new(),
            links: None,
            meta: None,
        }
    }

    /// Replaces the attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets the resource links.
    #[must_use]
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = Some(links);
        self
    }

    /// Sets the resource meta.
    #[must_use]
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Returns the resource type.
    #[must_use]
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// Returns the resource id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the `(type, id)` key of this item.
    #[must_use]
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.item_type.as_str(), self.id.as_str())
    }

    /// Returns `true` if this item carries nothing beyond its type and id.
    #[must_use]
    pub fn is_stub(&self) -> bool {
        self.attributes.is_empty()
            && self.relations.is_empty()
            && self.links.is_none()
            && self.meta.is_none()
    }

    /// Returns all attributes.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns the attribute named `name`, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns all relations, keyed by relationship name.
    #[must_use]
    pub const fn relations(&self) -> &HashMap<String, Relation> {
        &self.relations
    }

    /// Returns the relation named `name`, if present.
    #[must_use]
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// Returns a mutable reference to the relation named `name`, if present.
    pub fn relation_mut(&mut self, name: &str) -> Option<&mut Relation> {
        self.relations.get_mut(name)
    }

    /// Sets the relation named `name`, returning the previous one.
    pub fn set_relation(
        &mut self,
        name: impl Into<String>,
        relation: Relation,
    ) -> Option<Relation> {
        self.relations.insert(name.into(), relation)
    }

    /// Returns the resource links, if present.
    #[must_use]
    pub const fn links(&self) -> Option<&Links> {
        self.links.as_ref()
    }

    /// Returns the resource meta, if present.
    #[must_use]
    pub const fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

// Verify Item is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Item>();
    assert_send_sync::<ItemKey>();
};
