//! In-memory type schema.

use std::collections::HashMap;

use super::{Prototype, TypeSchema};

/// Registry of [`Prototype`]s, keyed by resource type.
///
/// # Thread Safety
///
/// `TypeMapper` is `Send + Sync`. Populate it at startup, then share it by
/// reference or through an `Arc` with every parser.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{Prototype, TypeMapper, TypeSchema};
///
/// let mut mapper = TypeMapper::new();
/// mapper
///     .set_mapping("master", Prototype::new().has_one("child", "child"))
///     .set_mapping("child", Prototype::new());
///
/// assert_eq!(mapper.len(), 2);
/// assert!(mapper.prototype("master").unwrap().declared_relation("child").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TypeMapper {
    mappings: HashMap<String, Prototype>,
}

// Verify TypeMapper is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypeMapper>();
};

impl TypeMapper {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    /// Maps `item_type` to `prototype`, replacing any previous mapping.
    ///
    /// Returns `&mut Self` to allow method chaining.
    pub fn set_mapping(
        &mut self,
        item_type: impl Into<String>,
        prototype: Prototype,
    ) -> &mut Self {
        let item_type = item_type.into();
        tracing::debug!(
            item_type = %item_type,
            relations = prototype.len(),
            "Registering type mapping"
        );
        self.mappings.insert(item_type, prototype);
        self
    }

    /// Removes the mapping for `item_type`, returning its prototype.
    pub fn remove_mapping(&mut self, item_type: &str) -> Option<Prototype> {
        self.mappings.remove(item_type)
    }

    /// Returns the mapped types, in no particular order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }

    /// Returns the number of mapped types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns `true` if no types are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl TypeSchema for TypeMapper {
    fn prototype(&self, item_type: &str) -> Option<&Prototype> {
        self.mappings.get(item_type)
    }
}
