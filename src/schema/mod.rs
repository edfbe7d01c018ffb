//! Type schema consulted during relation resolution.
//!
//! The [`ItemParser`](crate::ItemParser) asks a [`TypeSchema`] whether the
//! type of the resource being parsed is mapped and, if so, which relations
//! its [`Prototype`] declares. A declared relation resolves to `HasOne` or
//! `HasMany`; anything else falls back to structural inference.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_client::{Prototype, TypeMapper, TypeSchema};
//!
//! let mut mapper = TypeMapper::new();
//! mapper.set_mapping(
//!     "articles",
//!     Prototype::new()
//!         .has_one("author", "people")
//!         .has_many("comments", "comments"),
//! );
//!
//! assert!(mapper.has_mapping("articles"));
//! assert!(!mapper.has_mapping("people"));
//! ```

mod registry;

use std::collections::HashMap;
use std::sync::Arc;

pub use registry::TypeMapper;

use crate::model::RelationKind;

/// A relation declared by a [`Prototype`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclaredRelation {
    /// A single relation to resources of `item_type`.
    HasOne {
        /// The expected related type.
        item_type: String,
    },
    /// A to-many relation to resources of `item_type`.
    HasMany {
        /// The expected related type.
        item_type: String,
    },
}

impl DeclaredRelation {
    /// Returns the relation kind this declaration resolves to.
    #[must_use]
    pub const fn kind(&self) -> RelationKind {
        match self {
            Self::HasOne { .. } => RelationKind::HasOne,
            Self::HasMany { .. } => RelationKind::HasMany,
        }
    }

    /// Returns the expected related type.
    #[must_use]
    pub fn item_type(&self) -> &str {
        match self {
            Self::HasOne { item_type } | Self::HasMany { item_type } => item_type,
        }
    }
}

/// The declared relations of one resource type.
///
/// A relation name without an entry is not an error; such relations are
/// resolved from the shape of their data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prototype {
    relations: HashMap<String, DeclaredRelation>,
}

impl Prototype {
    /// Creates a prototype with no declared relations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` as a single relation to `item_type`.
    #[must_use]
    pub fn has_one(mut self, name: impl Into<String>, item_type: impl Into<String>) -> Self {
        self.relations.insert(
            name.into(),
            DeclaredRelation::HasOne {
                item_type: item_type.into(),
            },
        );
        self
    }

    /// Declares `name` as a to-many relation to `item_type`.
    #[must_use]
    pub fn has_many(mut self, name: impl Into<String>, item_type: impl Into<String>) -> Self {
        self.relations.insert(
            name.into(),
            DeclaredRelation::HasMany {
                item_type: item_type.into(),
            },
        );
        self
    }

    /// Returns the declaration for `name`, if any.
    #[must_use]
    pub fn declared_relation(&self, name: &str) -> Option<&DeclaredRelation> {
        self.relations.get(name)
    }

    /// Returns the number of declared relations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Returns `true` if no relations are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

/// Read-only lookup from resource type to [`Prototype`].
///
/// Implementations must be safe to query concurrently if the parser using
/// them is shared across threads.
pub trait TypeSchema {
    /// Returns the prototype mapped to `item_type`, if any.
    fn prototype(&self, item_type: &str) -> Option<&Prototype>;

    /// Returns `true` if `item_type` is mapped.
    fn has_mapping(&self, item_type: &str) -> bool {
        self.prototype(item_type).is_some()
    }
}

impl<T: TypeSchema + ?Sized> TypeSchema for &T {
    fn prototype(&self, item_type: &str) -> Option<&Prototype> {
        (**self).prototype(item_type)
    }

    fn has_mapping(&self, item_type: &str) -> bool {
        (**self).has_mapping(item_type)
    }
}

impl<T: TypeSchema + ?Sized> TypeSchema for Arc<T> {
    fn prototype(&self, item_type: &str) -> Option<&Prototype> {
        (**self).prototype(item_type)
    }

    fn has_mapping(&self, item_type: &str) -> bool {
        (**self).has_mapping(item_type)
    }
}
