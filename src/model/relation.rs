//! Relation variants.
//!
//! A relation is resolved to one of four variants:
//!
//! | Variant | Cardinality | Related type |
//! |---------|-------------|--------------|
//! | [`HasOneRelation`] | single | fixed by the type schema |
//! | [`HasManyRelation`] | many | fixed by the type schema |
//! | [`MorphToRelation`] | single | varies per instance |
//! | [`MorphToManyRelation`] | many | varies per instance |
//!
//! Every variant carries its own links and meta, and an `omitted` flag that
//! is set when the relationship object had no `data` member at all.

use std::fmt;

use super::{Item, ItemKey, Links, Meta};

/// The kind of a [`Relation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Single, fixed related type.
    HasOne,
    /// Many, fixed related type.
    HasMany,
    /// Single, related type varies.
    MorphTo,
    /// Many, related type varies.
    MorphToMany,
}

impl RelationKind {
    /// Returns `true` for the single-valued kinds.
    #[must_use]
    pub const fn is_singular(self) -> bool {
        matches!(self, Self::HasOne | Self::MorphTo)
    }

    /// Returns the name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HasOne => "has-one",
            Self::HasMany => "has-many",
            Self::MorphTo => "morph-to",
            Self::MorphToMany => "morph-to-many",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single relation whose related type is declared by the schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HasOneRelation {
    /// The declared related type.
    pub item_type: String,
    /// The related item, or `None` for empty linkage.
    pub included: Option<Item>,
    /// Relationship links.
    pub links: Option<Links>,
    /// Relationship meta.
    pub meta: Option<Meta>,
    /// `true` if the relationship had no `data` member.
    pub omitted: bool,
}

/// A to-many relation whose related type is declared by the schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HasManyRelation {
    /// The declared related type.
    pub item_type: String,
    /// The related items, in document order.
    pub included: Vec<Item>,
    /// Relationship links.
    pub links: Option<Links>,
    /// Relationship meta.
    pub meta: Option<Meta>,
    /// `true` if the relationship had no `data` member.
    pub omitted: bool,
}

/// A single relation whose related type varies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MorphToRelation {
    /// The related item, or `None` for empty linkage.
    pub included: Option<Item>,
    /// Relationship links.
    pub links: Option<Links>,
    /// Relationship meta.
    pub meta: Option<Meta>,
    /// `true` if the relationship had no `data` member.
    pub omitted: bool,
}

/// A to-many relation whose related types vary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MorphToManyRelation {
    /// The related items, in document order.
    pub included: Vec<Item>,
    /// Relationship links.
    pub links: Option<Links>,
    /// Relationship meta.
    pub meta: Option<Meta>,
    /// `true` if the relationship had no `data` member.
    pub omitted: bool,
}

/// A resolved relation of an [`Item`].
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{Item, MorphToManyRelation, Relation, RelationKind};
///
/// let relation = Relation::MorphToMany(MorphToManyRelation {
///     included: vec![Item::new("child", "6"), Item::new("child", "7")],
///     ..MorphToManyRelation::default()
/// });
///
/// assert_eq!(relation.kind(), RelationKind::MorphToMany);
/// assert_eq!(relation.included_items().count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    /// See [`HasOneRelation`].
    HasOne(HasOneRelation),
    /// See [`HasManyRelation`].
    HasMany(HasManyRelation),
    /// See [`MorphToRelation`].
    MorphTo(MorphToRelation),
    /// See [`MorphToManyRelation`].
    MorphToMany(MorphToManyRelation),
}

impl Relation {
    /// Returns the kind of this relation.
    #[must_use]
    pub const fn kind(&self) -> RelationKind {
        match self {
            Self::HasOne(_) => RelationKind::HasOne,
            Self::HasMany(_) => RelationKind::HasMany,
            Self::MorphTo(_) => RelationKind::MorphTo,
            Self::MorphToMany(_) => RelationKind::MorphToMany,
        }
    }

    /// Returns the relationship links, if present.
    #[must_use]
    pub const fn links(&self) -> Option<&Links> {
        match self {
            Self::HasOne(r) => r.links.as_ref(),
            Self::HasMany(r) => r.links.as_ref(),
            Self::MorphTo(r) => r.links.as_ref(),
            Self::MorphToMany(r) => r.links.as_ref(),
        }
    }

    /// Returns the relationship meta, if present.
    #[must_use]
    pub const fn meta(&self) -> Option<&Meta> {
        match self {
            Self::HasOne(r) => r.meta.as_ref(),
            Self::HasMany(r) => r.meta.as_ref(),
            Self::MorphTo(r) => r.meta.as_ref(),
            Self::MorphToMany(r) => r.meta.as_ref(),
        }
    }

    /// Returns `true` if the relationship object had no `data` member.
    #[must_use]
    pub const fn is_omitted(&self) -> bool {
        match self {
            Self::HasOne(r) => r.omitted,
            Self::HasMany(r) => r.omitted,
            Self::MorphTo(r) => r.omitted,
            Self::MorphToMany(r) => r.omitted,
        }
    }

    /// Returns the declared related type for `HasOne`/`HasMany`.
    #[must_use]
    pub fn declared_type(&self) -> Option<&str> {
        match self {
            Self::HasOne(r) => Some(&r.item_type),
            Self::HasMany(r) => Some(&r.item_type),
            Self::MorphTo(_) | Self::MorphToMany(_) => None,
        }
    }

    /// Returns an iterator over the related items, in document order.
    pub fn included_items(&self) -> Box<dyn Iterator<Item = &Item> + '_> {
        match self {
            Self::HasOne(r) => Box::new(r.included.iter()),
            Self::MorphTo(r) => Box::new(r.included.iter()),
            Self::HasMany(r) => Box::new(r.included.iter()),
            Self::MorphToMany(r) => Box::new(r.included.iter()),
        }
    }

    /// Returns a mutable iterator over the related items.
    ///
    /// Assemblers use this to swap stubs for hydrated resources without
    /// touching the relation kind, links or meta.
    pub fn included_items_mut(&mut self) -> Box<dyn Iterator<Item = &mut Item> + '_> {
        match self {
            Self::HasOne(r) => Box::new(r.included.iter_mut()),
            Self::MorphTo(r) => Box::new(r.included.iter_mut()),
            Self::HasMany(r) => Box::new(r.included.iter_mut()),
            Self::MorphToMany(r) => Box::new(r.included.iter_mut()),
        }
    }

    /// Returns the keys of the related items, in document order.
    #[must_use]
    pub fn included_keys(&self) -> Vec<ItemKey> {
        self.included_items().map(Item::key).collect()
    }
}
