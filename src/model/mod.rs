//! Value types produced by the parsers.
//!
//! This module provides the in-memory shape of a parsed JSON:API resource:
//!
//! - [`Item`]: a resource object, or a stub built from a resource identifier
//! - [`Relation`]: one of four relation variants holding stub items
//! - [`Links`] and [`Link`]: links objects
//! - [`Meta`]: free-form meta information
//! - [`ErrorCollection`] and [`ApiError`]: the error side of the format
//!
//! Relations own their stub items. A document assembler can index the
//! top-level included resources by [`ItemKey`] and replace stubs in place
//! through [`Relation::included_items_mut`].

mod errors;
mod item;
mod links;
mod meta;
mod relation;

pub use errors::{ApiError, ErrorCollection, ErrorSource};
pub use item::{Item, ItemKey};
pub use links::{Link, LinkSource, Links};
pub use meta::Meta;
pub use relation::{
    HasManyRelation, HasOneRelation, MorphToManyRelation, MorphToRelation, Relation, RelationKind,
};
