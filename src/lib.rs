//! # JSON:API Client Parsing
//!
//! A validating parser for JSON:API documents that have already been
//! fetched and decoded into [`serde_json::Value`]s. It turns resource
//! objects, relationships, links, meta and errors into strongly shaped
//! values, or fails with a [`ValidationError`] at the first violation.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`ItemParser`]: resource objects into [`Item`]s, with relation resolution
//! - [`LinksParser`]: links objects into [`Links`], with per-context rules
//! - [`MetaParser`]: meta objects into [`Meta`]
//! - [`ErrorCollectionParser`]: errors arrays into an [`ErrorCollection`]
//! - [`TypeMapper`]: an in-memory [`TypeSchema`] declaring relations per type
//! - [`ParserConfig`]: parser settings built with [`ParserConfigBuilder`]
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_client::{ItemParser, Prototype, RelationKind, TypeMapper};
//! use serde_json::json;
//!
//! let mut mapper = TypeMapper::new();
//! mapper.set_mapping(
//!     "articles",
//!     Prototype::new()
//!         .has_one("author", "people")
//!         .has_many("comments", "comments"),
//! );
//!
//! let parser = ItemParser::new(&mapper);
//! let article = parser
//!     .parse(&json!({
//!         "type": "articles",
//!         "id": "1",
//!         "attributes": {"title": "JSON:API paints my bikeshed!"},
//!         "relationships": {
//!             "author": {
//!                 "links": {"related": "http://example.com/articles/1/author"},
//!                 "data": {"type": "people", "id": "9"}
//!             },
//!             "comments": {
//!                 "data": [
//!                     {"type": "comments", "id": "5"},
//!                     {"type": "comments", "id": "12"}
//!                 ]
//!             }
//!         },
//!         "links": {"self": "http://example.com/articles/1"}
//!     }))
//!     .unwrap();
//!
//! let author = article.relation("author").unwrap();
//! assert_eq!(author.kind(), RelationKind::HasOne);
//! assert_eq!(author.included_items().next().unwrap().id(), "9");
//! assert_eq!(article.relation("comments").unwrap().included_items().count(), 2);
//! ```
//!
//! ## Relation Resolution
//!
//! Each relationship becomes one of four [`Relation`] variants. If the
//! resource's type is mapped and its [`Prototype`] declares the relationship,
//! the declaration decides between `HasOne` and `HasMany`. Otherwise the shape
//! of `data` decides: a single identifier (or no data) gives `MorphTo`, an
//! array gives `MorphToMany`.
//!
//! Related items are stubs carrying only a type and id. Assembling a full
//! document, including swapping stubs for the top-level `included`
//! resources, is left to the caller; [`ItemKey`] and
//! [`Relation::included_items_mut`] exist for that step.
//!
//! ## Errors
//!
//! ```rust
//! use jsonapi_client::{ApiErrorParser, ErrorCollectionParser};
//! use serde_json::json;
//!
//! let parser = ErrorCollectionParser::new(ApiErrorParser::new());
//! let errors = parser
//!     .parse(&json!([{"status": "404", "title": "Not Found"}]))
//!     .unwrap();
//! assert_eq!(errors.first().title.as_deref(), Some("Not Found"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: schemas and configuration are passed explicitly
//! - **Fail-fast validation**: the first violation aborts the parse
//! - **All-or-nothing**: no partial results are ever returned
//! - **Thread-safe**: parsers are `Send + Sync` when their collaborators are
//! - **No I/O**: no networking, file access or raw JSON decoding

pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod schema;

// Re-export public types at crate root for convenience
pub use config::{CardinalityPolicy, ParserConfig, ParserConfigBuilder};
pub use error::{ConfigError, JsonKind, ValidationError};
pub use model::{
    ApiError, ErrorCollection, ErrorSource, HasManyRelation, HasOneRelation, Item, ItemKey, Link,
    LinkSource, Links, Meta, MorphToManyRelation, MorphToRelation, Relation, RelationKind,
};
pub use parsers::{
    ApiErrorParser, ErrorCollectionParser, ErrorParser, ItemParser, LinksParser, MetaParser,
};
pub use schema::{DeclaredRelation, Prototype, TypeMapper, TypeSchema};

// Verify the parsers are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ItemParser<TypeMapper>>();
    assert_send_sync::<ItemParser<std::sync::Arc<TypeMapper>>>();
    assert_send_sync::<ErrorCollectionParser<ApiErrorParser>>();
    assert_send_sync::<LinksParser>();
};
