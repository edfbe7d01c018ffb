//! Parsers turning decoded JSON values into the [`model`](crate::model) types.
//!
//! - [`MetaParser`]: meta objects
//! - [`LinksParser`]: links objects, with per-[`LinkSource`](crate::LinkSource) rules
//! - [`ItemParser`]: resource objects, including relation resolution
//! - [`ErrorCollectionParser`]: top-level errors arrays, delegating each
//!   element to an [`ErrorParser`] such as [`ApiErrorParser`]
//!
//! All parsers are stateless apart from their injected collaborators, take
//! `&self`, and may be shared across threads when those collaborators are
//! `Sync`.

mod error;
mod error_collection;
mod guards;
mod item;
mod links;
mod meta;

pub use error::{ApiErrorParser, ErrorParser};
pub use error_collection::ErrorCollectionParser;
pub use item::ItemParser;
pub use links::LinksParser;
pub use meta::MetaParser;
