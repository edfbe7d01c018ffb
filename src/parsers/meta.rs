//! Meta parsing.

use serde_json::Value;

use super::guards::expect_object;
use crate::error::ValidationError;
use crate::model::Meta;

/// Parses meta objects.
///
/// Any object is accepted, including `{}`. Values are kept verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetaParser;

impl MetaParser {
    /// Creates a meta parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses `raw` into [`Meta`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnObject`] if `raw` is not an object.
    pub fn parse(&self, raw: &Value) -> Result<Meta, ValidationError> {
        let object = expect_object(raw, "Meta")?;
        Ok(Meta::new(object.clone()))
    }
}
