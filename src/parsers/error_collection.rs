//! Errors array parsing.

use serde_json::Value;

use super::guards::expect_array;
use super::ErrorParser;
use crate::error::ValidationError;
use crate::model::ErrorCollection;

/// Parses a top-level `errors` array into an [`ErrorCollection`].
///
/// The array must be non-empty. Each element is handed to the injected
/// [`ErrorParser`] in order; the first failure aborts the whole parse.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{ApiErrorParser, ErrorCollectionParser, ValidationError};
/// use serde_json::json;
///
/// let parser = ErrorCollectionParser::new(ApiErrorParser::new());
///
/// assert!(parser.parse(&json!([{"status": "500"}])).is_ok());
/// assert_eq!(parser.parse(&json!([])), Err(ValidationError::EmptyErrors));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ErrorCollectionParser<P> {
    error_parser: P,
}

impl<P: ErrorParser> ErrorCollectionParser<P> {
    /// Creates a parser that delegates each element to `error_parser`.
    #[must_use]
    pub const fn new(error_parser: P) -> Self {
        Self { error_parser }
    }

    /// Returns the injected error parser.
    #[must_use]
    pub const fn error_parser(&self) -> &P {
        &self.error_parser
    }

    /// Parses `raw` into an [`ErrorCollection`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnArray`] if `raw` is not an array,
    /// [`ValidationError::EmptyErrors`] if it is empty, or the first error
    /// reported by the injected parser.
    pub fn parse(&self, raw: &Value) -> Result<ErrorCollection<P::Output>, ValidationError> {
        let elements = expect_array(raw, "Errors")?;

        let errors = elements
            .iter()
            .map(|element| self.error_parser.parse(element))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = errors.len(), "Parsed errors array");

        ErrorCollection::new(errors).ok_or(ValidationError::EmptyErrors)
    }
}
