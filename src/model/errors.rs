//! Error objects and error collections.

use std::ops::Deref;

use serde::Serialize;

use super::{Links, Meta};

/// A non-empty, ordered collection of parsed error objects.
///
/// The element type is whatever the injected
/// [`ErrorParser`](crate::ErrorParser) produces; [`ApiError`] is the
/// default. The collection implements `Deref<Target = [E]>`, so slice
/// methods can be called on it directly.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{ApiErrorParser, ErrorCollectionParser};
/// use serde_json::json;
///
/// let parser = ErrorCollectionParser::new(ApiErrorParser::new());
/// let errors = parser
///     .parse(&json!([{"code": "first"}, {"code": "second"}]))
///     .unwrap();
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().code.as_deref(), Some("first"));
/// assert_eq!(errors[1].code.as_deref(), Some("second"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorCollection<E> {
    errors: Vec<E>,
}

impl<E> ErrorCollection<E> {
    /// Creates a collection, or returns `None` if `errors` is empty.
    #[must_use]
    pub fn new(errors: Vec<E>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self { errors })
    }

    /// Returns the first error. A collection is never empty.
    #[must_use]
    pub fn first(&self) -> &E {
        &self.errors[0]
    }

    /// Consumes the collection and returns the errors in input order.
    #[must_use]
    pub fn into_inner(self) -> Vec<E> {
        self.errors
    }
}

impl<E> Deref for ErrorCollection<E> {
    type Target = [E];

    fn deref(&self) -> &Self::Target {
        &self.errors
    }
}

impl<E> IntoIterator for ErrorCollection<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ErrorCollection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// The part of a request document an error refers to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ErrorSource {
    /// A JSON Pointer to the offending value in the request document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    /// The offending query parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// A JSON:API error object.
///
/// All members are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Unique identifier for this occurrence of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Error links; always contain `about` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// The HTTP status code, as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Application-specific error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Short summary of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Where the problem originated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    /// Non-standard meta information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

// Verify collections are Send + Sync when E is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ErrorCollection<ApiError>>();
};
