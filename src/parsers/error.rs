//! Error object parsing.

use serde_json::Value;

use super::guards::{expect_object, optional_string};
use super::{LinksParser, MetaParser};
use crate::error::ValidationError;
use crate::model::{ApiError, ErrorSource, LinkSource};

const ERROR_OBJECT: &str = "Error object";
const ERROR_SOURCE: &str = "Error source";

/// Parses a single error object.
///
/// Implement this to plug a custom error representation into
/// [`ErrorCollectionParser`](crate::ErrorCollectionParser). Implementations
/// report malformed input with [`ValidationError`]; use
/// [`ValidationError::custom`] for violations the built-in variants do not
/// describe.
pub trait ErrorParser {
    /// The parsed error type.
    type Output;

    /// Parses one raw error object.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `raw` is not a valid error object.
    fn parse(&self, raw: &Value) -> Result<Self::Output, ValidationError>;
}

impl<P: ErrorParser + ?Sized> ErrorParser for &P {
    type Output = P::Output;

    fn parse(&self, raw: &Value) -> Result<Self::Output, ValidationError> {
        (**self).parse(raw)
    }
}

/// The default [`ErrorParser`], producing [`ApiError`]s.
///
/// Every member is optional, but present members are validated: `id`,
/// `status`, `code`, `title` and `detail` must be strings, `links` must
/// contain `about`, `source` must be an object with string `pointer` and
/// `parameter`, and `meta` must be an object.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{ApiErrorParser, ErrorParser};
/// use serde_json::json;
///
/// let error = ApiErrorParser::new()
///     .parse(&json!({
///         "status": "422",
///         "title": "Invalid Attribute",
///         "source": {"pointer": "/data/attributes/firstName"}
///     }))
///     .unwrap();
///
/// assert_eq!(error.status.as_deref(), Some("422"));
/// assert_eq!(
///     error.source.unwrap().pointer.as_deref(),
///     Some("/data/attributes/firstName")
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiErrorParser {
    links_parser: LinksParser,
    meta_parser: MetaParser,
}

impl ApiErrorParser {
    /// Creates an error parser.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            links_parser: LinksParser::new(),
            meta_parser: MetaParser::new(),
        }
    }

    fn parse_source(raw: &Value) -> Result<ErrorSource, ValidationError> {
        let object = expect_object(raw, ERROR_SOURCE)?;
        Ok(ErrorSource {
            pointer: optional_string(object, "pointer", ERROR_SOURCE)?,
            parameter: optional_string(object, "parameter", ERROR_SOURCE)?,
        })
    }
}

impl ErrorParser for ApiErrorParser {
    type Output = ApiError;

    fn parse(&self, raw: &Value) -> Result<ApiError, ValidationError> {
        let object = expect_object(raw, ERROR_OBJECT)?;

        Ok(ApiError {
            id: optional_string(object, "id", ERROR_OBJECT)?,
            links: object
                .get("links")
                .map(|links| self.links_parser.parse(links, LinkSource::Error))
                .transpose()?,
            status: optional_string(object, "status", ERROR_OBJECT)?,
            code: optional_string(object, "code", ERROR_OBJECT)?,
            title: optional_string(object, "title", ERROR_OBJECT)?,
            detail: optional_string(object, "detail", ERROR_OBJECT)?,
            source: object.get("source").map(Self::parse_source).transpose()?,
            meta: object
                .get("meta")
                .map(|meta| self.meta_parser.parse(meta))
                .transpose()?,
        })
    }
}
