//! Handling of relationship data that disagrees with its declaration.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// What to do when a declared relation receives data of the other cardinality.
///
/// This covers a `HasOne` declaration receiving an array of identifiers and a
/// `HasMany` declaration receiving a single identifier object.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::CardinalityPolicy;
///
/// let policy: CardinalityPolicy = "infer".parse().unwrap();
/// assert_eq!(policy, CardinalityPolicy::Infer);
/// assert_eq!(CardinalityPolicy::default(), CardinalityPolicy::Reject);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardinalityPolicy {
    /// Fail with a
    /// [`ValidationError::CardinalityMismatch`](crate::ValidationError::CardinalityMismatch).
    #[default]
    Reject,
    /// Ignore the declaration and resolve the relation as `MorphTo` or
    /// `MorphToMany` from the data shape.
    Infer,
}

impl CardinalityPolicy {
    /// Returns the name of this policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Infer => "infer",
        }
    }
}

impl fmt::Display for CardinalityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardinalityPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "infer" => Ok(Self::Infer),
            _ => Err(ConfigError::InvalidCardinalityPolicy {
                value: s.to_string(),
            }),
        }
    }
}
