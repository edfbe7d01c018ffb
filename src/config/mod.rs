//! Parser configuration.
//!
//! This module provides the settings shared by the parsers:
//!
//! - [`ParserConfig`]: The settings consulted while parsing
//! - [`ParserConfigBuilder`]: A builder for constructing [`ParserConfig`] instances
//! - [`CardinalityPolicy`]: How to treat data that disagrees with a declared relation
//!
//! # Example
//!
//! ```rust
//! use jsonapi_client::{CardinalityPolicy, ParserConfig};
//!
//! let config = ParserConfig::builder()
//!     .cardinality_policy(CardinalityPolicy::Infer)
//!     .max_relationships(64)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.cardinality_policy(), CardinalityPolicy::Infer);
//! ```

mod policy;

pub use policy::CardinalityPolicy;

use crate::error::ConfigError;

/// Settings consulted by the [`ItemParser`](crate::ItemParser).
///
/// # Thread Safety
///
/// `ParserConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use jsonapi_client::{CardinalityPolicy, ParserConfig};
///
/// let config = ParserConfig::default();
/// assert_eq!(config.cardinality_policy(), CardinalityPolicy::Reject);
/// assert_eq!(config.max_relationships(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
    cardinality_policy: CardinalityPolicy,
    max_relationships: Option<usize>,
}

impl ParserConfig {
    /// Creates a new builder for constructing a `ParserConfig`.
    #[must_use]
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::new()
    }

    /// Returns the policy for declared relations with mismatched data.
    #[must_use]
    pub const fn cardinality_policy(&self) -> CardinalityPolicy {
        self.cardinality_policy
    }

    /// Returns the maximum number of relationships per resource, if limited.
    #[must_use]
    pub const fn max_relationships(&self) -> Option<usize> {
        self.max_relationships
    }
}

// Verify ParserConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ParserConfig>();
};

/// Builder for constructing [`ParserConfig`] instances.
///
/// # Defaults
///
/// - `cardinality_policy`: [`CardinalityPolicy::Reject`]
/// - `max_relationships`: `None` (unlimited)
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    cardinality_policy: Option<CardinalityPolicy>,
    max_relationships: Option<usize>,
}

impl ParserConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for declared relations with mismatched data.
    #[must_use]
    pub const fn cardinality_policy(mut self, policy: CardinalityPolicy) -> Self {
        self.cardinality_policy = Some(policy);
        self
    }

    /// Limits the number of relationships a single resource may carry.
    #[must_use]
    pub const fn max_relationships(mut self, limit: usize) -> Self {
        self.max_relationships = Some(limit);
        self
    }

    /// Builds the [`ParserConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLimit`] if `max_relationships` is zero.
    pub fn build(self) -> Result<ParserConfig, ConfigError> {
        if self.max_relationships == Some(0) {
            return Err(ConfigError::InvalidLimit {
                field: "max_relationships",
                value: 0,
            });
        }

        Ok(ParserConfig {
            cardinality_policy: self.cardinality_policy.unwrap_or_default(),
            max_relationships: self.max_relationships,
        })
    }
}
