//! Error type for the factories.
//!
//! Every failure in this crate is a programming error detected while building
//! a type table, a set of action creators, or a reducer. Dispatching an action
//! never fails.

use thiserror::Error;

/// Message used when a type list is missing or empty.
pub const TYPES_REQUIRED: &str = "valid types are required";

/// Message used when an action configuration is missing or not an object.
pub const CONFIG_REQUIRED: &str = "an object is required to setup types and creators";

/// Message used when an action configuration has no entries.
pub const CONFIG_EMPTY: &str = "empty objects are not supported";

/// Message used when a reducer is built without an initial state.
pub const INITIAL_STATE_REQUIRED: &str = "initial state is required";

/// Message used when a reducer is built without a handler map.
pub const HANDLERS_REQUIRED: &str = "handlers must be an object";

/// Errors raised while constructing types, creators or reducers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SauceError {
    /// An argument failed its precondition.
    #[error("{0}")]
    InvalidArgument(String),
}

impl SauceError {
    /// Build an [`SauceError::InvalidArgument`] from any message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// The human readable message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message) => message,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = SauceError> = std::result::Result<T, E>;
