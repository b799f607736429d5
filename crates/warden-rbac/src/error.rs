//! Error types for policy configuration
//!
//! Every failure the engine can produce is a caller bug caught at the point
//! of violation, before any state change. Nothing is retried, logged, or
//! swallowed.

use thiserror::Error;

/// Errors raised by the Warden policy engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RbacError {
    /// A constructor argument failed validation.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Result type for policy operations.
pub type RbacResult<T> = Result<T, RbacError>;

impl RbacError {
    pub(crate) fn invalid_argument(parameter: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { parameter, reason }
    }

    /// Get the name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter, .. } => parameter,
        }
    }
}
