//! # Authorization Context
//!
//! The resolved, queryable result of one policy resolution: the set of
//! operations one identity may perform. A context never changes after
//! construction and holds no reference back to the policy it came from, so
//! it is cheap to query repeatedly and safe to share across threads.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::items::Operation;

/// The operations one identity is permitted to perform.
///
/// An empty context is valid and means the identity can perform nothing.
///
/// # Example
///
/// ```
/// use warden_rbac::{AuthorizationContext, Operation};
///
/// let context = AuthorizationContext::new([Operation::new("create_invoice").unwrap()]);
///
/// assert!(context.can_perform(&Operation::new("create_invoice").unwrap()));
/// assert!(!context.can_perform(&Operation::new("void_invoice").unwrap()));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorizationContext {
    /// Permitted operations, unique by name.
    permitted: HashSet<Operation>,
}

impl AuthorizationContext {
    /// Create a context from the permitted operations.
    pub fn new(permitted: impl IntoIterator<Item = Operation>) -> Self {
        Self {
            permitted: permitted.into_iter().collect(),
        }
    }

    /// Check whether the identity may perform `operation`.
    ///
    /// Membership is by operation name, so any operation value with the
    /// right name tests positive regardless of where it was constructed.
    pub fn can_perform(&self, operation: &Operation) -> bool {
        self.permitted.contains(operation)
    }

    /// The permitted operations.
    pub fn permitted(&self) -> &HashSet<Operation> {
        &self.permitted
    }

    /// Get the count of permitted operations.
    pub fn len(&self) -> usize {
        self.permitted.len()
    }

    /// Check if nothing is permitted.
    pub fn is_empty(&self) -> bool {
        self.permitted.is_empty()
    }
}
