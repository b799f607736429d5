//! # Authorization Bindings
//!
//! A binding pairs one claim with one item. Appearing in a policy's allow
//! list, it means "an identity holding this claim may perform everything the
//! item flattens to"; in the deny list, the same pairing revokes those
//! operations instead. The binding itself is plain data — which list it
//! lands in decides its effect.

use serde::{Deserialize, Serialize};
use warden_claims::Claim;

use crate::items::Item;

/// One claim paired with one item. Immutable once created.
///
/// # Example
///
/// ```
/// use warden_claims::{types, Claim};
/// use warden_rbac::{Authorization, Operation};
///
/// let binding = Authorization::new(
///     Claim::new(types::GROUP, "billing"),
///     Operation::new("create_invoice").unwrap(),
/// );
///
/// assert_eq!(binding.claim().value(), "billing");
/// assert_eq!(binding.item().name(), "create_invoice");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Authorization {
    claim: Claim,
    item: Item,
}

impl Authorization {
    /// Bind a claim to an item. Anything convertible to [`Item`] — an
    /// operation, a task, or a role — is accepted directly.
    pub fn new(claim: Claim, item: impl Into<Item>) -> Self {
        Self {
            claim,
            item: item.into(),
        }
    }

    /// The bound claim.
    pub fn claim(&self) -> &Claim {
        &self.claim
    }

    /// The bound item.
    pub fn item(&self) -> &Item {
        &self.item
    }
}
