//! # Identities
//!
//! An identity is the full claim set one caller presents to the policy
//! engine. This crate does not authenticate anything; an [`Identity`] is
//! assembled from claims that some upstream authenticator already vouched
//! for.

use serde::{Deserialize, Serialize};

use crate::claim::Claim;

/// The set of claims presented by one caller.
///
/// Claims keep their insertion order, but nothing downstream depends on it;
/// the policy engine treats the collection as a set under claim equality.
///
/// # Examples
///
/// ```
/// use warden_claims::{types, Claim, Identity};
///
/// let identity = Identity::new([
///     Claim::new(types::NAME, "alice"),
///     Claim::new(types::GROUP, "billing"),
/// ]);
///
/// assert_eq!(identity.claims().len(), 2);
/// assert!(identity.has_claim(&Claim::new(types::NAME, "alice")));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Claims held by this identity.
    #[serde(default)]
    claims: Vec<Claim>,
}

impl Identity {
    /// Create an identity from a collection of claims.
    pub fn new(claims: impl IntoIterator<Item = Claim>) -> Self {
        Self {
            claims: claims.into_iter().collect(),
        }
    }

    /// Add a claim, returning the identity for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_claims::{types, Claim, Identity};
    ///
    /// let identity = Identity::default()
    ///     .with_claim(Claim::new(types::NAME, "alice"));
    /// assert_eq!(identity.claims().len(), 1);
    /// ```
    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    /// All claims held by this identity.
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Check whether this identity holds a claim equal to `claim`.
    pub fn has_claim(&self, claim: &Claim) -> bool {
        self.claims.iter().any(|c| c.matches(claim))
    }

    /// Find the first claim of the given type, if any.
    pub fn find_first(&self, claim_type: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_type() == claim_type)
    }
}

impl FromIterator<Claim> for Identity {
    fn from_iter<T: IntoIterator<Item = Claim>>(iter: T) -> Self {
        Self::new(iter)
    }
}
