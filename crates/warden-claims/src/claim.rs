//! # Claims
//!
//! A claim is one attribute of an identity, expressed as a
//! (type, value type, value) triple. Claims are produced by whatever
//! authenticated the caller and are treated as opaque data here; the only
//! semantics this crate attaches to them is the equality rule below.

use serde::{Deserialize, Serialize};

/// One identity attribute: a (type, value type, value) triple.
///
/// Two claims are equal iff all three components are equal by value. The
/// derived `PartialEq`, `Eq`, and `Hash` implementations carry exactly that
/// rule, so claims behave correctly as keys in std collections and two
/// independently materialized claims with the same components always match.
///
/// Claims are immutable once constructed.
///
/// # Example
///
/// ```
/// use warden_claims::{types, Claim};
///
/// let issued = Claim::new(types::GROUP, "billing");
/// let presented = Claim::new(types::GROUP, "billing");
///
/// // Distinct instances, same components: equal.
/// assert_eq!(issued, presented);
/// assert_ne!(issued, Claim::new(types::GROUP, "finance"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Claim {
    /// The claim type (e.g. `"name"`, `"group"`).
    #[serde(rename = "type")]
    claim_type: String,
    /// The type of the value (e.g. `"string"`).
    value_type: String,
    /// The claim value.
    value: String,
}

impl Claim {
    /// Value type assigned by [`Claim::new`] when none is given explicitly.
    pub const DEFAULT_VALUE_TYPE: &'static str = "string";

    /// Create a claim with the default value type.
    ///
    /// # Arguments
    ///
    /// * `claim_type` - The claim type, usually one of [`crate::types`]
    /// * `value` - The claim value
    ///
    /// # Example
    ///
    /// ```
    /// use warden_claims::{types, Claim};
    ///
    /// let claim = Claim::new(types::NAME, "alice");
    /// assert_eq!(claim.value_type(), Claim::DEFAULT_VALUE_TYPE);
    /// ```
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value_type: Self::DEFAULT_VALUE_TYPE.to_string(),
            value: value.into(),
        }
    }

    /// Create a claim with an explicit value type.
    ///
    /// # Arguments
    ///
    /// * `claim_type` - The claim type
    /// * `value_type` - The type of the value
    /// * `value` - The claim value
    pub fn with_value_type(
        claim_type: impl Into<String>,
        value_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            claim_type: claim_type.into(),
            value_type: value_type.into(),
            value: value.into(),
        }
    }

    /// The claim type.
    pub fn claim_type(&self) -> &str {
        &self.claim_type
    }

    /// The type of the value.
    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    /// The claim value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check whether this claim matches another.
    ///
    /// Matching is component-wise value equality over the full triple; this
    /// is the rule the policy engine applies when it filters authorization
    /// bindings against an identity's claims. It is exactly `==`, named so
    /// call sites read as a match rather than a comparison.
    ///
    /// # Example
    ///
    /// ```
    /// use warden_claims::{types, Claim};
    ///
    /// let registered = Claim::new(types::GROUP, "billing");
    /// let presented = Claim::new(types::GROUP, "billing");
    /// assert!(registered.matches(&presented));
    /// ```
    pub fn matches(&self, other: &Claim) -> bool {
        self == other
    }
}
