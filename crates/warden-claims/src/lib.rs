//! # Warden Claims
//!
//! This crate provides the claim and identity model consumed by the Warden
//! access-control engine.
//!
//! ## Overview
//!
//! The warden-claims crate handles:
//! - **Claims**: (type, value type, value) triples describing one attribute
//!   of an identity
//! - **Identities**: the full claim set presented by one caller
//! - **Claim types**: well-known claim type names shared across services
//!
//! ## Matching Semantics
//!
//! Two claims are interchangeable exactly when all three components are
//! equal by value. That rule is expressed once, as the [`Claim`] type's
//! `PartialEq`/`Eq`/`Hash` implementations, and reused everywhere a claim is
//! compared, hashed, or deduplicated. Callers that need the same semantics
//! (e.g. deduplicating claims before a lookup) can rely on the std
//! collections directly.
//!
//! ## Usage
//!
//! ```
//! use warden_claims::{types, Claim, Identity};
//!
//! let identity = Identity::default()
//!     .with_claim(Claim::new(types::NAME, "alice"))
//!     .with_claim(Claim::new(types::GROUP, "billing"));
//!
//! assert!(identity.has_claim(&Claim::new(types::GROUP, "billing")));
//! assert_eq!(identity.find_first(types::NAME).map(Claim::value), Some("alice"));
//! ```

pub mod claim;
pub mod identity;
pub mod types;

// Re-export main types for convenience
pub use claim::Claim;
pub use identity::Identity;
