//! # Claim Types
//!
//! Well-known claim type names. Services are free to mint their own types;
//! these constants exist so the common ones are spelled the same way
//! everywhere a claim is issued or matched.

/// The acting user's account name.
pub const NAME: &str = "name";

/// The acting user's email address.
pub const EMAIL: &str = "email";

/// Membership in a named group.
pub const GROUP: &str = "group";

/// A role assigned directly to the identity.
pub const ROLE: &str = "role";

/// A party acting on behalf of the identity.
pub const ACTOR: &str = "actor";
