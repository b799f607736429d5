//! # Policy
//!
//! Policy configuration and resolution in two phases. [`Rbac`] is the
//! mutable accumulator used during setup: roles are registered and
//! claim-to-item bindings appended to its allow and deny lists. Calling
//! [`Rbac::freeze`] produces an immutable [`Policy`], and only the frozen
//! policy can resolve identities — so concurrent configuration and
//! resolution cannot be expressed at all.
//!
//! Resolution computes, for one identity, the union of the flattened items
//! of every allow binding whose claim the identity holds, minus the same
//! union over the deny bindings. Deny wins on overlap regardless of the
//! order bindings were appended in.

use std::collections::HashSet;

use warden_claims::{Claim, Identity};

use crate::authorization::Authorization;
use crate::context::AuthorizationContext;
use crate::items::{Operation, Role};

/// Mutable policy accumulator used during the configuration phase.
///
/// All methods consume and return the accumulator, so a policy reads as one
/// chained expression ending in [`freeze`](Rbac::freeze).
///
/// # Example
///
/// ```
/// use warden_claims::{types, Claim, Identity};
/// use warden_rbac::{Authorization, Operation, Rbac, Role, Task};
///
/// let invoicing = Task::new("invoicing")
///     .unwrap()
///     .with_operation(Operation::new("create_invoice").unwrap());
/// let clerk = Role::new("clerk").unwrap().with_task(invoicing);
///
/// let policy = Rbac::new()
///     .add(clerk.clone())
///     .allow(Authorization::new(Claim::new(types::GROUP, "billing"), clerk))
///     .freeze();
///
/// let identity = Identity::new([Claim::new(types::GROUP, "billing")]);
/// let context = policy.resolve(&identity);
/// assert!(context.can_perform(&Operation::new("create_invoice").unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rbac {
    roles: HashSet<Role>,
    allow: Vec<Authorization>,
    deny: Vec<Authorization>,
}

impl Rbac {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a role. Registering a role whose name is already present is
    /// a no-op.
    pub fn add(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    /// Register multiple roles.
    pub fn add_all(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles.extend(roles);
        self
    }

    /// Append a binding to the allow list.
    pub fn allow(mut self, authorization: Authorization) -> Self {
        self.allow.push(authorization);
        self
    }

    /// Append multiple bindings to the allow list.
    pub fn allow_all(mut self, authorizations: impl IntoIterator<Item = Authorization>) -> Self {
        self.allow.extend(authorizations);
        self
    }

    /// Append a binding to the deny list.
    pub fn deny(mut self, authorization: Authorization) -> Self {
        self.deny.push(authorization);
        self
    }

    /// Append multiple bindings to the deny list.
    pub fn deny_all(mut self, authorizations: impl IntoIterator<Item = Authorization>) -> Self {
        self.deny.extend(authorizations);
        self
    }

    /// Freeze the accumulated configuration into an immutable [`Policy`].
    pub fn freeze(self) -> Policy {
        Policy {
            roles: self.roles,
            allow: self.allow,
            deny: self.deny,
        }
    }
}

/// An immutable, resolvable policy.
///
/// A frozen policy never changes, so resolution is a pure function of the
/// policy and the identity: the same inputs always produce the same
/// permitted set. `Policy` owns all of its data and is `Send + Sync`;
/// resolving independent identities in parallel requires no locking.
#[derive(Debug, Clone)]
pub struct Policy {
    roles: HashSet<Role>,
    allow: Vec<Authorization>,
    deny: Vec<Authorization>,
}

impl Policy {
    /// Resolve the set of operations `identity` is permitted to perform.
    ///
    /// A binding participates when its claim equals any claim the identity
    /// holds (component-wise claim equality). The permitted set is the union
    /// of the flattened items of the participating allow bindings, minus the
    /// union over the participating deny bindings. Claims that match no
    /// binding simply contribute nothing; an identity matching nothing gets
    /// an empty context.
    pub fn resolve(&self, identity: &Identity) -> AuthorizationContext {
        let allowed = matched_operations(&self.allow, identity.claims());
        let denied = matched_operations(&self.deny, identity.claims());

        AuthorizationContext::new(allowed.difference(&denied).cloned())
    }

    /// The registered roles.
    ///
    /// Registration is bookkeeping only: resolution reads the allow and
    /// deny bindings, each of which carries its own item.
    pub fn roles(&self) -> &HashSet<Role> {
        &self.roles
    }
}

/// Union of the flattened items of every binding whose claim the identity
/// holds, deduplicated by operation name.
fn matched_operations(bindings: &[Authorization], claims: &[Claim]) -> HashSet<Operation> {
    bindings
        .iter()
        .filter(|binding| claims.iter().any(|claim| claim.matches(binding.claim())))
        .flat_map(|binding| binding.item().flatten())
        .collect()
}
