//! # Warden RBAC
//!
//! This crate is the Warden role-based access-control resolution engine:
//! given a configured policy and the claims one identity holds, it computes
//! the set of operations that identity is permitted to perform.
//!
//! ## Overview
//!
//! The warden-rbac crate handles:
//! - **Items**: the permission hierarchy (Operation ⊂ Task ⊂ Role, with
//!   one level of role-to-role composition)
//! - **Bindings**: claim-to-item pairings making up allow and deny rules
//! - **Policies**: a mutable builder frozen into an immutable, resolvable
//!   policy
//! - **Contexts**: the resolved permitted-operation set for one identity
//!
//! ## Architecture
//!
//! ```text
//! Rbac (builder)
//!   ├─ add(Role)                        registration
//!   ├─ allow(Authorization)             claim → item grants
//!   ├─ deny(Authorization)              claim → item revocations
//!   └─ freeze() ─→ Policy (immutable)
//!                    └─ resolve(&Identity) ─→ AuthorizationContext
//!                                               └─ can_perform(&Operation)
//! ```
//!
//! The permitted set is `allowed − denied`: the union of the flattened items
//! of every allow binding whose claim the identity holds, minus the same
//! union over the deny bindings. Deny always wins on overlap, so the result
//! never depends on the order bindings were appended in.
//!
//! ## Usage
//!
//! ```
//! use warden_claims::{types, Claim, Identity};
//! use warden_rbac::{Authorization, Operation, Rbac, Role, Task};
//!
//! let invoicing = Task::new("invoicing")
//!     .unwrap()
//!     .with_operation(Operation::new("create_invoice").unwrap())
//!     .with_operation(Operation::new("void_invoice").unwrap());
//!
//! let clerk = Role::new("clerk").unwrap().with_task(invoicing);
//!
//! let policy = Rbac::new()
//!     .add(clerk.clone())
//!     .allow(Authorization::new(Claim::new(types::GROUP, "billing"), clerk))
//!     .deny(Authorization::new(
//!         Claim::new(types::NAME, "mallory"),
//!         Operation::new("void_invoice").unwrap(),
//!     ))
//!     .freeze();
//!
//! let mallory = Identity::new([
//!     Claim::new(types::NAME, "mallory"),
//!     Claim::new(types::GROUP, "billing"),
//! ]);
//!
//! let context = policy.resolve(&mallory);
//! assert!(context.can_perform(&Operation::new("create_invoice").unwrap()));
//! assert!(!context.can_perform(&Operation::new("void_invoice").unwrap()));
//! ```
//!
//! ## Concurrency
//!
//! The engine has no internal locking and needs none: configuration happens
//! on the builder, and resolution is only reachable through the frozen
//! [`Policy`], which is immutable and `Send + Sync`. Resolving independent
//! identities and querying contexts may run freely in parallel.

pub mod authorization;
pub mod context;
pub mod error;
pub mod items;
pub mod policy;

// Re-export main types for convenience
pub use authorization::Authorization;
pub use context::AuthorizationContext;
pub use error::{RbacError, RbacResult};
pub use items::{Item, Operation, Role, Task};
pub use policy::{Policy, Rbac};
