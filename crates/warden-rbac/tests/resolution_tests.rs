//! End-to-end tests for policy resolution.
//!
//! These tests configure one realistic policy — three roles built from three
//! tasks over seven operations, with group-based allow bindings and two
//! per-user deny bindings — and verify the permitted set every identity
//! resolves to, for every operation.
//!
//! Topology:
//! - clerk         = { invoicing }
//! - accountant    = { clerk (role), reporting }
//! - administrator = { administration, create_invoice (direct) }

use std::sync::Arc;

use warden_claims::{types, Claim, Identity};
use warden_rbac::{Authorization, Operation, Policy, Rbac, Role, Task};

/// Test fixture holding the frozen policy and the identities under test.
struct TestFixture {
    policy: Policy,
    /// Billing clerk, no denies.
    alice: Identity,
    /// Billing clerk, denied create_invoice.
    bob: Identity,
    /// Finance accountant, denied approve_invoice.
    carol: Identity,
    /// IT administrator, no denies.
    dave: Identity,
}

fn op(name: &str) -> Operation {
    Operation::new(name).unwrap()
}

impl TestFixture {
    fn new() -> Self {
        let reporting = Task::new("reporting")
            .unwrap()
            .with_operations([op("view_reports"), op("export_reports")]);
        let invoicing = Task::new("invoicing")
            .unwrap()
            .with_operations([op("create_invoice"), op("approve_invoice"), op("void_invoice")]);
        let administration = Task::new("administration")
            .unwrap()
            .with_operations([op("manage_users"), op("edit_dashboard")]);

        let clerk = Role::new("clerk").unwrap().with_task(invoicing);
        let accountant = Role::new("accountant")
            .unwrap()
            .with_role(clerk.clone())
            .with_task(reporting);
        let administrator = Role::new("administrator")
            .unwrap()
            .with_task(administration)
            .with_operation(op("create_invoice"));

        let policy = Rbac::new()
            .add(clerk.clone())
            .add(accountant.clone())
            .add(administrator.clone())
            .allow_all([
                Authorization::new(Claim::new(types::GROUP, "billing"), clerk),
                Authorization::new(Claim::new(types::GROUP, "finance"), accountant),
                Authorization::new(Claim::new(types::GROUP, "it-ops"), administrator),
            ])
            .deny_all([
                Authorization::new(Claim::new(types::NAME, "bob"), op("create_invoice")),
                Authorization::new(Claim::new(types::NAME, "carol"), op("approve_invoice")),
            ])
            .freeze();

        let user = |name: &str, group: &str| {
            Identity::new([
                Claim::new(types::NAME, name),
                Claim::new(types::GROUP, group),
            ])
        };

        Self {
            policy,
            alice: user("alice", "billing"),
            bob: user("bob", "billing"),
            carol: user("carol", "finance"),
            dave: user("dave", "it-ops"),
        }
    }
}

/// Every operation the fixture knows about.
const ALL_OPERATIONS: [&str; 7] = [
    "view_reports",
    "export_reports",
    "create_invoice",
    "approve_invoice",
    "void_invoice",
    "manage_users",
    "edit_dashboard",
];

/// Assert that the identity may perform exactly `permitted` and nothing else.
fn assert_permitted_exactly(policy: &Policy, identity: &Identity, permitted: &[&str]) {
    let context = policy.resolve(identity);
    for name in ALL_OPERATIONS {
        assert_eq!(
            context.can_perform(&op(name)),
            permitted.contains(&name),
            "unexpected verdict for `{name}`"
        );
    }
    assert_eq!(context.len(), permitted.len());
}

#[test]
fn clerk_gets_every_invoicing_operation() {
    let fixture = TestFixture::new();
    assert_permitted_exactly(
        &fixture.policy,
        &fixture.alice,
        &["create_invoice", "approve_invoice", "void_invoice"],
    );
}

#[test]
fn denied_operation_is_removed_from_an_otherwise_allowed_role() {
    let fixture = TestFixture::new();
    assert_permitted_exactly(
        &fixture.policy,
        &fixture.bob,
        &["approve_invoice", "void_invoice"],
    );
}

#[test]
fn accountant_inherits_clerk_tasks_plus_reporting() {
    let fixture = TestFixture::new();
    // accountant pulls invoicing in through the clerk role and reporting
    // directly; approve_invoice is denied for carol by name.
    assert_permitted_exactly(
        &fixture.policy,
        &fixture.carol,
        &["view_reports", "export_reports", "create_invoice", "void_invoice"],
    );
}

#[test]
fn administrator_combines_task_and_direct_operation() {
    let fixture = TestFixture::new();
    assert_permitted_exactly(
        &fixture.policy,
        &fixture.dave,
        &["manage_users", "edit_dashboard", "create_invoice"],
    );
}

#[test]
fn identity_with_no_matching_claims_can_perform_nothing() {
    let fixture = TestFixture::new();
    let eve = Identity::new([
        Claim::new(types::NAME, "eve"),
        Claim::new(types::GROUP, "visitors"),
    ]);
    assert_permitted_exactly(&fixture.policy, &eve, &[]);
}

#[test]
fn resolving_twice_yields_the_same_context() {
    let fixture = TestFixture::new();
    assert_eq!(
        fixture.policy.resolve(&fixture.carol),
        fixture.policy.resolve(&fixture.carol)
    );
}

#[tokio::test]
async fn frozen_policy_resolves_concurrently() {
    let fixture = TestFixture::new();
    let policy = Arc::new(fixture.policy);

    let cases: Vec<(Identity, &str, bool)> = vec![
        (fixture.alice.clone(), "create_invoice", true),
        (fixture.bob.clone(), "create_invoice", false),
        (fixture.carol.clone(), "view_reports", true),
        (fixture.dave.clone(), "manage_users", true),
    ];

    let handles: Vec<_> = cases
        .into_iter()
        .map(|(identity, operation, expected)| {
            let policy = Arc::clone(&policy);
            tokio::spawn(async move {
                // Re-resolve a few times from this task; the policy is
                // shared and immutable, so every resolve must agree.
                for _ in 0..100 {
                    let context = policy.resolve(&identity);
                    assert_eq!(context.can_perform(&op(operation)), expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
}
