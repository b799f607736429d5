//! # Items
//!
//! The permission hierarchy: an [`Operation`] is the atomic permission unit,
//! a [`Task`] bundles operations, and a [`Role`] bundles tasks, operations,
//! and one level of other roles. [`Item`] is the closed union over the three,
//! and every item can be flattened to the full operation set it grants.
//!
//! Item identity is the name. Two operations with the same name are the same
//! operation everywhere in the engine: set membership, equality, hashing,
//! and resolution all compare names, never the instance or the remaining
//! fields.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{RbacError, RbacResult};

fn validated_name(name: String) -> RbacResult<String> {
    if name.is_empty() {
        return Err(RbacError::invalid_argument("name", "must not be empty"));
    }
    Ok(name)
}

/// The atomic permission unit.
///
/// An operation carries only its name, which acts as its identity key.
/// Flattening an operation yields the operation itself.
///
/// # Example
///
/// ```
/// use warden_rbac::Operation;
///
/// let op = Operation::new("create_invoice").unwrap();
/// assert_eq!(op.name(), "create_invoice");
///
/// // Identity is the name, not the instance.
/// assert_eq!(op, Operation::new("create_invoice").unwrap());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// The operation name (identity key).
    name: String,
}

impl Operation {
    /// Create an operation.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::InvalidArgument`] naming `name` when the name is
    /// empty.
    pub fn new(name: impl Into<String>) -> RbacResult<Self> {
        Ok(Self {
            name: validated_name(name.into())?,
        })
    }

    /// The operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flatten to the operation set this item grants: the operation itself.
    pub fn flatten(&self) -> HashSet<Operation> {
        HashSet::from([self.clone()])
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Operation {}

impl Hash for Operation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named bundle of operations.
///
/// Flattening a task yields its operation set, nothing more.
///
/// # Example
///
/// ```
/// use warden_rbac::{Operation, Task};
///
/// let task = Task::new("invoicing")
///     .unwrap()
///     .with_operation(Operation::new("create_invoice").unwrap())
///     .with_operation(Operation::new("void_invoice").unwrap());
///
/// assert_eq!(task.flatten().len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// The task name (identity key).
    name: String,
    /// Operations granted by this task, unique by name.
    #[serde(default)]
    operations: HashSet<Operation>,
}

impl Task {
    /// Create a task with no operations.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::InvalidArgument`] naming `name` when the name is
    /// empty.
    pub fn new(name: impl Into<String>) -> RbacResult<Self> {
        Ok(Self {
            name: validated_name(name.into())?,
            operations: HashSet::new(),
        })
    }

    /// Add an operation, returning the task for chaining.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.insert(operation);
        self
    }

    /// Add multiple operations, returning the task for chaining.
    pub fn with_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.extend(operations);
        self
    }

    /// The task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operations granted directly by this task.
    pub fn operations(&self) -> &HashSet<Operation> {
        &self.operations
    }

    /// Flatten to the operation set this item grants: the task's own
    /// operation set.
    pub fn flatten(&self) -> HashSet<Operation> {
        self.operations.clone()
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named bundle of tasks, operations, and other roles.
///
/// Role composition is one level deep: flattening a role unions the
/// operations of its own tasks, the operations of the tasks of each directly
/// referenced role, and its own direct operations. A referenced role
/// contributes only its tasks — neither its direct operations nor any roles
/// it references in turn.
///
/// # Example
///
/// ```
/// use warden_rbac::{Operation, Role, Task};
///
/// let invoicing = Task::new("invoicing")
///     .unwrap()
///     .with_operation(Operation::new("create_invoice").unwrap());
///
/// let clerk = Role::new("clerk").unwrap().with_task(invoicing);
/// let accountant = Role::new("accountant")
///     .unwrap()
///     .with_role(clerk)
///     .with_operation(Operation::new("close_books").unwrap());
///
/// let ops = accountant.flatten();
/// assert!(ops.contains(&Operation::new("create_invoice").unwrap()));
/// assert!(ops.contains(&Operation::new("close_books").unwrap()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// The role name (identity key).
    name: String,
    /// Operations granted directly by this role.
    #[serde(default)]
    operations: HashSet<Operation>,
    /// Tasks granted directly by this role.
    #[serde(default)]
    tasks: HashSet<Task>,
    /// Roles this role inherits tasks from (one level, not transitive).
    #[serde(default)]
    roles: HashSet<Role>,
}

impl Role {
    /// Create a role with no members.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::InvalidArgument`] naming `name` when the name is
    /// empty.
    pub fn new(name: impl Into<String>) -> RbacResult<Self> {
        Ok(Self {
            name: validated_name(name.into())?,
            operations: HashSet::new(),
            tasks: HashSet::new(),
            roles: HashSet::new(),
        })
    }

    /// Add a direct operation, returning the role for chaining.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.insert(operation);
        self
    }

    /// Add multiple direct operations, returning the role for chaining.
    pub fn with_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.extend(operations);
        self
    }

    /// Add a direct task, returning the role for chaining.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.insert(task);
        self
    }

    /// Add multiple direct tasks, returning the role for chaining.
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Add a referenced role, returning the role for chaining.
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    /// Add multiple referenced roles, returning the role for chaining.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles.extend(roles);
        self
    }

    /// The role name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operations granted directly by this role.
    pub fn operations(&self) -> &HashSet<Operation> {
        &self.operations
    }

    /// The tasks granted directly by this role.
    pub fn tasks(&self) -> &HashSet<Task> {
        &self.tasks
    }

    /// The roles this role inherits tasks from.
    pub fn roles(&self) -> &HashSet<Role> {
        &self.roles
    }

    /// Flatten to the operation set this item grants.
    ///
    /// The result is the union of the operations of every task reachable by
    /// taking this role's tasks together with the tasks of each directly
    /// referenced role, plus this role's own operations. Referenced roles
    /// are expanded one level only: their direct operations and their own
    /// role references do not contribute.
    pub fn flatten(&self) -> HashSet<Operation> {
        let mut operations: HashSet<Operation> = self
            .roles
            .iter()
            .flat_map(|role| role.tasks.iter())
            .chain(self.tasks.iter())
            .flat_map(|task| task.operations.iter().cloned())
            .collect();
        operations.extend(self.operations.iter().cloned());
        operations
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Role {}

impl Hash for Role {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Anything an authorization binding can grant or revoke: an operation, a
/// task, or a role.
///
/// The union is closed; flattening matches exhaustively over the three
/// cases, so there is no open-ended dispatch to reason about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    /// A single operation.
    Operation(Operation),
    /// A bundle of operations.
    Task(Task),
    /// A bundle of tasks, operations, and referenced roles.
    Role(Role),
}

impl Item {
    /// The item's name.
    pub fn name(&self) -> &str {
        match self {
            Item::Operation(operation) => operation.name(),
            Item::Task(task) => task.name(),
            Item::Role(role) => role.name(),
        }
    }

    /// Flatten to the full operation set this item grants, deduplicated by
    /// operation name. Flattening is a pure read and never fails.
    pub fn flatten(&self) -> HashSet<Operation> {
        match self {
            Item::Operation(operation) => operation.flatten(),
            Item::Task(task) => task.flatten(),
            Item::Role(role) => role.flatten(),
        }
    }
}

impl From<Operation> for Item {
    fn from(operation: Operation) -> Self {
        Item::Operation(operation)
    }
}

impl From<Task> for Item {
    fn from(task: Task) -> Self {
        Item::Task(task)
    }
}

impl From<Role> for Item {
    fn from(role: Role) -> Self {
        Item::Role(role)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
