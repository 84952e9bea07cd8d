//! # Warden RBAC
//!
//! `warden_rbac` provides the role-based authorization engine for the
//! Warden system: the aggregation of role grants into effective permission
//! sets, and the decision function that authorizes an operation against a
//! concrete resource.
//!
//! Key concepts:
//!
//! 1. **Permission Set**: the effective, deduplicated union of every
//!    permission reachable from a principal's role memberships.
//!
//! 2. **Aggregation**: the read that produces a permission set, performed
//!    through an injected [`RoleStore`] handle.
//!
//! 3. **Decision**: a pure predicate over a permission set, a requested
//!    action/entity, and the target resource's ownership facts. Deny is a
//!    normal outcome, not an error.
//!
//! 4. **Public-read bypass**: an explicit, per-call-site carve-out that
//!    lets publicly visible resources be read without any grant.
//!
//! A typical caller aggregates once per request and then runs any number of
//! decisions against the resulting set:
//!
//! ```
//! use warden_core::{PrincipalId, Permission};
//! use warden_rbac::engine::{authorize, PermissionAggregator};
//! use warden_rbac::store::InMemoryRoleStore;
//!
//! # fn main() -> warden_core::Result<()> {
//! let store = InMemoryRoleStore::new();
//! let editors = store.define_role("editor", "Can edit content")?;
//! store.define_permission(Permission::own("edit", "project"), "Edit own project")?;
//! store.grant(&editors, Permission::own("edit", "project"))?;
//!
//! let alice = PrincipalId::new();
//! store.assign_role(&alice, &editors)?;
//!
//! let permissions = PermissionAggregator::new(store).aggregate(&alice)?;
//! assert!(authorize(&permissions, "edit", "project", Some(&alice), &alice));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod engine;
pub mod model;
pub mod service;
pub mod store;

// Re-export key types and traits for convenience
pub use engine::{
    authorize, authorize_with_visibility, decide, decide_with_visibility, DecisionAudit,
    PermissionAggregator,
};
pub use model::{Decision, DecisionOutcome, PermissionSet, Role};
pub use service::AccessGuard;
pub use store::{InMemoryResourceStore, InMemoryRoleStore, ResourceStore, RoleStore};
