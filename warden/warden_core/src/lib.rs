//! # Warden Core
//!
//! `warden_core` provides the fundamental building blocks for the Warden
//! authorization system. This includes error types, ID definitions, and the
//! permission vocabulary shared by the engine and its callers.
//!
//! ## Core Principles
//!
//! The Warden engine is built around a small number of deliberate rules:
//!
//! 1. **Permissions are triples**: a grant of an `action` over an `entity`
//!    type at an [`AccessScope`](types::AccessScope). Actions and entities are
//!    open string identifiers; the scope is a closed two-value sum, parsed
//!    once at the boundary.
//!
//! 2. **Deny is not an error**: a failed authorization check is the normal
//!    `false` outcome of a pure predicate. Errors are reserved for
//!    infrastructure failures (an unreachable store) and administrative
//!    mistakes (a duplicate catalog entry), which must never be conflated
//!    with a legitimate deny.
//!
//! 3. **Ownership facts are inputs**: the engine accepts a resource's owner
//!    and visibility as ground truth supplied by the caller. It evaluates
//!    them; it does not verify them.
//!
//! ## Crate Structure
//!
//! - **error**: Error types for all Warden components
//! - **id**: Strongly-typed identifier types
//! - **types**: The permission vocabulary and resource facts

pub mod error;
pub mod id;
pub mod types;

// Re-export key types for convenience
pub use error::{CatalogError, Error, Result, StoreError};
pub use id::{PermissionId, PrincipalId, ResourceId, RoleId};
pub use types::{AccessScope, Permission, ResourceFacts, Visibility};
