//! Storage collaborator interfaces.
//!
//! The engine never talks to a database directly; it reads through these
//! traits, and callers inject whichever implementation fits their
//! deployment. The traits cover reads only, which is all the engine
//! consumes. Administrative mutation is an implementation concern (see the
//! inherent methods on [`InMemoryRoleStore`]).

mod in_memory;

pub use in_memory::{InMemoryResourceStore, InMemoryRoleStore};

use warden_core::error::Result;
use warden_core::id::{PrincipalId, ResourceId, RoleId};
use warden_core::types::{Permission, Visibility};

/// Read access to role memberships and permission grants.
///
/// Implementations must be safe to share across threads; independent
/// authorization checks read concurrently with no coordination.
pub trait RoleStore: Send + Sync {
    /// Get the roles currently assigned to a principal.
    ///
    /// A principal with no memberships, including one the store has never
    /// seen, yields an empty list, not an error. Authorization against an
    /// empty permission set denies, which is the safe default either way.
    fn roles_of(&self, principal: &PrincipalId) -> Result<Vec<RoleId>>;

    /// Get the permissions granted to a role.
    ///
    /// An unknown role yields an empty list.
    fn permissions_for_role(&self, role: &RoleId) -> Result<Vec<Permission>>;

    /// Get the union of permissions across all of a principal's roles.
    ///
    /// The returned list may contain duplicates when the same grant is
    /// reachable through several roles; callers deduplicate by collecting
    /// into a [`PermissionSet`](crate::model::PermissionSet). A backing
    /// database would typically collapse this into one joined query.
    fn permissions_for_principal(&self, principal: &PrincipalId) -> Result<Vec<Permission>> {
        let mut permissions = Vec::new();

        for role in self.roles_of(principal)? {
            permissions.extend(self.permissions_for_role(&role)?);
        }

        Ok(permissions)
    }
}

/// Read access to resource ownership facts.
pub trait ResourceStore: Send + Sync {
    /// Get the recorded owner of a resource.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(owner))` - The resource's owner.
    /// * `Ok(None)` - The resource exists but has no recorded owner.
    /// * `Err` - The resource is unknown, or the store could not be read.
    fn owner_of(&self, resource: &ResourceId) -> Result<Option<PrincipalId>>;

    /// Get the visibility of a resource.
    fn visibility_of(&self, resource: &ResourceId) -> Result<Visibility>;
}
