//! In-memory store implementations.
//!
//! These model the relational layout a database deployment would use: a
//! permission catalog unique on the (action, entity, access) triple, a
//! roles table unique on name, and two join tables for grants and
//! memberships, all as concurrent maps. They back the tests, the CLI, and
//! any deployment small enough to hold its catalog in memory.

use chrono::Utc;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use warden_core::error::{CatalogError, Result, StoreError};
use warden_core::id::{PermissionId, PrincipalId, ResourceId, RoleId};
use warden_core::types::{Permission, ResourceFacts, Visibility};

use super::{ResourceStore, RoleStore};
use crate::model::Role;

/// A permission catalog row.
#[derive(Debug, Clone)]
struct CatalogEntry {
    id: PermissionId,
    description: String,
}

/// An in-memory role/permission store.
#[derive(Clone, Default)]
pub struct InMemoryRoleStore {
    /// The permission catalog, keyed by the unique triple.
    catalog: Arc<DashMap<Permission, CatalogEntry>>,

    /// The roles, indexed by ID.
    roles: Arc<DashMap<RoleId, Role>>,

    /// Role IDs by unique name.
    role_names: Arc<DashMap<String, RoleId>>,

    /// Permissions granted to each role.
    grants: Arc<DashMap<RoleId, HashSet<Permission>>>,

    /// Roles assigned to each principal.
    memberships: Arc<DashMap<PrincipalId, HashSet<RoleId>>>,
}

impl InMemoryRoleStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a permission in the catalog.
    ///
    /// # Arguments
    ///
    /// * `permission` - The (action, entity, access) triple to define.
    /// * `description` - Human-readable description; kept for parity with
    ///   the catalog schema but not consulted by the engine.
    ///
    /// # Returns
    ///
    /// * `Ok(PermissionId)` - The ID of the new catalog entry.
    /// * `Err` - If the triple is already defined.
    pub fn define_permission(
        &self,
        permission: Permission,
        description: &str,
    ) -> Result<PermissionId> {
        // The triple is the unit of identity; duplicates are a catalog error
        if self.catalog.contains_key(&permission) {
            return Err(CatalogError::DuplicatePermission(permission).into());
        }

        let id = PermissionId::new();
        self.catalog.insert(
            permission,
            CatalogEntry {
                id,
                description: description.to_string(),
            },
        );

        Ok(id)
    }

    /// Look up the catalog ID of a defined permission.
    pub fn permission_id(&self, permission: &Permission) -> Option<PermissionId> {
        self.catalog.get(permission).map(|entry| entry.id)
    }

    /// Define a role.
    ///
    /// # Returns
    ///
    /// * `Ok(RoleId)` - The ID of the new role.
    /// * `Err` - If a role with the same name already exists.
    pub fn define_role(&self, name: &str, description: &str) -> Result<RoleId> {
        if self.role_names.contains_key(name) {
            return Err(CatalogError::RoleExists(name.to_string()).into());
        }

        let role = Role::new(RoleId::new(), name).with_description(description);
        let id = role.id;

        self.role_names.insert(name.to_string(), id);
        self.roles.insert(id, role);

        Ok(id)
    }

    /// Look up a role by name.
    pub fn role_by_name(&self, name: &str) -> Result<Role> {
        let id = *self
            .role_names
            .get(name)
            .ok_or_else(|| CatalogError::RoleNotFound(name.to_string()))?;

        self.roles
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| CatalogError::RoleNotFound(name.to_string()).into())
    }

    /// List all roles.
    pub fn list_roles(&self) -> Vec<Role> {
        self.roles.iter().map(|r| r.value().clone()).collect()
    }

    /// Grant a catalog permission to a role.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the grant was recorded (re-granting is a no-op).
    /// * `Err` - If the role is unknown or the permission is not in the
    ///   catalog.
    pub fn grant(&self, role: &RoleId, permission: Permission) -> Result<()> {
        if !self.roles.contains_key(role) {
            return Err(CatalogError::RoleNotFound(role.to_string()).into());
        }
        if !self.catalog.contains_key(&permission) {
            return Err(CatalogError::PermissionNotFound(permission).into());
        }

        self.grants.entry(*role).or_default().insert(permission);

        // Touch the role's updated_at, as the schema triggers would
        if let Some(mut role) = self.roles.get_mut(role) {
            role.updated_at = Utc::now();
        }

        Ok(())
    }

    /// Assign a role to a principal.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the membership was recorded (re-assigning is a
    ///   no-op).
    /// * `Err` - If the role is unknown.
    pub fn assign_role(&self, principal: &PrincipalId, role: &RoleId) -> Result<()> {
        if !self.roles.contains_key(role) {
            return Err(CatalogError::RoleNotFound(role.to_string()).into());
        }

        self.memberships.entry(*principal).or_default().insert(*role);

        Ok(())
    }

    /// Remove a role from a principal.
    pub fn revoke_role(&self, principal: &PrincipalId, role: &RoleId) -> Result<()> {
        if let Some(mut roles) = self.memberships.get_mut(principal) {
            roles.remove(role);
        }

        Ok(())
    }

    /// List all principals with at least one membership.
    pub fn list_principals(&self) -> Vec<PrincipalId> {
        self.memberships.iter().map(|m| *m.key()).collect()
    }

    /// List the defined permission triples.
    pub fn list_permissions(&self) -> Vec<Permission> {
        self.catalog.iter().map(|p| p.key().clone()).collect()
    }

    /// List the defined permissions with their descriptions.
    pub fn list_catalog(&self) -> Vec<(Permission, String)> {
        self.catalog
            .iter()
            .map(|p| (p.key().clone(), p.value().description.clone()))
            .collect()
    }

    /// Clear the catalog, roles, grants, and memberships.
    pub fn reset(&self) {
        self.grants.clear();
        self.memberships.clear();
        self.catalog.clear();
        self.role_names.clear();
        self.roles.clear();
    }
}

impl RoleStore for InMemoryRoleStore {
    fn roles_of(&self, principal: &PrincipalId) -> Result<Vec<RoleId>> {
        let roles = match self.memberships.get(principal) {
            Some(roles) => roles.iter().copied().collect(),
            None => Vec::new(),
        };

        Ok(roles)
    }

    fn permissions_for_role(&self, role: &RoleId) -> Result<Vec<Permission>> {
        let permissions = match self.grants.get(role) {
            Some(grants) => grants.iter().cloned().collect(),
            None => Vec::new(),
        };

        Ok(permissions)
    }
}

/// An in-memory resource facts store.
#[derive(Clone, Default)]
pub struct InMemoryResourceStore {
    /// Ownership facts, indexed by resource ID.
    resources: Arc<DashMap<ResourceId, ResourceFacts>>,
}

impl InMemoryResourceStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the ownership facts for a resource.
    pub fn insert(&self, resource: ResourceId, facts: ResourceFacts) {
        self.resources.insert(resource, facts);
    }

    /// Remove a resource's facts.
    pub fn remove(&self, resource: &ResourceId) {
        self.resources.remove(resource);
    }

    /// Clear all resources.
    pub fn reset(&self) {
        self.resources.clear();
    }
}

impl ResourceStore for InMemoryResourceStore {
    fn owner_of(&self, resource: &ResourceId) -> Result<Option<PrincipalId>> {
        let facts = self
            .resources
            .get(resource)
            .ok_or(StoreError::ResourceNotFound(*resource))?;

        Ok(facts.owner)
    }

    fn visibility_of(&self, resource: &ResourceId) -> Result<Visibility> {
        let facts = self
            .resources
            .get(resource)
            .ok_or(StoreError::ResourceNotFound(*resource))?;

        Ok(facts.visibility)
    }
}
