//! Permission aggregation.
//!
//! This module produces a principal's effective permission set by unioning
//! the grants of every role the principal holds.

use std::collections::HashMap;
use tracing::debug;
use warden_core::error::Result;
use warden_core::id::PrincipalId;
use warden_core::types::Permission;

use crate::model::PermissionSet;
use crate::store::RoleStore;

/// A permission aggregator.
///
/// Aggregation is a read-only projection: the same principal against
/// unchanged role data yields an equal set no matter how often, or in what
/// role order, the grants are visited.
pub struct PermissionAggregator<S> {
    /// The role/permission store.
    role_store: S,
}

impl<S> PermissionAggregator<S>
where
    S: RoleStore,
{
    /// Create a new permission aggregator.
    ///
    /// # Arguments
    ///
    /// * `role_store` - The role/permission store to read through.
    pub fn new(role_store: S) -> Self {
        Self { role_store }
    }

    /// Compute the effective permission set for a principal.
    ///
    /// The set is the deduplicated union of permissions across all of the
    /// principal's roles. A principal with no roles yields an empty set:
    /// the store does not distinguish "no memberships" from "never seen",
    /// and an empty set denies everything, which is the safe answer for
    /// both.
    ///
    /// # Returns
    ///
    /// * `Ok(PermissionSet)` - The effective permissions.
    /// * `Err` - If the store could not be read.
    pub fn aggregate(&self, principal: &PrincipalId) -> Result<PermissionSet> {
        let permissions = self.role_store.permissions_for_principal(principal)?;
        let set: PermissionSet = permissions.into_iter().collect();

        debug!(
            principal = %principal,
            permissions = set.len(),
            "aggregated effective permission set"
        );

        Ok(set)
    }

    /// Get a principal's effective permissions, grouped by entity type.
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap<String, Vec<Permission>>)` - The permissions, grouped
    ///   by entity.
    /// * `Err` - If the store could not be read.
    pub fn permissions_by_entity(
        &self,
        principal: &PrincipalId,
    ) -> Result<HashMap<String, Vec<Permission>>> {
        let set = self.aggregate(principal)?;
        let mut by_entity: HashMap<String, Vec<Permission>> = HashMap::new();

        for permission in set {
            by_entity
                .entry(permission.entity.clone())
                .or_default()
                .push(permission);
        }

        Ok(by_entity)
    }

    /// Get a principal's effective permissions, grouped by action.
    pub fn permissions_by_action(
        &self,
        principal: &PrincipalId,
    ) -> Result<HashMap<String, Vec<Permission>>> {
        let set = self.aggregate(principal)?;
        let mut by_action: HashMap<String, Vec<Permission>> = HashMap::new();

        for permission in set {
            by_action
                .entry(permission.action.clone())
                .or_default()
                .push(permission);
        }

        Ok(by_action)
    }
}
