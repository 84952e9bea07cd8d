//! Effective permission sets.
//!
//! A `PermissionSet` is the transient, request-scoped projection of every
//! permission reachable from a principal's role memberships. It is a set in
//! the strict sense: order-irrelevant and deduplicated by the full
//! (action, entity, access) triple, so the same grant arriving through two
//! roles is counted once. Two grants for the same (action, entity) at
//! different scopes coexist.

use serde::{Deserialize, Serialize};
use std::collections::hash_set;
use std::collections::HashSet;
use warden_core::types::Permission;

/// The effective set of permissions held by one principal at decision time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    permissions: HashSet<Permission>,
}

impl PermissionSet {
    /// Create an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct permissions in the set.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Add a permission to the set.
    ///
    /// # Returns
    ///
    /// `true` if the permission was not already present.
    pub fn insert(&mut self, permission: Permission) -> bool {
        self.permissions.insert(permission)
    }

    /// Check whether the set contains the exact (action, entity, access)
    /// triple.
    pub fn contains(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Union this set with another, consuming both.
    ///
    /// Union is idempotent and order-independent: `a.union(b) == b.union(a)`
    /// and duplicates across the two sets collapse.
    pub fn union(mut self, other: Self) -> Self {
        self.permissions.extend(other.permissions);
        self
    }

    /// Iterate over the permissions for the given action and entity.
    ///
    /// Matching is exact and case-sensitive.
    pub fn matching<'a>(
        &'a self,
        action: &'a str,
        entity: &'a str,
    ) -> impl Iterator<Item = &'a Permission> {
        self.permissions
            .iter()
            .filter(move |p| p.applies_to(action, entity))
    }

    /// Iterate over all permissions in the set.
    pub fn iter(&self) -> hash_set::Iter<'_, Permission> {
        self.permissions.iter()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<I: IntoIterator<Item = Permission>>(&mut self, iter: I) {
        self.permissions.extend(iter);
    }
}

impl IntoIterator for PermissionSet {
    type Item = Permission;
    type IntoIter = hash_set::IntoIter<Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.permissions.into_iter()
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = &'a Permission;
    type IntoIter = hash_set::Iter<'a, Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.permissions.iter()
    }
}
