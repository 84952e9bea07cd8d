//! Route-facing authorization service.
//!
//! `AccessGuard` is the surface request handlers talk to: it owns the two
//! injected store handles, aggregates a principal's permissions, fetches
//! the target resource's facts, and runs the decision. Handlers translate
//! `Ok(false)` into a forbidden response and `Err` into a server error;
//! the two must never be conflated.

use tracing::debug;
use warden_core::error::Result;
use warden_core::id::{PrincipalId, ResourceId};

use crate::engine::{decide, decide_with_visibility, DecisionAudit, PermissionAggregator};
use crate::model::PermissionSet;
use crate::store::{ResourceStore, RoleStore};

/// An authorization guard over injected role and resource stores.
pub struct AccessGuard<R, T> {
    /// The permission aggregator over the role store.
    aggregator: PermissionAggregator<R>,

    /// The resource facts store.
    resources: T,

    /// Optional decision recorder.
    audit: Option<DecisionAudit>,
}

impl<R, T> AccessGuard<R, T>
where
    R: RoleStore,
    T: ResourceStore,
{
    /// Create a new access guard.
    ///
    /// # Arguments
    ///
    /// * `roles` - The role/permission store.
    /// * `resources` - The resource facts store.
    pub fn new(roles: R, resources: T) -> Self {
        Self {
            aggregator: PermissionAggregator::new(roles),
            resources,
            audit: None,
        }
    }

    /// Attach a decision audit; every decision made through the guard is
    /// recorded into it.
    pub fn with_audit(mut self, audit: DecisionAudit) -> Self {
        self.audit = Some(audit);
        self
    }

    /// The attached decision audit, if any.
    pub fn audit(&self) -> Option<&DecisionAudit> {
        self.audit.as_ref()
    }

    /// Compute the effective permission set for a principal.
    ///
    /// Handlers typically call this once per request and reuse the set for
    /// every check within it; staleness across requests is the caller's
    /// tradeoff.
    pub fn permissions(&self, principal: &PrincipalId) -> Result<PermissionSet> {
        self.aggregator.aggregate(principal)
    }

    /// Check an operation against an already-aggregated permission set.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The operation is allowed.
    /// * `Ok(false)` - The operation is denied.
    /// * `Err` - The resource facts could not be read.
    pub fn can(
        &self,
        permissions: &PermissionSet,
        action: &str,
        entity: &str,
        resource: &ResourceId,
        principal: &PrincipalId,
    ) -> Result<bool> {
        let owner = self.resources.owner_of(resource)?;
        let decision = decide(permissions, action, entity, owner.as_ref(), principal);

        debug!(
            principal = %principal,
            action,
            entity,
            resource = %resource,
            outcome = %decision.outcome,
            "authorization decision"
        );

        let allowed = decision.is_allowed();
        if let Some(audit) = &self.audit {
            audit.record(decision);
        }

        Ok(allowed)
    }

    /// Check an operation, honoring the resource's public visibility.
    ///
    /// Like [`AccessGuard::can`], but a publicly visible resource allows
    /// the `read` action without consulting the set.
    pub fn can_with_visibility(
        &self,
        permissions: &PermissionSet,
        action: &str,
        entity: &str,
        resource: &ResourceId,
        principal: &PrincipalId,
    ) -> Result<bool> {
        let owner = self.resources.owner_of(resource)?;
        let visibility = self.resources.visibility_of(resource)?;
        let decision = decide_with_visibility(
            permissions,
            action,
            entity,
            owner.as_ref(),
            principal,
            visibility,
        );

        debug!(
            principal = %principal,
            action,
            entity,
            resource = %resource,
            outcome = %decision.outcome,
            public_bypass = decision.public_bypass,
            "authorization decision"
        );

        let allowed = decision.is_allowed();
        if let Some(audit) = &self.audit {
            audit.record(decision);
        }

        Ok(allowed)
    }

    /// Aggregate and check in one call.
    ///
    /// Convenience for one-shot callers; handlers making several checks
    /// should aggregate once via [`AccessGuard::permissions`].
    pub fn check(
        &self,
        principal: &PrincipalId,
        action: &str,
        entity: &str,
        resource: &ResourceId,
    ) -> Result<bool> {
        let permissions = self.permissions(principal)?;
        self.can(&permissions, action, entity, resource, principal)
    }

    /// Aggregate and check in one call, honoring public visibility.
    pub fn check_with_visibility(
        &self,
        principal: &PrincipalId,
        action: &str,
        entity: &str,
        resource: &ResourceId,
    ) -> Result<bool> {
        let permissions = self.permissions(principal)?;
        self.can_with_visibility(&permissions, action, entity, resource, principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{entities, seed_defaults};
    use crate::store::{InMemoryResourceStore, InMemoryRoleStore};
    use warden_core::types::ResourceFacts;

    fn guard_with_seeded_catalog() -> (
        AccessGuard<InMemoryRoleStore, InMemoryResourceStore>,
        InMemoryRoleStore,
        InMemoryResourceStore,
    ) {
        let roles = InMemoryRoleStore::new();
        seed_defaults(&roles).unwrap();

        let resources = InMemoryResourceStore::new();
        let guard = AccessGuard::new(roles.clone(), resources.clone());

        (guard, roles, resources)
    }

    #[test]
    fn test_check_editor_owns_project() {
        let (guard, roles, resources) = guard_with_seeded_catalog();

        let editor = PrincipalId::new();
        let role = roles.role_by_name("editor").unwrap();
        roles.assign_role(&editor, &role.id).unwrap();

        let project = ResourceId::new();
        resources.insert(project, ResourceFacts::owned_by(editor));

        assert!(guard.check(&editor, "edit", entities::PROJECT, &project).unwrap());
        assert!(!guard.check(&editor, "delete", entities::PROJECT, &project).unwrap());
    }

    #[test]
    fn test_check_editor_cannot_edit_foreign_project() {
        let (guard, roles, resources) = guard_with_seeded_catalog();

        let editor = PrincipalId::new();
        let role = roles.role_by_name("editor").unwrap();
        roles.assign_role(&editor, &role.id).unwrap();

        let project = ResourceId::new();
        resources.insert(project, ResourceFacts::owned_by(PrincipalId::new()));

        assert!(!guard.check(&editor, "edit", entities::PROJECT, &project).unwrap());
        // read:project:any still applies
        assert!(guard.check(&editor, "read", entities::PROJECT, &project).unwrap());
    }

    #[test]
    fn test_check_with_visibility_public_project() {
        let (guard, _roles, resources) = guard_with_seeded_catalog();

        // A principal with no roles at all
        let stranger = PrincipalId::new();
        let project = ResourceId::new();
        resources.insert(project, ResourceFacts::public_owned_by(PrincipalId::new()));

        assert!(guard
            .check_with_visibility(&stranger, "read", entities::PROJECT, &project)
            .unwrap());
        // The bypass is read-only
        assert!(!guard
            .check_with_visibility(&stranger, "edit", entities::PROJECT, &project)
            .unwrap());
        // And the plain check never bypasses
        assert!(!guard.check(&stranger, "read", entities::PROJECT, &project).unwrap());
    }

    #[test]
    fn test_missing_resource_is_an_error_not_a_deny() {
        let (guard, _roles, _resources) = guard_with_seeded_catalog();

        let principal = PrincipalId::new();
        let missing = ResourceId::new();

        assert!(guard.check(&principal, "read", entities::PROJECT, &missing).is_err());
    }

    #[test]
    fn test_audit_records_decisions() {
        let (guard, roles, resources) = guard_with_seeded_catalog();
        let audit = DecisionAudit::default();
        let guard = guard.with_audit(audit.clone());

        let viewer = PrincipalId::new();
        let role = roles.role_by_name("viewer").unwrap();
        roles.assign_role(&viewer, &role.id).unwrap();

        let project = ResourceId::new();
        resources.insert(project, ResourceFacts::owned_by(viewer));

        guard.check(&viewer, "read", entities::PROJECT, &project).unwrap();
        guard.check(&viewer, "edit", entities::PROJECT, &project).unwrap();

        let decisions = guard.audit().unwrap().decisions_for(&viewer);
        assert_eq!(decisions.len(), 2);
        assert!(decisions[0].is_allowed());
        assert!(!decisions[1].is_allowed());

        assert_eq!(audit.denied().len(), 1);
    }

    #[test]
    fn test_can_reuses_aggregated_set() {
        let (guard, roles, resources) = guard_with_seeded_catalog();

        let admin = PrincipalId::new();
        let role = roles.role_by_name("admin").unwrap();
        roles.assign_role(&admin, &role.id).unwrap();

        let project = ResourceId::new();
        resources.insert(project, ResourceFacts::owned_by(PrincipalId::new()));

        let permissions = guard.permissions(&admin).unwrap();
        assert_eq!(permissions.len(), 7);

        for action in ["create", "read", "edit", "delete"] {
            assert!(guard
                .can(&permissions, action, entities::PROJECT, &project, &admin)
                .unwrap());
        }
    }
}
