//! The access decision predicate.
//!
//! Everything here is pure and total: no I/O, no shared state, no error
//! path. Deny is the ordinary `false`/[`DecisionOutcome::Deny`] outcome,
//! so the functions can be called speculatively or in batch without
//! consequence. Callers that need an error-vs-deny distinction get
//! it for free: only the store reads that happen *before* these functions
//! can fail.
//!
//! The rule, in order:
//!
//! 1. Visibility-aware variant only: a `Public` resource allows the exact
//!    `read` action immediately, with no grant consulted.
//! 2. Otherwise, allow iff some permission in the set names the same
//!    action and entity and either carries the `any` scope or carries the
//!    `own` scope while the principal is the resource's recorded owner.
//! 3. No such permission: deny.
//!
//! `any` and `own` are not ranked against each other; this is an existence
//! check, not a best-match search.

use warden_core::id::PrincipalId;
use warden_core::types::{AccessScope, Visibility};

use crate::catalog::actions;
use crate::model::{Decision, DecisionOutcome, PermissionSet};

/// Decide whether an operation is authorized.
///
/// # Arguments
///
/// * `permissions` - The principal's effective permission set.
/// * `action` - The requested action. Compared case-sensitively.
/// * `entity` - The target entity type. Compared case-sensitively.
/// * `resource_owner` - The resource's recorded owner, if any. `None`
///   denies every `own`-scoped grant.
/// * `principal` - The principal performing the action.
///
/// # Returns
///
/// A [`Decision`] recording the outcome and, for grant-backed allows, the
/// permission that satisfied the check.
pub fn decide(
    permissions: &PermissionSet,
    action: &str,
    entity: &str,
    resource_owner: Option<&PrincipalId>,
    principal: &PrincipalId,
) -> Decision {
    let matched = permissions.matching(action, entity).find(|p| match p.access {
        AccessScope::Any => true,
        AccessScope::Own => resource_owner == Some(principal),
    });

    match matched {
        Some(permission) => Decision::allowed(*principal, action, entity, permission.clone()),
        None => Decision::denied(*principal, action, entity),
    }
}

/// Decide whether an operation is authorized, honoring public visibility.
///
/// Identical to [`decide`], except that a [`Visibility::Public`] resource
/// allows the exact `read` action immediately, bypassing the permission
/// set entirely. The bypass is opt-in at the call site: callers that do
/// not want publicly readable resources use [`decide`] instead.
pub fn decide_with_visibility(
    permissions: &PermissionSet,
    action: &str,
    entity: &str,
    resource_owner: Option<&PrincipalId>,
    principal: &PrincipalId,
    visibility: Visibility,
) -> Decision {
    if visibility.is_public() && action == actions::READ {
        return Decision::allowed_public(*principal, action, entity);
    }

    decide(permissions, action, entity, resource_owner, principal)
}

/// Check whether an operation is authorized.
///
/// The boolean form of [`decide`]; `false` is a deny, never a failure.
pub fn authorize(
    permissions: &PermissionSet,
    action: &str,
    entity: &str,
    resource_owner: Option<&PrincipalId>,
    principal: &PrincipalId,
) -> bool {
    decide(permissions, action, entity, resource_owner, principal).outcome
        == DecisionOutcome::Allow
}

/// Check whether an operation is authorized, honoring public visibility.
pub fn authorize_with_visibility(
    permissions: &PermissionSet,
    action: &str,
    entity: &str,
    resource_owner: Option<&PrincipalId>,
    principal: &PrincipalId,
    visibility: Visibility,
) -> bool {
    decide_with_visibility(
        permissions,
        action,
        entity,
        resource_owner,
        principal,
        visibility,
    )
    .is_allowed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::types::Permission;

    fn set(permissions: impl IntoIterator<Item = Permission>) -> PermissionSet {
        permissions.into_iter().collect()
    }

    #[test]
    fn test_any_scope_ignores_ownership() {
        let permissions = set([Permission::any("read", "project")]);
        let principal = PrincipalId::new();
        let other = PrincipalId::new();

        assert!(authorize(&permissions, "read", "project", Some(&other), &principal));
        assert!(authorize(&permissions, "read", "project", Some(&principal), &principal));
        assert!(authorize(&permissions, "read", "project", None, &principal));
    }

    #[test]
    fn test_own_scope_requires_ownership() {
        let permissions = set([Permission::own("edit", "project")]);
        let principal = PrincipalId::new();
        let other = PrincipalId::new();

        assert!(authorize(&permissions, "edit", "project", Some(&principal), &principal));
        assert!(!authorize(&permissions, "edit", "project", Some(&other), &principal));
    }

    #[test]
    fn test_own_scope_denies_ownerless_resource() {
        let permissions = set([Permission::own("edit", "project")]);
        let principal = PrincipalId::new();

        assert!(!authorize(&permissions, "edit", "project", None, &principal));
    }

    #[test]
    fn test_empty_set_denies_everything() {
        let permissions = PermissionSet::new();
        let principal = PrincipalId::new();

        assert!(!authorize(&permissions, "delete", "project", Some(&principal), &principal));
        assert!(!authorize(&permissions, "read", "project", None, &principal));
    }

    #[test]
    fn test_no_matching_action_or_entity_denies() {
        let permissions = set([Permission::any("read", "project")]);
        let principal = PrincipalId::new();

        assert!(!authorize(&permissions, "edit", "project", Some(&principal), &principal));
        assert!(!authorize(&permissions, "read", "user", Some(&principal), &principal));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let permissions = set([Permission::any("read", "project")]);
        let principal = PrincipalId::new();

        assert!(!authorize(&permissions, "Read", "project", None, &principal));
        assert!(!authorize(&permissions, "read", "Project", None, &principal));
    }

    #[test]
    fn test_either_scope_suffices() {
        // Holding both scopes: any one satisfying grant is enough
        let permissions = set([
            Permission::own("edit", "project"),
            Permission::any("edit", "project"),
        ]);
        let principal = PrincipalId::new();
        let other = PrincipalId::new();

        assert!(authorize(&permissions, "edit", "project", Some(&other), &principal));
        assert!(authorize(&permissions, "edit", "project", Some(&principal), &principal));
    }

    #[test]
    fn test_public_bypass_allows_read_with_empty_set() {
        let permissions = PermissionSet::new();
        let principal = PrincipalId::new();
        let owner = PrincipalId::new();

        assert!(authorize_with_visibility(
            &permissions,
            "read",
            "project",
            Some(&owner),
            &principal,
            Visibility::Public,
        ));
    }

    #[test]
    fn test_public_bypass_is_read_only() {
        let permissions = PermissionSet::new();
        let principal = PrincipalId::new();

        // Public visibility does not bypass non-read actions
        assert!(!authorize_with_visibility(
            &permissions,
            "edit",
            "project",
            None,
            &principal,
            Visibility::Public,
        ));
        assert!(!authorize_with_visibility(
            &permissions,
            "delete",
            "project",
            None,
            &principal,
            Visibility::Public,
        ));
    }

    #[test]
    fn test_private_visibility_falls_through_to_grants() {
        let principal = PrincipalId::new();
        let owner = PrincipalId::new();

        let empty = PermissionSet::new();
        assert!(!authorize_with_visibility(
            &empty,
            "read",
            "project",
            Some(&owner),
            &principal,
            Visibility::Private,
        ));

        let readers = set([Permission::any("read", "project")]);
        assert!(authorize_with_visibility(
            &readers,
            "read",
            "project",
            Some(&owner),
            &principal,
            Visibility::Private,
        ));
    }

    #[test]
    fn test_plain_variant_never_bypasses() {
        // The bypass is an explicit opt-in through the visibility-aware
        // variant; authorize() applies grant semantics even for resources
        // the caller knows to be public.
        let permissions = PermissionSet::new();
        let principal = PrincipalId::new();

        assert!(!authorize(&permissions, "read", "project", None, &principal));
    }

    #[test]
    fn test_decision_records_matched_permission() {
        let permissions = set([Permission::own("edit", "project")]);
        let principal = PrincipalId::new();

        let decision = decide(&permissions, "edit", "project", Some(&principal), &principal);
        assert!(decision.is_allowed());
        assert_eq!(decision.matched, Some(Permission::own("edit", "project")));
        assert!(!decision.public_bypass);

        let decision = decide_with_visibility(
            &permissions,
            "read",
            "project",
            None,
            &principal,
            Visibility::Public,
        );
        assert!(decision.is_allowed());
        assert!(decision.public_bypass);
        assert!(decision.matched.is_none());
    }
}
