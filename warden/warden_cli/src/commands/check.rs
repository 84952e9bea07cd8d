//! Authorization check commands
//!
//! These commands load the catalog into an in-memory store and run the
//! engine the same way a request handler would: aggregate the principal's
//! effective permissions, then decide.

use anyhow::Result;
use std::path::Path;
use warden_core::types::Visibility;
use warden_rbac::catalog::CatalogFile;
use warden_rbac::engine::{decide, decide_with_visibility, PermissionAggregator};
use warden_rbac::store::InMemoryRoleStore;

use super::parse_principal;

/// Implementation of the permissions command.
pub fn execute_permissions(path: &Path, principal: &str) -> Result<()> {
    let principal = parse_principal(principal)?;
    let store = load_store(path)?;
    let aggregator = PermissionAggregator::new(store);

    let by_entity = aggregator.permissions_by_entity(&principal)?;

    if by_entity.is_empty() {
        println!("Principal {} has no permissions", principal);
        return Ok(());
    }

    println!("Effective permissions for {}:", principal);

    let mut entities: Vec<_> = by_entity.keys().cloned().collect();
    entities.sort();

    for entity in entities {
        println!("  {}:", entity);

        let mut permissions = by_entity[&entity].clone();
        permissions.sort_by_key(|p| p.to_string());

        for permission in permissions {
            println!("    {}", permission);
        }
    }

    Ok(())
}

/// Implementation of the check command.
///
/// # Returns
///
/// * `Ok(true)` - The operation is allowed.
/// * `Ok(false)` - The operation is denied.
/// * `Err` - The catalog could not be loaded or an argument is malformed.
pub fn execute_check(
    path: &Path,
    principal: &str,
    action: &str,
    entity: &str,
    owner: Option<&str>,
    public: bool,
) -> Result<bool> {
    let principal = parse_principal(principal)?;
    let owner = owner.map(parse_principal).transpose()?;

    let store = load_store(path)?;
    let permissions = PermissionAggregator::new(store).aggregate(&principal)?;

    // --public is the explicit opt-in for the public-read bypass
    let decision = if public {
        decide_with_visibility(
            &permissions,
            action,
            entity,
            owner.as_ref(),
            &principal,
            Visibility::Public,
        )
    } else {
        decide(&permissions, action, entity, owner.as_ref(), &principal)
    };

    if decision.public_bypass {
        println!("allow (public resource)");
    } else {
        match &decision.matched {
            Some(permission) => println!("allow (granted by {})", permission),
            None => println!("deny"),
        }
    }

    Ok(decision.is_allowed())
}

/// Load the catalog file into a fresh in-memory store.
fn load_store(path: &Path) -> Result<InMemoryRoleStore> {
    tracing::debug!(path = %path.display(), "loading catalog");

    let catalog = CatalogFile::load(path)?;
    let store = InMemoryRoleStore::new();
    catalog.install(&store)?;

    Ok(store)
}
