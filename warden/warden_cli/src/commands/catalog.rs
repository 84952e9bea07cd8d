//! Catalog management commands
//!
//! These commands operate directly on the JSON catalog file: seeding the
//! default contents, emptying it, printing it, and editing memberships.

use anyhow::{bail, Result};
use std::path::Path;
use warden_rbac::catalog::{CatalogFile, MembershipEntry};

use super::parse_principal;

/// Implementation of the seed command.
pub fn execute_seed(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "catalog file '{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    let catalog = CatalogFile::defaults();
    catalog.save(path)?;

    println!("Seeded default catalog at {}", path.display());
    println!(
        "  {} permissions, {} roles",
        catalog.permissions.len(),
        catalog.roles.len()
    );
    for membership in &catalog.memberships {
        println!("  principal {} -> {}", membership.principal, membership.roles.join(", "));
    }

    Ok(())
}

/// Implementation of the reset command.
pub fn execute_reset(path: &Path) -> Result<()> {
    CatalogFile::default().save(path)?;

    println!("Catalog reset: {}", path.display());

    Ok(())
}

/// Implementation of the show command.
pub fn execute_show(path: &Path) -> Result<()> {
    let catalog = CatalogFile::load(path)?;

    println!("Permissions ({}):", catalog.permissions.len());
    for entry in &catalog.permissions {
        if entry.description.is_empty() {
            println!("  {}", entry.permission());
        } else {
            println!("  {} - {}", entry.permission(), entry.description);
        }
    }

    println!("Roles ({}):", catalog.roles.len());
    for role in &catalog.roles {
        println!("  {} - {}", role.name, role.description);
        for grant in &role.grants {
            println!("    {}", grant);
        }
    }

    println!("Memberships ({}):", catalog.memberships.len());
    for membership in &catalog.memberships {
        println!("  {} -> {}", membership.principal, membership.roles.join(", "));
    }

    Ok(())
}

/// Implementation of the assign command.
pub fn execute_assign(path: &Path, principal: &str, role: &str) -> Result<()> {
    let principal = parse_principal(principal)?;
    let mut catalog = CatalogFile::load(path)?;

    if !catalog.roles.iter().any(|r| r.name == role) {
        let known: Vec<&str> = catalog.roles.iter().map(|r| r.name.as_str()).collect();
        bail!("unknown role '{}' (catalog has: {})", role, known.join(", "));
    }

    match catalog
        .memberships
        .iter_mut()
        .find(|m| m.principal == principal)
    {
        Some(membership) => {
            if !membership.roles.iter().any(|r| r == role) {
                membership.roles.push(role.to_string());
            }
        }
        None => catalog.memberships.push(MembershipEntry {
            principal,
            roles: vec![role.to_string()],
        }),
    }

    catalog.save(path)?;

    println!("Assigned role '{}' to principal {}", role, principal);

    Ok(())
}
