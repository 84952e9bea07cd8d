//! Permission catalog: conventional vocabulary, default contents, and the
//! JSON snapshot format.
//!
//! The engine itself treats actions and entities as open strings; this
//! module holds the conventional values the project-management domain
//! actually uses, the default role/grant matrix installed by `seed`, and a
//! serde model for saving a whole catalog to disk and loading it back.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;
use warden_core::error::{Error, Result};
use warden_core::id::PrincipalId;
use warden_core::types::{AccessScope, Permission};

use crate::store::{InMemoryRoleStore, RoleStore};

/// Conventional action identifiers.
pub mod actions {
    /// Create a new resource.
    pub const CREATE: &str = "create";
    /// Read a resource.
    pub const READ: &str = "read";
    /// Edit an existing resource.
    pub const EDIT: &str = "edit";
    /// Delete a resource.
    pub const DELETE: &str = "delete";
}

/// Conventional entity identifiers.
pub mod entities {
    /// A project.
    pub const PROJECT: &str = "project";
    /// A user record.
    pub const USER: &str = "user";
}

/// A permission catalog entry, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDef {
    /// The action identifier.
    pub action: String,

    /// The entity identifier.
    pub entity: String,

    /// The access scope.
    pub access: AccessScope,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

impl PermissionDef {
    /// The (action, entity, access) triple of this entry.
    pub fn permission(&self) -> Permission {
        Permission::new(self.action.clone(), self.entity.clone(), self.access)
    }
}

/// A role and its grants, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    /// The unique role name.
    pub name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// The permission triples granted to this role.
    #[serde(default)]
    pub grants: Vec<Permission>,
}

/// A principal's role memberships, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipEntry {
    /// The principal.
    pub principal: PrincipalId,

    /// The names of the roles assigned to the principal.
    pub roles: Vec<String>,
}

/// What a catalog install touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Permissions defined.
    pub permissions: usize,

    /// Roles defined.
    pub roles: usize,

    /// Grants recorded.
    pub grants: usize,

    /// Memberships recorded.
    pub memberships: usize,
}

/// A complete catalog snapshot: permission definitions, roles with their
/// grants, and principal memberships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// The permission catalog.
    #[serde(default)]
    pub permissions: Vec<PermissionDef>,

    /// The roles and their grants.
    #[serde(default)]
    pub roles: Vec<RoleEntry>,

    /// Principal role memberships.
    #[serde(default)]
    pub memberships: Vec<MembershipEntry>,
}

impl CatalogFile {
    /// The default catalog: the admin/editor/viewer roles, the
    /// seven-permission project-management grant matrix, and one fresh
    /// principal per role.
    pub fn defaults() -> Self {
        let permissions = vec![
            def(actions::CREATE, entities::PROJECT, AccessScope::Any, "Create any project"),
            def(actions::READ, entities::PROJECT, AccessScope::Any, "Read any project"),
            def(actions::READ, entities::PROJECT, AccessScope::Own, "Read own project"),
            def(actions::EDIT, entities::PROJECT, AccessScope::Own, "Edit own project"),
            def(actions::DELETE, entities::PROJECT, AccessScope::Any, "Delete any project"),
            def(actions::DELETE, entities::USER, AccessScope::Own, "Delete own user"),
            def(actions::EDIT, entities::PROJECT, AccessScope::Any, "Edit any project"),
        ];

        let roles = vec![
            RoleEntry {
                name: "admin".to_string(),
                description: "Administrator".to_string(),
                grants: permissions.iter().map(PermissionDef::permission).collect(),
            },
            RoleEntry {
                name: "editor".to_string(),
                description: "Can edit content".to_string(),
                grants: vec![
                    Permission::any(actions::CREATE, entities::PROJECT),
                    Permission::any(actions::READ, entities::PROJECT),
                    Permission::own(actions::READ, entities::PROJECT),
                    Permission::own(actions::EDIT, entities::PROJECT),
                ],
            },
            RoleEntry {
                name: "viewer".to_string(),
                description: "Can only view content".to_string(),
                grants: vec![
                    Permission::any(actions::READ, entities::PROJECT),
                    Permission::own(actions::READ, entities::PROJECT),
                    Permission::own(actions::DELETE, entities::USER),
                ],
            },
        ];

        // One known principal per role, so a fresh catalog is usable
        // immediately
        let memberships = roles
            .iter()
            .map(|role| MembershipEntry {
                principal: PrincipalId::new(),
                roles: vec![role.name.clone()],
            })
            .collect();

        Self {
            permissions,
            roles,
            memberships,
        }
    }

    /// Install this catalog into a store.
    ///
    /// Permissions are defined first, then roles and their grants, then
    /// memberships, so every reference resolves against entries installed
    /// earlier in the same pass.
    ///
    /// # Returns
    ///
    /// * `Ok(SeedReport)` - Counts of what was installed.
    /// * `Err` - If an entry conflicts with the store's contents (duplicate
    ///   triple, duplicate role name) or references an undefined role or
    ///   permission.
    pub fn install(&self, store: &InMemoryRoleStore) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        for entry in &self.permissions {
            store.define_permission(entry.permission(), &entry.description)?;
            report.permissions += 1;
        }

        for role in &self.roles {
            let role_id = store.define_role(&role.name, &role.description)?;
            report.roles += 1;

            for permission in &role.grants {
                store.grant(&role_id, permission.clone())?;
                report.grants += 1;
            }
        }

        for membership in &self.memberships {
            for role_name in &membership.roles {
                let role = store.role_by_name(role_name)?;
                store.assign_role(&membership.principal, &role.id)?;
                report.memberships += 1;
            }
        }

        info!(
            permissions = report.permissions,
            roles = report.roles,
            grants = report.grants,
            memberships = report.memberships,
            "installed catalog"
        );

        Ok(report)
    }

    /// Snapshot a store back into the file model.
    pub fn snapshot(store: &InMemoryRoleStore) -> Result<Self> {
        let mut roles = store.list_roles();
        roles.sort_by(|a, b| a.name.cmp(&b.name));

        let names_by_id: HashMap<_, _> = roles.iter().map(|r| (r.id, r.name.clone())).collect();

        let role_entries = roles
            .iter()
            .map(|role| {
                let mut grants = store.permissions_for_role(&role.id)?;
                grants.sort_by_key(|p| p.to_string());

                Ok(RoleEntry {
                    name: role.name.clone(),
                    description: role.description.clone(),
                    grants,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut permissions: Vec<PermissionDef> = store
            .list_catalog()
            .into_iter()
            .map(|(p, description)| PermissionDef {
                action: p.action,
                entity: p.entity,
                access: p.access,
                description,
            })
            .collect();
        permissions.sort_by_key(|p| p.permission().to_string());

        let mut memberships = store
            .list_principals()
            .into_iter()
            .map(|principal| {
                let mut names: Vec<String> = store
                    .roles_of(&principal)?
                    .into_iter()
                    .filter_map(|id| names_by_id.get(&id).cloned())
                    .collect();
                names.sort();

                Ok(MembershipEntry {
                    principal,
                    roles: names,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        memberships.sort_by_key(|m| m.principal.to_string());

        Ok(Self {
            permissions,
            roles: role_entries,
            memberships,
        })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        serde_json::from_str(&contents).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Save this catalog to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))?;

        std::fs::write(path, contents)?;

        Ok(())
    }
}

/// Install the default catalog into a store.
pub fn seed_defaults(store: &InMemoryRoleStore) -> Result<SeedReport> {
    CatalogFile::defaults().install(store)
}

fn def(action: &str, entity: &str, access: AccessScope, description: &str) -> PermissionDef {
    PermissionDef {
        action: action.to_string(),
        entity: entity.to_string(),
        access,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_shape() {
        let catalog = CatalogFile::defaults();

        assert_eq!(catalog.permissions.len(), 7);
        assert_eq!(catalog.roles.len(), 3);
        assert_eq!(catalog.memberships.len(), 3);

        let admin = &catalog.roles[0];
        assert_eq!(admin.name, "admin");
        assert_eq!(admin.grants.len(), 7);

        let editor = &catalog.roles[1];
        assert_eq!(editor.grants.len(), 4);
        assert!(!editor.grants.contains(&Permission::any("edit", "project")));

        let viewer = &catalog.roles[2];
        assert_eq!(viewer.grants.len(), 3);
        assert!(!viewer.grants.contains(&Permission::any("create", "project")));
    }

    #[test]
    fn test_seed_defaults_installs() {
        let store = InMemoryRoleStore::new();
        let report = seed_defaults(&store).unwrap();

        assert_eq!(report.permissions, 7);
        assert_eq!(report.roles, 3);
        assert_eq!(report.grants, 7 + 4 + 3);
        assert_eq!(report.memberships, 3);

        assert!(store.role_by_name("admin").is_ok());
        assert!(store.role_by_name("editor").is_ok());
        assert!(store.role_by_name("viewer").is_ok());
    }

    #[test]
    fn test_install_rejects_membership_with_unknown_role() {
        let catalog = CatalogFile {
            memberships: vec![MembershipEntry {
                principal: PrincipalId::new(),
                roles: vec!["ghost".to_string()],
            }],
            ..Default::default()
        };

        let store = InMemoryRoleStore::new();
        assert!(catalog.install(&store).is_err());
    }

    #[test]
    fn test_install_rejects_grant_without_definition() {
        let catalog = CatalogFile {
            roles: vec![RoleEntry {
                name: "editor".to_string(),
                description: String::new(),
                grants: vec![Permission::own("edit", "project")],
            }],
            ..Default::default()
        };

        let store = InMemoryRoleStore::new();
        assert!(catalog.install(&store).is_err());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let store = InMemoryRoleStore::new();
        let original = CatalogFile::defaults();
        original.install(&store).unwrap();

        let snapshot = CatalogFile::snapshot(&store).unwrap();

        // Same roles and grants survive the round trip
        assert_eq!(snapshot.roles.len(), 3);
        assert_eq!(snapshot.permissions.len(), 7);
        assert_eq!(snapshot.memberships.len(), 3);

        let admin = snapshot.roles.iter().find(|r| r.name == "admin").unwrap();
        assert_eq!(admin.grants.len(), 7);

        // Install the snapshot into a fresh store and compare again
        let fresh = InMemoryRoleStore::new();
        snapshot.install(&fresh).unwrap();
        let again = CatalogFile::snapshot(&fresh).unwrap();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let catalog = CatalogFile::defaults();
        catalog.save(&path).unwrap();

        let loaded = CatalogFile::load(&path).unwrap();
        assert_eq!(catalog, loaded);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            CatalogFile::load(&path),
            Err(Error::Serialization(_))
        ));
    }
}
