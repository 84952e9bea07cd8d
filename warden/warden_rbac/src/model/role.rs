//! Role model.
//!
//! A role is a named, administrator-managed bundle of permissions. Grants
//! and principal memberships are the store's concern; this type carries the
//! role's identity and descriptive metadata only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use warden_core::id::RoleId;

/// A named bundle of permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// The unique ID of this role.
    pub id: RoleId,

    /// The unique name of this role.
    pub name: String,

    /// The description of this role.
    pub description: String,

    /// When this role was created.
    pub created_at: DateTime<Utc>,

    /// When this role was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Create a new role.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique ID of this role.
    /// * `name` - The unique name of this role.
    ///
    /// # Returns
    ///
    /// A new role with an empty description.
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description for this role.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self.updated_at = Utc::now();
        self
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Role '{}'", self.name)
    }
}
