//! The permission triple.
//!
//! A permission is a grant of an `action` over an `entity` type at a given
//! [`AccessScope`]. Actions and entities are open string identifiers drawn
//! from a conventionally small vocabulary (`create`, `read`, `edit`,
//! `delete` over `project`, `user`, ...); new values require no schema
//! change. The triple is the unit of identity: a catalog never contains two
//! grants with the same (action, entity, scope).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AccessScope;

/// A grant of an action over an entity type at a given access scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// The action this permission allows (`create`, `read`, `edit`, ...).
    pub action: String,

    /// The entity type this permission applies to (`project`, `user`, ...).
    pub entity: String,

    /// The scope at which the permission applies.
    pub access: AccessScope,
}

impl Permission {
    /// Create a permission with an explicit scope.
    pub fn new(action: impl Into<String>, entity: impl Into<String>, access: AccessScope) -> Self {
        Self {
            action: action.into(),
            entity: entity.into(),
            access,
        }
    }

    /// Create a permission scoped to the principal's own resources.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_core::types::{AccessScope, Permission};
    ///
    /// let p = Permission::own("edit", "project");
    /// assert_eq!(p.access, AccessScope::Own);
    /// ```
    pub fn own(action: impl Into<String>, entity: impl Into<String>) -> Self {
        Self::new(action, entity, AccessScope::Own)
    }

    /// Create a permission applying to all resources of the entity type.
    pub fn any(action: impl Into<String>, entity: impl Into<String>) -> Self {
        Self::new(action, entity, AccessScope::Any)
    }

    /// Check whether this permission is for the given action and entity.
    ///
    /// Comparison is exact and case-sensitive; there is no wildcard or
    /// action-hierarchy semantics (`edit` does not imply `read`).
    pub fn applies_to(&self, action: &str, entity: &str) -> bool {
        self.action == action && self.entity == entity
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.action, self.entity, self.access)
    }
}
