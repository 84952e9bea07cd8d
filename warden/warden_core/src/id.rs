//! Strongly-typed identifiers for the Warden authorization system.
//!
//! This module provides the identifier types used throughout the system,
//! ensuring type safety and clear semantics. Each identifier type is a thin
//! wrapper around a UUID with a phantom type parameter so that, for example,
//! a role identifier can never be passed where a principal identifier is
//! expected.
//!
//! # Examples
//!
//! ```
//! use warden_core::id::{PrincipalId, RoleId};
//! use std::str::FromStr;
//!
//! // Create new random IDs
//! let principal_id = PrincipalId::new();
//! let role_id = RoleId::new();
//!
//! // Create from string
//! let id_str = "550e8400-e29b-41d4-a716-446655440000";
//! let principal_id = PrincipalId::from_str(id_str).unwrap();
//! assert_eq!(principal_id.to_string(), id_str);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::{Ord, PartialOrd};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A type-safe identifier based on UUID.
///
/// This is a generic identifier type that is specialized for different
/// entity types using the phantom type parameter `T`. Identifiers for
/// different entity types cannot be mixed up, even though they share the
/// same underlying UUID structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Id<T> {
    uuid: Uuid,
    #[serde(skip)]
    _marker: std::marker::PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random identifier.
    ///
    /// This generates a new random UUID v4 and wraps it in the appropriate
    /// identifier type.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_core::id::PrincipalId;
    ///
    /// let id = PrincipalId::new();
    /// ```
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Create an identifier from a specific UUID.
    ///
    /// This is useful when you need to create an identifier with a known
    /// UUID, such as when deserializing from a database row or a catalog
    /// file.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_core::id::PrincipalId;
    /// use uuid::Uuid;
    ///
    /// let uuid = Uuid::new_v4();
    /// let id = PrincipalId::from_uuid(uuid);
    /// assert_eq!(id.uuid(), uuid);
    /// ```
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the underlying UUID.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Create a nil (all zeros) identifier.
    ///
    /// This can be useful as a sentinel value or default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_core::id::PrincipalId;
    ///
    /// let nil_id = PrincipalId::nil();
    /// assert_eq!(nil_id.to_string(), "00000000-0000-0000-0000-000000000000");
    /// ```
    pub fn nil() -> Self {
        Self {
            uuid: Uuid::nil(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Check if this is a nil identifier.
    pub fn is_nil(&self) -> bool {
        self.uuid == Uuid::nil()
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            uuid: Uuid::parse_str(s)?,
            _marker: std::marker::PhantomData,
        })
    }
}

/// Marker type for principals (authenticated users).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrincipalMarker;
/// Identifier for a principal.
pub type PrincipalId = Id<PrincipalMarker>;

/// Marker type for roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleMarker;
/// Identifier for a role.
pub type RoleId = Id<RoleMarker>;

/// Marker type for catalog permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionMarker;
/// Identifier for a catalog permission.
pub type PermissionId = Id<PermissionMarker>;

/// Marker type for resources (projects, user records, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceMarker;
/// Identifier for a resource instance.
pub type ResourceId = Id<ResourceMarker>;
