//! Error types for the Warden authorization system.
//!
//! This module defines the error hierarchy shared by all Warden components.
//! The errors are organized by subsystem, with the root `Error` type able to
//! wrap any of them for uniform handling at the top level.
//!
//! A denied authorization check is deliberately absent from this hierarchy:
//! deny is the normal `false` outcome of the decision engine, never an
//! error. Conflating an unreachable store with a legitimate deny would let
//! an infrastructure outage masquerade as a forbidden response, so store
//! failures always surface here instead.

use crate::id::ResourceId;
use crate::types::Permission;
use thiserror::Error;

/// Root error type for the Warden system.
#[derive(Debug, Error)]
pub enum Error {
    /// Role/permission or resource store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Permission catalog administration errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors surfaced by the storage collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The role/permission store could not be reached.
    ///
    /// Aggregation propagates this unchanged; it is never treated as
    /// "no permissions".
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The resource whose ownership facts were requested does not exist
    #[error("Resource not found: {0}")]
    ResourceNotFound(ResourceId),
}

/// Errors related to permission catalog administration.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A permission with the same (action, entity, access) triple is
    /// already defined
    #[error("Duplicate permission: {0}")]
    DuplicatePermission(Permission),

    /// The referenced permission is not defined in the catalog
    #[error("Permission not defined: {0}")]
    PermissionNotFound(Permission),

    /// A role with the given name already exists
    #[error("Role already exists: {0}")]
    RoleExists(String),

    /// No role with the given name was found
    #[error("Role not found: {0}")]
    RoleNotFound(String),
}

/// Result type used throughout the Warden system.
pub type Result<T> = std::result::Result<T, Error>;
