//! Data structures shared across the Warden system.
//!
//! This module defines the permission vocabulary (scope, triple) and the
//! resource facts supplied to authorization decisions.

mod permission;
mod resource;
mod scope;

pub use permission::Permission;
pub use resource::{ResourceFacts, Visibility};
pub use scope::{AccessScope, ParseAccessScopeError};
