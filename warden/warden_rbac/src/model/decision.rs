//! Authorization decision records.
//!
//! The decision functions return a `Decision` describing what was asked and
//! what was concluded. A deny is a fully formed record like any other; only
//! the outcome differs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use warden_core::id::PrincipalId;
use warden_core::types::Permission;

/// A single authorization decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// The principal the check was made for.
    pub principal: PrincipalId,

    /// The requested action.
    pub action: String,

    /// The target entity type.
    pub entity: String,

    /// The outcome of the decision.
    pub outcome: DecisionOutcome,

    /// The permission that satisfied the check, if any.
    ///
    /// `None` for denies and for public-bypass allows.
    pub matched: Option<Permission>,

    /// Whether the allow came from the public-read bypass rather than a
    /// grant.
    pub public_bypass: bool,

    /// When the decision was made.
    pub timestamp: DateTime<Utc>,
}

impl Decision {
    /// Create an allow decision satisfied by the given permission.
    pub fn allowed(
        principal: PrincipalId,
        action: impl Into<String>,
        entity: impl Into<String>,
        matched: Permission,
    ) -> Self {
        Self {
            principal,
            action: action.into(),
            entity: entity.into(),
            outcome: DecisionOutcome::Allow,
            matched: Some(matched),
            public_bypass: false,
            timestamp: Utc::now(),
        }
    }

    /// Create an allow decision produced by the public-read bypass.
    pub fn allowed_public(
        principal: PrincipalId,
        action: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            principal,
            action: action.into(),
            entity: entity.into(),
            outcome: DecisionOutcome::Allow,
            matched: None,
            public_bypass: true,
            timestamp: Utc::now(),
        }
    }

    /// Create a deny decision.
    pub fn denied(
        principal: PrincipalId,
        action: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            principal,
            action: action.into(),
            entity: entity.into(),
            outcome: DecisionOutcome::Deny,
            matched: None,
            public_bypass: false,
            timestamp: Utc::now(),
        }
    }

    /// Check whether the decision allows the operation.
    pub fn is_allowed(&self) -> bool {
        self.outcome == DecisionOutcome::Allow
    }
}

/// The outcome of an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionOutcome {
    /// The operation is allowed.
    Allow,

    /// The operation is denied.
    Deny,
}

impl fmt::Display for DecisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Deny => write!(f, "deny"),
        }
    }
}
