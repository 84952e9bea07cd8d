//! Resource ownership facts.
//!
//! An authorization decision needs to know who owns the target resource and
//! whether it is publicly visible. These facts arrive from the caller (or a
//! resource store implementation) and the engine treats them as ground
//! truth; it does not verify them.

use serde::{Deserialize, Serialize};

use crate::id::PrincipalId;

/// Visibility of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible only through permission grants.
    Private,

    /// Readable by anyone, regardless of grants.
    Public,
}

impl Visibility {
    /// Check whether this is the public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

impl From<bool> for Visibility {
    /// Convert from an `is_public` flag, as a project row records it.
    fn from(is_public: bool) -> Self {
        if is_public {
            Self::Public
        } else {
            Self::Private
        }
    }
}

/// The ownership facts for a single resource instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFacts {
    /// The principal recorded as the resource's owner, if any.
    ///
    /// An ownerless resource can never satisfy an `own`-scoped grant.
    pub owner: Option<PrincipalId>,

    /// The resource's visibility.
    pub visibility: Visibility,
}

impl ResourceFacts {
    /// Facts for a private resource owned by the given principal.
    pub fn owned_by(owner: PrincipalId) -> Self {
        Self {
            owner: Some(owner),
            visibility: Visibility::Private,
        }
    }

    /// Facts for a public resource owned by the given principal.
    pub fn public_owned_by(owner: PrincipalId) -> Self {
        Self {
            owner: Some(owner),
            visibility: Visibility::Public,
        }
    }

    /// Facts for a private resource with no recorded owner.
    pub fn unowned() -> Self {
        Self {
            owner: None,
            visibility: Visibility::Private,
        }
    }

    /// Check whether the given principal is the recorded owner.
    pub fn is_owned_by(&self, principal: &PrincipalId) -> bool {
        self.owner.as_ref() == Some(principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_from_flag() {
        assert_eq!(Visibility::from(true), Visibility::Public);
        assert_eq!(Visibility::from(false), Visibility::Private);
        assert!(Visibility::Public.is_public());
        assert!(!Visibility::Private.is_public());
    }

    #[test]
    fn test_ownership() {
        let owner = PrincipalId::new();
        let other = PrincipalId::new();

        let facts = ResourceFacts::owned_by(owner);
        assert!(facts.is_owned_by(&owner));
        assert!(!facts.is_owned_by(&other));
        assert_eq!(facts.visibility, Visibility::Private);

        let facts = ResourceFacts::unowned();
        assert!(!facts.is_owned_by(&owner));
        assert!(facts.owner.is_none());
    }

    #[test]
    fn test_public_owned() {
        let owner = PrincipalId::new();
        let facts = ResourceFacts::public_owned_by(owner);
        assert!(facts.visibility.is_public());
        assert!(facts.is_owned_by(&owner));
    }
}
