//! Access scope qualifier.
//!
//! The storage layer records the `access` column as free text; this module
//! is the boundary where that text becomes a closed sum type. Only two
//! values have ever existed, so the engine matches on an enum instead of
//! re-comparing strings on every check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The scope at which a permission applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessScope {
    /// The permission applies only when the requesting principal owns the
    /// resource.
    Own,

    /// The permission applies regardless of ownership.
    Any,
}

impl AccessScope {
    /// Get the storage representation of this scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for AccessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessScope {
    type Err = ParseAccessScopeError;

    /// Parse a scope from its storage representation.
    ///
    /// The match is exact and case-sensitive: the catalog only ever stores
    /// the lowercase values, and anything else is a data error worth
    /// surfacing at the boundary rather than defaulting silently.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "own" => Ok(Self::Own),
            "any" => Ok(Self::Any),
            other => Err(ParseAccessScopeError(other.to_string())),
        }
    }
}

/// Error returned when parsing an unknown access scope value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAccessScopeError(String);

impl fmt::Display for ParseAccessScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown access scope '{}'", self.0)
    }
}

impl std::error::Error for ParseAccessScopeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_str() {
        assert_eq!("own".parse::<AccessScope>().unwrap(), AccessScope::Own);
        assert_eq!("any".parse::<AccessScope>().unwrap(), AccessScope::Any);

        // Exact match only
        assert!("OWN".parse::<AccessScope>().is_err());
        assert!("Any".parse::<AccessScope>().is_err());
        assert!("all".parse::<AccessScope>().is_err());
        assert!("".parse::<AccessScope>().is_err());
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(AccessScope::Own.to_string(), "own");
        assert_eq!(AccessScope::Any.to_string(), "any");
    }

    #[test]
    fn test_scope_serde() {
        assert_eq!(serde_json::to_string(&AccessScope::Own).unwrap(), "\"own\"");
        assert_eq!(serde_json::to_string(&AccessScope::Any).unwrap(), "\"any\"");

        let scope: AccessScope = serde_json::from_str("\"any\"").unwrap();
        assert_eq!(scope, AccessScope::Any);
        assert!(serde_json::from_str::<AccessScope>("\"every\"").is_err());
    }

    #[test]
    fn test_parse_error_display() {
        let err = "all".parse::<AccessScope>().unwrap_err();
        assert_eq!(err.to_string(), "unknown access scope 'all'");
    }
}
