//! CLI command implementations.

pub mod catalog;
pub mod check;

use anyhow::Context;
use std::str::FromStr;
use warden_core::id::PrincipalId;

/// Parse a principal ID argument.
pub(crate) fn parse_principal(s: &str) -> anyhow::Result<PrincipalId> {
    PrincipalId::from_str(s).with_context(|| format!("invalid principal id '{}'", s))
}
