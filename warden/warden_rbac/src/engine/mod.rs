//! The authorization engine.
//!
//! Aggregation (store-backed) and decision (pure) are deliberately
//! separate: a permission set is computed once per request and then
//! consulted any number of times without further I/O.

mod aggregator;
mod audit;
mod decision;

pub use aggregator::PermissionAggregator;
pub use audit::DecisionAudit;
pub use decision::{authorize, authorize_with_visibility, decide, decide_with_visibility};
