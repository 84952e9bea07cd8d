//! Decision auditing.
//!
//! This module records authorization decisions for inspection: which
//! principal asked for what, and why it was allowed or denied.

use dashmap::DashMap;
use std::sync::Arc;
use warden_core::id::PrincipalId;

use crate::model::{Decision, DecisionOutcome};

/// A bounded record of authorization decisions.
///
/// Entries are kept per principal, oldest dropped first once the bound is
/// reached.
#[derive(Clone)]
pub struct DecisionAudit {
    /// The audit entries.
    entries: Arc<DashMap<PrincipalId, Vec<Decision>>>,

    /// The maximum number of entries to keep per principal.
    max_entries_per_principal: usize,
}

impl DecisionAudit {
    /// Create a new decision audit.
    ///
    /// # Arguments
    ///
    /// * `max_entries_per_principal` - The maximum number of entries to
    ///   keep per principal.
    pub fn new(max_entries_per_principal: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            max_entries_per_principal,
        }
    }

    /// Record a decision.
    pub fn record(&self, decision: Decision) {
        let principal = decision.principal;

        // Add the decision to the principal's entries
        let mut entries = self.entries.entry(principal).or_default();
        entries.push(decision);

        // Trim the oldest entries if necessary
        if entries.len() > self.max_entries_per_principal {
            let to_remove = entries.len() - self.max_entries_per_principal;
            entries.drain(0..to_remove);
        }
    }

    /// Get the recorded decisions for a principal, oldest first.
    pub fn decisions_for(&self, principal: &PrincipalId) -> Vec<Decision> {
        match self.entries.get(principal) {
            Some(entries) => entries.clone(),
            None => Vec::new(),
        }
    }

    /// Get all recorded decisions.
    pub fn all_decisions(&self) -> Vec<Decision> {
        let mut decisions = Vec::new();

        for entry in self.entries.iter() {
            decisions.extend(entry.value().clone());
        }

        decisions
    }

    /// Get all recorded denies.
    pub fn denied(&self) -> Vec<Decision> {
        let mut decisions = Vec::new();

        for entry in self.entries.iter() {
            for decision in entry.value() {
                if decision.outcome == DecisionOutcome::Deny {
                    decisions.push(decision.clone());
                }
            }
        }

        decisions
    }

    /// Clear the recorded decisions for a principal.
    pub fn clear(&self, principal: &PrincipalId) {
        self.entries.remove(principal);
    }
}

impl Default for DecisionAudit {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::types::Permission;

    #[test]
    fn test_record_and_get_decisions() {
        let audit = DecisionAudit::new(10);
        let principal = PrincipalId::new();

        let decision = Decision::allowed(
            principal,
            "read",
            "project",
            Permission::any("read", "project"),
        );
        audit.record(decision);

        let decisions = audit.decisions_for(&principal);
        assert_eq!(decisions.len(), 1);
        assert!(decisions[0].is_allowed());

        // Unseen principals have no history
        assert!(audit.decisions_for(&PrincipalId::new()).is_empty());
    }

    #[test]
    fn test_max_entries_per_principal() {
        let audit = DecisionAudit::new(2);
        let principal = PrincipalId::new();

        for action in ["create", "read", "edit"] {
            audit.record(Decision::denied(principal, action, "project"));
        }

        let decisions = audit.decisions_for(&principal);

        // The oldest entry was dropped
        assert_eq!(decisions.len(), 2);
        assert_eq!(decisions[0].action, "read");
        assert_eq!(decisions[1].action, "edit");
    }

    #[test]
    fn test_denied_filter() {
        let audit = DecisionAudit::new(10);
        let principal = PrincipalId::new();

        audit.record(Decision::allowed(
            principal,
            "read",
            "project",
            Permission::any("read", "project"),
        ));
        audit.record(Decision::denied(principal, "delete", "project"));

        let denied = audit.denied();
        assert_eq!(denied.len(), 1);
        assert_eq!(denied[0].action, "delete");

        assert_eq!(audit.all_decisions().len(), 2);
    }

    #[test]
    fn test_clear() {
        let audit = DecisionAudit::new(10);
        let principal = PrincipalId::new();

        audit.record(Decision::denied(principal, "edit", "project"));
        audit.clear(&principal);

        assert!(audit.decisions_for(&principal).is_empty());
    }
}
