// ── Selection reconciliation ──
//
// Decides which country is active after a country list loads, and owns the
// only write path to the persisted preference.

use std::sync::Arc;

use strum::Display;
use tracing::{debug, warn};

use crate::model::Country;
use crate::model::country;
use crate::preference::PreferenceStore;

/// Which rule picked the effective selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ReconcileRule {
    /// The stored code is still offered.
    Stored,
    /// The stored code is gone; the configured default is offered.
    Default,
    /// Neither is offered; the first listed country was taken.
    FirstAvailable,
    /// The list is empty; the stored code is kept as-is.
    Pending,
}

/// Outcome of [`resolve_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub code: String,
    pub rule: ReconcileRule,
}

/// Pick the effective selection for `fresh`. First match wins:
/// stored, default, first entry in list order, stored unchanged.
pub fn resolve_selection(fresh: &[Country], stored: &str, default: &str) -> Resolution {
    let (code, rule) = if country::contains(fresh, stored) {
        (stored, ReconcileRule::Stored)
    } else if country::contains(fresh, default) {
        (default, ReconcileRule::Default)
    } else if let Some(first) = fresh.first() {
        (first.iso_code.as_str(), ReconcileRule::FirstAvailable)
    } else {
        (stored, ReconcileRule::Pending)
    };

    Resolution {
        code: code.to_owned(),
        rule,
    }
}

// ── SelectionReconciler ─────────────────────────────────────────────

/// Applies [`resolve_selection`] and owns every write of the preference.
#[derive(Clone)]
pub struct SelectionReconciler {
    store: Arc<dyn PreferenceStore>,
    default_code: String,
}

impl SelectionReconciler {
    pub fn new(store: Arc<dyn PreferenceStore>, default_code: impl Into<String>) -> Self {
        Self {
            store,
            default_code: default_code.into(),
        }
    }

    /// Persisted selection, or the default when nothing usable is stored.
    pub fn stored_code(&self) -> String {
        self.store.get(&self.default_code)
    }

    /// Effective selection for `fresh`, given the code the caller treats
    /// as stored. Pure apart from logging; pair with [`commit`](Self::commit)
    /// once the result is accepted.
    pub fn reconcile(&self, fresh: &[Country], stored: &str) -> Resolution {
        let resolution = resolve_selection(fresh, stored, &self.default_code);

        match resolution.rule {
            ReconcileRule::FirstAvailable => warn!(
                stored,
                default = %self.default_code,
                selected = %resolution.code,
                "neither stored nor default country offered, selecting first available"
            ),
            ReconcileRule::Pending => {
                debug!(stored, "country list empty, selection pending");
            }
            ReconcileRule::Stored | ReconcileRule::Default => {
                debug!(stored, selected = %resolution.code, rule = %resolution.rule, "selection reconciled");
            }
        }

        resolution
    }

    /// Persist `effective` if it differs from what the store holds. Returns
    /// whether a write was issued.
    pub fn commit(&self, effective: &str) -> bool {
        if self.stored_code() == effective {
            return false;
        }
        self.store.set(effective);
        true
    }
}
