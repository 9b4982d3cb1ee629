// ── Runtime orchestration configuration ──
//
// These types describe *what* the orchestrator fetches and how hard it
// tries. They never touch disk; `holidays-config` builds one from the
// user's config file and hands it in.

use chrono::{Datelike, Local};

use crate::retry::RetryPolicy;

/// Default country when nothing usable is stored.
pub const DEFAULT_COUNTRY: &str = "US";

/// Configuration for a [`FetchOrchestrator`](crate::FetchOrchestrator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Country selected when the stored preference is missing or stale.
    pub default_country: String,
    /// Fixed year to fetch; `None` follows the local calendar.
    pub year: Option<i32>,
    /// Retry budget for requests to the primary provider, countries and
    /// holidays alike. The secondary holiday provider is asked once.
    pub retry: RetryPolicy,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            default_country: DEFAULT_COUNTRY.into(),
            year: None,
            retry: RetryPolicy::default(),
        }
    }
}

impl OrchestratorConfig {
    /// Year holidays are fetched for.
    pub fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().year())
    }
}
