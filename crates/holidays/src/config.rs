//! CLI configuration -- thin wrapper around `holidays_config`.
//!
//! Applies `GlobalOpts` overrides (--config, --country, --year, --timeout)
//! on top of the shared loader and wires the orchestrator to the
//! file-backed preference store.

use std::path::PathBuf;
use std::sync::Arc;

use holidays_api::{CalendarificClient, NagerClient};
use holidays_config::FilePreferenceStore;
use holidays_core::{FetchOrchestrator, PreferenceStore};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use holidays_config::{Config, load_config_or_default, save_config};

pub type Orchestrator = FetchOrchestrator<NagerClient, CalendarificClient>;

// ── CLI-specific helpers ────────────────────────────────────────────

/// Config file in effect: `--config` / `HOLIDAYS_CONFIG`, else the platform
/// default.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(holidays_config::config_path)
}

/// Load config and apply flag overrides. Flags beat env, env beats file.
pub fn resolve(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = holidays_config::load_config(global.config.as_deref())?;

    if let Some(ref country) = global.country {
        cfg.default_country.clone_from(country);
    }
    if let Some(year) = global.year {
        cfg.year = Some(year);
    }
    if let Some(timeout) = global.timeout {
        if timeout == 0 {
            return Err(CliError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        cfg.timeout_secs = timeout;
    }

    Ok(cfg)
}

// ── Session ─────────────────────────────────────────────────────────

/// One orchestrator plus the store it persists through.
pub struct Session {
    pub orchestrator: Orchestrator,
    store: Arc<FilePreferenceStore>,
}

impl Session {
    pub fn open(cfg: &Config) -> Result<Self, CliError> {
        let (primary, secondary) = cfg.clients()?;
        let store = Arc::new(FilePreferenceStore::new(cfg.preferences_path()));
        let shared: Arc<dyn PreferenceStore> = store.clone();

        let orchestrator =
            FetchOrchestrator::new(cfg.orchestrator_config()?, primary, secondary, shared);
        let coordinator = orchestrator.coordinator();
        if !coordinator.secondary().has_api_key() {
            tracing::debug!("no Calendarific API key configured, holiday fallback will fail");
        }
        tracing::debug!(
            primary = %coordinator.primary().base_url(),
            preferences = %store.path().display(),
            year = orchestrator.year(),
            "session opened"
        );

        Ok(Self {
            orchestrator,
            store,
        })
    }

    /// Stored selection without validation, or the default country.
    pub fn stored_country(&self) -> String {
        self.store
            .get(&self.orchestrator.config().default_country)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.orchestrator.shutdown();
    }
}
