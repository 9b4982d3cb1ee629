// ── Preference storage ──
//
// A single persisted string: the selected country code. Implementations
// report failures through `load`/`save`; callers go through `get`/`set`,
// which log and swallow them.

use std::sync::Mutex;

use tracing::warn;

use crate::error::CoreError;

/// Key under which the selected country code is stored.
pub const SELECTED_COUNTRY_KEY: &str = "selected-country";

/// Get/set access to the persisted country selection.
pub trait PreferenceStore: Send + Sync {
    /// Last saved value, `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<String>, CoreError>;

    fn save(&self, value: &str) -> Result<(), CoreError>;

    /// Last saved value, or `fallback` when the store is empty or
    /// unreadable. Never fails.
    fn get(&self, fallback: &str) -> String {
        match self.load() {
            Ok(Some(value)) if !value.trim().is_empty() => value,
            Ok(_) => fallback.to_owned(),
            Err(e) => {
                warn!(error = %e, key = SELECTED_COUNTRY_KEY, "preference read failed, using fallback");
                fallback.to_owned()
            }
        }
    }

    /// Best-effort save. Failures are logged only.
    fn set(&self, value: &str) {
        if let Err(e) = self.save(value) {
            warn!(error = %e, key = SELECTED_COUNTRY_KEY, value, "preference write failed");
        }
    }
}

// ── In-memory store ─────────────────────────────────────────────────

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
    writes: Mutex<u32>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
            writes: Mutex::new(0),
        }
    }

    /// Current value without fallback handling.
    pub fn current(&self) -> Option<String> {
        self.value
            .lock()
            .map(|v| v.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Number of successful saves.
    pub fn write_count(&self) -> u32 {
        self.writes
            .lock()
            .map(|n| *n)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<String>, CoreError> {
        self.value
            .lock()
            .map(|v| v.clone())
            .map_err(|e| CoreError::Storage {
                message: e.to_string(),
            })
    }

    fn save(&self, value: &str) -> Result<(), CoreError> {
        let mut slot = self.value.lock().map_err(|e| CoreError::Storage {
            message: e.to_string(),
        })?;
        *slot = Some(value.to_owned());
        drop(slot);

        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }
}
