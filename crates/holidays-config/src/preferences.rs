// ── File-backed preference store ──
//
// A small JSON object on disk; the selected country lives under
// `selected-country`. Unknown keys are preserved on write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use holidays_core::{CoreError, PreferenceStore, SELECTED_COUNTRY_KEY};

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole JSON object, empty if the file does not exist.
    fn read_map(&self) -> Result<Map<String, Value>, CoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(storage_error(&self.path, &e)),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&raw).map_err(|e| storage_error(&self.path, &e))
    }
}

fn storage_error(path: &Path, err: &dyn std::fmt::Display) -> CoreError {
    CoreError::Storage {
        message: format!("{}: {err}", path.display()),
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<String>, CoreError> {
        let map = self.read_map()?;
        Ok(map
            .get(SELECTED_COUNTRY_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned))
    }

    fn save(&self, value: &str) -> Result<(), CoreError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(SELECTED_COUNTRY_KEY.into(), Value::String(value.to_owned()));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| storage_error(&self.path, &e))?;
        }
        let body = serde_json::to_string_pretty(&map).map_err(|e| storage_error(&self.path, &e))?;
        std::fs::write(&self.path, body).map_err(|e| storage_error(&self.path, &e))?;

        debug!(path = %self.path.display(), value, "preference saved");
        Ok(())
    }
}
