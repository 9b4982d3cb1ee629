//! Configuration for the holidays CLI.
//!
//! TOML file + `HOLIDAYS_*` environment layering, API key resolution
//! (env + plaintext), translation to `holidays_core::OrchestratorConfig`,
//! and the file-backed preference store.

mod preferences;

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use holidays_api::{CalendarificClient, NagerClient, TransportConfig, calendarific, nager};
use holidays_core::{OrchestratorConfig, RetryPolicy};

pub use preferences::FilePreferenceStore;

/// Env var consulted for the Calendarific key when `api_key_env` is unset
/// or empty.
pub const SECONDARY_API_KEY_ENV: &str = "HOLIDAYS_SECONDARY_API_KEY";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] holidays_api::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Country used when no valid selection is stored.
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Fixed year; unset follows the local calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Override for the preference file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences_file: Option<PathBuf>,

    #[serde(default)]
    pub primary: PrimaryProvider,

    #[serde(default)]
    pub secondary: SecondaryProvider,

    #[serde(default)]
    pub retry: RetrySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_country: default_country(),
            year: None,
            timeout_secs: default_timeout(),
            preferences_file: None,
            primary: PrimaryProvider::default(),
            secondary: SecondaryProvider::default(),
            retry: RetrySettings::default(),
        }
    }
}

/// Nager.Date settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrimaryProvider {
    #[serde(default = "default_primary_url")]
    pub base_url: String,
}

impl Default for PrimaryProvider {
    fn default() -> Self {
        Self {
            base_url: default_primary_url(),
        }
    }
}

/// Calendarific settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SecondaryProvider {
    #[serde(default = "default_secondary_url")]
    pub base_url: String,

    /// API key (plaintext -- prefer an env var).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl Default for SecondaryProvider {
    fn default() -> Self {
        Self {
            base_url: default_secondary_url(),
            api_key: None,
            api_key_env: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetrySettings {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl From<RetrySettings> for RetryPolicy {
    fn from(s: RetrySettings) -> Self {
        RetryPolicy::new(s.max_retries, Duration::from_millis(s.delay_ms))
    }
}

fn default_country() -> String {
    holidays_core::DEFAULT_COUNTRY.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_primary_url() -> String {
    nager::DEFAULT_BASE_URL.into()
}
fn default_secondary_url() -> String {
    calendarific::DEFAULT_BASE_URL.into()
}
fn default_max_retries() -> u32 {
    3
}
fn default_delay_ms() -> u64 {
    2000
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "holidays", "holidays")
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("holidays");
    p
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default location of the persisted country selection.
pub fn default_preferences_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("preferences.json"),
        |dirs| dirs.data_dir().join("preferences.json"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config: defaults, then the TOML file (`path` or the
/// platform default), then `HOLIDAYS_*` env vars (`__` separates nesting).
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("HOLIDAYS_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default(path: Option<&Path>) -> Config {
    load_config(path).unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it. Returns the path written.
pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(path)
}

// ── API key resolution ──────────────────────────────────────────────

/// Resolve the Calendarific key: `api_key_env` variable, then
/// [`SECONDARY_API_KEY_ENV`], then plaintext. `None` leaves the secondary
/// source unusable but is not an error.
pub fn resolve_api_key(secondary: &SecondaryProvider) -> Option<SecretString> {
    // 1. Configured env var name
    if let Some(ref env_name) = secondary.api_key_env {
        if let Some(val) = non_empty_env(env_name) {
            return Some(SecretString::from(val));
        }
    }

    // 2. Well-known env var
    if let Some(val) = non_empty_env(SECONDARY_API_KEY_ENV) {
        return Some(SecretString::from(val));
    }

    // 3. Plaintext in config
    secondary
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| SecretString::from(k.to_owned()))
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Default country, validated and upper-cased.
    pub fn default_country_code(&self) -> Result<String, ConfigError> {
        normalize_country_code(&self.default_country).ok_or_else(|| ConfigError::Validation {
            field: "default_country".into(),
            reason: format!(
                "expected a two-letter ISO 3166-1 code, got '{}'",
                self.default_country
            ),
        })
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Build the orchestrator settings.
    pub fn orchestrator_config(&self) -> Result<OrchestratorConfig, ConfigError> {
        Ok(OrchestratorConfig {
            default_country: self.default_country_code()?,
            year: self.year,
            retry: self.retry.into(),
        })
    }

    /// Build both provider clients.
    pub fn clients(&self) -> Result<(NagerClient, CalendarificClient), ConfigError> {
        let transport = self.transport();
        let primary_url = parse_base_url("primary.base_url", &self.primary.base_url)?;
        let secondary_url = parse_base_url("secondary.base_url", &self.secondary.base_url)?;

        let primary = NagerClient::new(primary_url, &transport)?;
        let secondary = CalendarificClient::new(
            secondary_url,
            resolve_api_key(&self.secondary),
            &transport,
        )?;
        Ok((primary, secondary))
    }

    /// Preference file location, honoring the override.
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_file
            .clone()
            .unwrap_or_else(default_preferences_path)
    }
}

/// Trim and upper-case a two-letter country code; `None` if malformed.
pub fn normalize_country_code(raw: &str) -> Option<String> {
    let code = raw.trim();
    (code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| code.to_ascii_uppercase())
}

fn parse_base_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL: {raw}"),
    })
}
