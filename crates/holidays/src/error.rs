//! CLI error types with miette diagnostics.
//!
//! Maps `ConfigError` and fetch outcomes into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use holidays_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Holidays ─────────────────────────────────────────────────────

    #[error("Country list unavailable: {message}")]
    #[diagnostic(
        code(holidays::countries_unavailable),
        help("Check your network connection and run the command again.")
    )]
    CountriesUnavailable { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(holidays::holidays_unavailable),
        help("Try again later or select a different country.")
    )]
    HolidaysUnavailable { message: String },

    #[error("Country '{code}' not found")]
    #[diagnostic(
        code(holidays::unknown_country),
        help("Run: holidays countries to see available countries")
    )]
    UnknownCountry { code: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(holidays::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(
        code(holidays::config),
        help("Check the config file (holidays config path) or run: holidays config init")
    )]
    Config(#[from] ConfigError),

    // ── Internal ─────────────────────────────────────────────────────

    #[error("{0}")]
    #[diagnostic(code(holidays::internal))]
    Internal(String),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(holidays::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(holidays::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CountriesUnavailable { .. } | Self::HolidaysUnavailable { .. } => {
                exit_code::CONNECTION
            }
            Self::UnknownCountry { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Config(ConfigError::Validation { .. }) => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── Task failures ────────────────────────────────────────────────────

impl From<tokio::task::JoinError> for CliError {
    fn from(err: tokio::task::JoinError) -> Self {
        CliError::Internal(format!("background fetch failed: {err}"))
    }
}
