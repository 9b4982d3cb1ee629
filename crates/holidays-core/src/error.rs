// ── Core error types ──
//
// The fetch layer's taxonomy: Network, Decode, Aggregate, Storage. The
// `From<holidays_api::Error>` impl folds provider-level failures into the
// first two; the other variants originate in this crate.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    // ── Source errors ────────────────────────────────────────────────
    /// Transport failure or non-success status from a provider.
    #[error("{message}")]
    Network {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    /// Provider response could not be decoded into the expected shape.
    #[error("Invalid response: {message}")]
    Decode { message: String },

    /// Every fallback path for a request failed.
    #[error("Both primary and fallback API calls failed: {secondary} and {primary}")]
    Aggregate { primary: String, secondary: String },

    // ── Persistence ─────────────────────────────────────────────────
    /// Preference read/write failure. Logged, never surfaced to users.
    #[error("Preference storage error: {message}")]
    Storage { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// HTTP status carried by a network error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<holidays_api::Error> for CoreError {
    fn from(err: holidays_api::Error) -> Self {
        if err.is_decode() {
            return match err {
                holidays_api::Error::Deserialization { message, body: _ } => {
                    CoreError::Decode { message }
                }
                other => CoreError::Decode {
                    message: other.to_string(),
                },
            };
        }

        match err {
            holidays_api::Error::Transport(_)
            | holidays_api::Error::Http { .. }
            | holidays_api::Error::Provider { .. } => CoreError::Network {
                message: err.to_string(),
                status: err.status(),
            },
            holidays_api::Error::InvalidUrl(_)
            | holidays_api::Error::Client(_)
            | holidays_api::Error::MissingApiKey { .. } => CoreError::Config {
                message: err.to_string(),
            },
            holidays_api::Error::Deserialization { message, body: _ } => {
                CoreError::Decode { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_become_network_with_status() {
        let err = CoreError::from(holidays_api::Error::Http {
            status: 503,
            path: "/AvailableCountries".into(),
        });

        assert!(matches!(err, CoreError::Network { .. }));
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn provider_errors_carry_their_code() {
        let err = CoreError::from(holidays_api::Error::Provider {
            code: 401,
            message: "Unauthorized".into(),
        });
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn decode_errors_have_no_status() {
        let err = CoreError::from(holidays_api::Error::Deserialization {
            message: "missing field `response`".into(),
            body: "{}".into(),
        });

        assert!(matches!(err, CoreError::Decode { .. }));
        assert_eq!(err.status(), None);
    }
}
