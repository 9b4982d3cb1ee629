use thiserror::Error;

/// Top-level error type for the `holidays-api` crate.
///
/// Covers every failure mode across both providers: transport, HTTP status,
/// body decoding, and provider-level rejections. `holidays-core` folds these
/// into its Network / Decode taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP error! status: {status} ({path})")]
    Http { status: u16, path: String },

    /// Failed to build the underlying HTTP client.
    #[error("HTTP client error: {0}")]
    Client(String),

    // ── Provider ────────────────────────────────────────────────────
    /// The provider reported an error inside an otherwise readable body
    /// (Calendarific's `{meta: {code, error_detail}}` envelope).
    #[error("Provider error (code {code}): {message}")]
    Provider { code: u16, message: String },

    /// A key-based provider was called without an API key configured.
    #[error("No API key configured for {provider}")]
    MissingApiKey { provider: &'static str },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the response body could not be decoded into the
    /// expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Deserialization { .. })
            || matches!(self, Self::Transport(e) if e.is_decode())
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Provider { code, .. } => Some(*code),
            _ => None,
        }
    }
}
