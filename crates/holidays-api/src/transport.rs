// Shared transport configuration and request mechanics.
//
// Both provider clients share timeout and user-agent settings through this
// module, plus the GET-and-decode helper that maps HTTP status and body
// failures into `Error` variants.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;

const USER_AGENT: &str = concat!("holidays/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Client(format!("failed to build HTTP client: {e}")))
    }
}

/// Append path segments to a base URL, percent-encoding each segment.
///
/// `https://host/api/v3` + `["PublicHolidays", "2025", "US"]` becomes
/// `https://host/api/v3/PublicHolidays/2025/US`.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::Client(format!("base URL cannot carry a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send a GET request and decode a JSON body.
///
/// Non-success statuses become `Error::Http`; bodies that don't match `T`
/// become `Error::Deserialization`. Only the URL path is logged so query
/// string credentials never reach the logs.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: Url,
) -> Result<T, Error> {
    let path = url.path().to_owned();
    debug!(%path, "GET");

    let resp = http
        .get(url)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await
        .map_err(Error::Transport)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            path,
        });
    }

    let body = resp.text().await.map_err(Error::Transport)?;
    trace!(%path, bytes = body.len(), "response body received");

    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}
