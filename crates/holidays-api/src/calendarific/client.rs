// Calendarific HTTP client
//
// Key-based REST endpoint used as the secondary holiday source. Strips the
// `{ meta, response }` envelope before the caller sees the data.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::calendarific::models::{
    CalendarificEnvelope, CalendarificHoliday, CalendarificResponse,
};
use crate::error::Error;
use crate::transport::{TransportConfig, get_json, join_segments};

/// Public Calendarific endpoint.
pub const DEFAULT_BASE_URL: &str = "https://calendarific.com/api/v2";

const PROVIDER: &str = "Calendarific";

/// Raw HTTP client for the Calendarific holiday API.
#[derive(Debug, Clone)]
pub struct CalendarificClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl CalendarificClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// A missing `api_key` is not an error here: every request fails with
    /// [`Error::MissingApiKey`] instead, so callers can still treat the
    /// client as an (always failing) fallback.
    pub fn new(
        base_url: Url,
        api_key: Option<SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, api_key: Option<SecretString>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `GET /holidays?api_key=..&country=..&year=..`
    pub async fn holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<CalendarificHoliday>, Error> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(Error::MissingApiKey { provider: PROVIDER })?;

        let mut url = join_segments(&self.base_url, &["holidays"])?;
        url.query_pairs_mut()
            .append_pair("api_key", api_key.expose_secret())
            .append_pair("country", country_code)
            .append_pair("year", &year.to_string());

        let envelope: CalendarificEnvelope = get_json(&self.http, url).await?;

        if envelope.meta.code != 200 {
            let message = envelope
                .meta
                .error_detail
                .or(envelope.meta.error_type)
                .unwrap_or_else(|| "request rejected".into());
            return Err(Error::Provider {
                code: envelope.meta.code,
                message,
            });
        }

        let response: CalendarificResponse =
            serde_json::from_value(envelope.response.clone()).map_err(|e| {
                Error::Deserialization {
                    message: e.to_string(),
                    body: envelope.response.to_string(),
                }
            })?;

        debug!(
            country_code,
            year,
            count = response.holidays.len(),
            "fetched holidays from secondary provider"
        );
        Ok(response.holidays)
    }
}
