// Nager.Date HTTP client
//
// Wraps `reqwest::Client` with Nager-specific URL construction. Status and
// body handling live in `transport::get_json`.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::nager::models::{NagerCountry, NagerHoliday};
use crate::transport::{TransportConfig, get_json, join_segments};

/// Public Nager.Date endpoint.
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Raw HTTP client for the Nager.Date public-holiday API.
#[derive(Debug, Clone)]
pub struct NagerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NagerClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the versioned API root, e.g. `https://date.nager.at/api/v3`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /AvailableCountries`
    pub async fn available_countries(&self) -> Result<Vec<NagerCountry>, Error> {
        let url = join_segments(&self.base_url, &["AvailableCountries"])?;
        let countries: Vec<NagerCountry> = get_json(&self.http, url).await?;
        debug!(count = countries.len(), "fetched available countries");
        Ok(countries)
    }

    /// `GET /PublicHolidays/{year}/{countryCode}`
    pub async fn public_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<Vec<NagerHoliday>, Error> {
        let year = year.to_string();
        let url = join_segments(&self.base_url, &["PublicHolidays", &year, country_code])?;
        let holidays: Vec<NagerHoliday> = get_json(&self.http, url).await?;
        debug!(country_code, %year, count = holidays.len(), "fetched public holidays");
        Ok(holidays)
    }
}
