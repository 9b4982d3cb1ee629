// Wire types for the Nager.Date v3 API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Entry from `GET /AvailableCountries`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NagerCountry {
    pub country_code: String,
    pub name: String,
}

/// Entry from `GET /PublicHolidays/{year}/{countryCode}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NagerHoliday {
    pub date: NaiveDate,
    /// Name in the country's own language. May be empty.
    #[serde(default)]
    pub local_name: Option<String>,
    /// English name.
    pub name: String,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub fixed: bool,
    /// `true` when the holiday is observed in the whole country.
    #[serde(default = "default_global")]
    pub global: bool,
    /// ISO 3166-2 subdivision codes; `null` for nationwide holidays.
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    #[serde(default)]
    pub launch_year: Option<i32>,
    /// e.g. `["Public"]`, `["Bank", "School"]`.
    #[serde(default)]
    pub types: Vec<String>,
}

fn default_global() -> bool {
    true
}
