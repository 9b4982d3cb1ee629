// ── Fallback coordination ──
//
// Country listing never fails: a primary failure (after retries) or an
// empty answer is replaced by a built-in table. Holiday listing retries the
// primary provider, then asks the secondary once, and reports both messages
// when neither answers.

use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::{Country, Holiday};
use crate::retry::RetryPolicy;
use crate::source::{CountrySource, HolidaySource};

/// Built-in country list used when the country provider is unavailable.
///
/// Codes are ISO 3166-1 alpha-2, unique, and every name is non-empty.
pub const FALLBACK_COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("GB", "United Kingdom"),
    ("AU", "Australia"),
    ("IN", "India"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("JP", "Japan"),
    ("CN", "China"),
    ("BR", "Brazil"),
    ("GH", "Ghana"),
    ("ZA", "South Africa"),
    ("NG", "Nigeria"),
    ("MX", "Mexico"),
    ("ES", "Spain"),
    ("IT", "Italy"),
    ("RU", "Russia"),
    ("KR", "South Korea"),
    ("SE", "Sweden"),
    ("NO", "Norway"),
    ("FI", "Finland"),
];

/// The built-in table as `Country` values, in table order.
pub fn fallback_countries() -> Vec<Country> {
    FALLBACK_COUNTRIES
        .iter()
        .map(|&(code, name)| Country::new(code, name))
        .collect()
}

// ── FallbackCoordinator ──────────────────────────────────────────────

/// Primary/secondary substitution for both resources.
pub struct FallbackCoordinator<P, S> {
    primary: P,
    secondary: S,
    retry: RetryPolicy,
}

impl<P, S> FallbackCoordinator<P, S>
where
    P: CountrySource + HolidaySource,
    S: HolidaySource,
{
    /// `retry` governs requests to the primary; the secondary is asked
    /// once per call.
    pub fn new(primary: P, secondary: S, retry: RetryPolicy) -> Self {
        Self {
            primary,
            secondary,
            retry,
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    /// Countries from the primary provider, or the built-in table.
    ///
    /// Never fails and never returns an empty list.
    pub async fn list_countries_with_fallback(&self) -> Vec<Country> {
        let fetched = self
            .retry
            .execute(|| self.primary.list_countries())
            .await;

        match fetched {
            Ok(countries) if !countries.is_empty() => {
                debug!(count = countries.len(), "countries loaded from primary");
                countries
            }
            Ok(_) => {
                warn!("primary returned no countries, using built-in list");
                fallback_countries()
            }
            Err(e) => {
                warn!(error = %e, "country fetch failed, using built-in list");
                fallback_countries()
            }
        }
    }

    /// Holidays from the primary provider, else the secondary.
    ///
    /// Fails with [`CoreError::Aggregate`] carrying both messages when
    /// neither provider answers.
    pub async fn list_holidays_with_fallback(
        &self,
        iso_code: &str,
        year: i32,
    ) -> Result<Vec<Holiday>, CoreError> {
        let primary = self
            .retry
            .execute(|| self.primary.list_holidays(iso_code, year))
            .await;
        let primary_err = match primary {
            Ok(holidays) => return Ok(holidays),
            Err(e) => e,
        };
        warn!(
            iso_code,
            year,
            source = self.primary.label(),
            status = ?primary_err.status(),
            error = %primary_err,
            "primary holiday fetch failed, trying {}",
            self.secondary.label()
        );

        match self.secondary.list_holidays(iso_code, year).await {
            Ok(holidays) => {
                debug!(iso_code, count = holidays.len(), "holidays loaded from secondary");
                Ok(holidays)
            }
            Err(secondary_err) => {
                warn!(
                    iso_code,
                    source = self.secondary.label(),
                    status = ?secondary_err.status(),
                    error = %secondary_err,
                    "secondary holiday fetch failed"
                );
                Err(CoreError::Aggregate {
                    primary: primary_err.to_string(),
                    secondary: secondary_err.to_string(),
                })
            }
        }
    }
}
