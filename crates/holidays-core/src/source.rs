// ── Data sources ──
//
// The seam between orchestration and providers. A source returns canonical
// `Country`/`Holiday` values and fails with `CoreError::Network` or
// `CoreError::Decode`; conversion from the wire shapes happens here.

use std::future::Future;
use std::sync::Arc;

use holidays_api::{CalendarificClient, NagerClient};

use crate::convert;
use crate::error::CoreError;
use crate::model::{Country, Holiday};

/// Something that can list the countries holidays are available for.
pub trait CountrySource: Send + Sync {
    fn list_countries(&self) -> impl Future<Output = Result<Vec<Country>, CoreError>> + Send;
}

/// Something that can list one country's holidays for one year.
pub trait HolidaySource: Send + Sync {
    /// Short provider name for logs.
    fn label(&self) -> &'static str;

    fn list_holidays(
        &self,
        iso_code: &str,
        year: i32,
    ) -> impl Future<Output = Result<Vec<Holiday>, CoreError>> + Send;
}

// ── Shared ownership ────────────────────────────────────────────────

impl<T: CountrySource> CountrySource for Arc<T> {
    fn list_countries(&self) -> impl Future<Output = Result<Vec<Country>, CoreError>> + Send {
        (**self).list_countries()
    }
}

impl<T: HolidaySource> HolidaySource for Arc<T> {
    fn label(&self) -> &'static str {
        (**self).label()
    }

    fn list_holidays(
        &self,
        iso_code: &str,
        year: i32,
    ) -> impl Future<Output = Result<Vec<Holiday>, CoreError>> + Send {
        (**self).list_holidays(iso_code, year)
    }
}

// ── Nager.Date (primary) ────────────────────────────────────────────

impl CountrySource for NagerClient {
    async fn list_countries(&self) -> Result<Vec<Country>, CoreError> {
        let raw = self.available_countries().await?;
        Ok(convert::countries_from_nager(raw))
    }
}

impl HolidaySource for NagerClient {
    fn label(&self) -> &'static str {
        "nager.date"
    }

    async fn list_holidays(&self, iso_code: &str, year: i32) -> Result<Vec<Holiday>, CoreError> {
        let raw = self.public_holidays(year, iso_code).await?;
        Ok(raw.into_iter().map(Holiday::from).collect())
    }
}

// ── Calendarific (secondary) ────────────────────────────────────────

impl HolidaySource for CalendarificClient {
    fn label(&self) -> &'static str {
        "calendarific"
    }

    async fn list_holidays(&self, iso_code: &str, year: i32) -> Result<Vec<Holiday>, CoreError> {
        let raw = self.holidays(iso_code, year).await?;
        convert::holidays_from_calendarific(raw)
    }
}
