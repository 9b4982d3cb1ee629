// ── API-to-domain type conversions ──
//
// Bridges raw `holidays_api` response types into canonical `model` types.
// Each conversion normalizes provider field names into the Country/Holiday
// shape and fills defaults for missing optional data.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use tracing::warn;

use holidays_api::calendarific::models::{CalendarificDate, CalendarificHoliday, CalendarificStates};
use holidays_api::nager::models::{NagerCountry, NagerHoliday};

use crate::error::CoreError;
use crate::model::{Country, Holiday};

// ── Helpers ────────────────────────────────────────────────────────

/// Trim and drop empty strings.
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

// ── Nager.Date ─────────────────────────────────────────────────────

impl From<NagerCountry> for Country {
    fn from(c: NagerCountry) -> Self {
        Country {
            iso_code: c.country_code.trim().to_owned(),
            name: c.name,
        }
    }
}

/// Convert the country list, dropping blank codes and duplicate codes
/// (first occurrence wins).
pub fn countries_from_nager(raw: Vec<NagerCountry>) -> Vec<Country> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(Country::from)
        .filter(|c| {
            if c.iso_code.is_empty() {
                warn!(name = %c.name, "dropping country without ISO code");
                return false;
            }
            if !seen.insert(c.iso_code.clone()) {
                warn!(iso_code = %c.iso_code, "dropping duplicate country");
                return false;
            }
            true
        })
        .collect()
}

impl From<NagerHoliday> for Holiday {
    fn from(h: NagerHoliday) -> Self {
        let name = non_empty(h.local_name).unwrap_or(h.name);
        let regions = if h.global {
            BTreeSet::new()
        } else {
            h.counties.unwrap_or_default().into_iter().collect()
        };

        Holiday {
            start_date: h.date,
            end_date: h.date,
            name,
            nationwide: h.global,
            regions,
            kind: h.types.into_iter().next(),
            comment: None,
        }
    }
}

// ── Calendarific ───────────────────────────────────────────────────

/// Resolve the calendar date, preferring the structured parts over the ISO
/// string (which carries a time and offset for some observances).
fn calendarific_date(date: &CalendarificDate) -> Result<NaiveDate, CoreError> {
    if let Some(parts) = date.datetime {
        if let Some(d) = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day) {
            return Ok(d);
        }
    }
    date.iso
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .ok_or_else(|| CoreError::Decode {
            message: format!("unrecognized holiday date '{}'", date.iso),
        })
}

impl TryFrom<CalendarificHoliday> for Holiday {
    type Error = CoreError;

    fn try_from(h: CalendarificHoliday) -> Result<Self, Self::Error> {
        let date = calendarific_date(&h.date)?;

        let (nationwide, regions) = match h.states {
            Some(CalendarificStates::List(states)) => {
                (false, states.into_iter().map(|s| s.name).collect())
            }
            Some(CalendarificStates::All(_)) => (true, BTreeSet::new()),
            None => {
                let all = h
                    .locations
                    .as_deref()
                    .is_none_or(|l| l.trim().eq_ignore_ascii_case("all"));
                (all, BTreeSet::new())
            }
        };

        Ok(Holiday {
            start_date: date,
            end_date: date,
            name: h.name,
            nationwide,
            regions,
            kind: non_empty(h.primary_type).or_else(|| h.kinds.into_iter().next()),
            comment: non_empty(h.description),
        })
    }
}

/// Convert a whole Calendarific list. Any malformed entry fails the batch.
pub fn holidays_from_calendarific(raw: Vec<CalendarificHoliday>) -> Result<Vec<Holiday>, CoreError> {
    raw.into_iter().map(Holiday::try_from).collect()
}
