use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// A public holiday in canonical shape.
///
/// `end_date >= start_date`; single-day holidays have both set to the same
/// date. `regions` is empty for nationwide holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub name: String,
    pub nationwide: bool,
    #[serde(default)]
    pub regions: BTreeSet<String>,
    /// Provider classification, e.g. "Public" or "National holiday".
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Holiday {
    /// A nationwide, single-day holiday with no classification.
    pub fn on(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            start_date: date,
            end_date: date,
            name: name.into(),
            nationwide: true,
            regions: BTreeSet::new(),
            kind: None,
            comment: None,
        }
    }

    pub fn is_multi_day(&self) -> bool {
        self.start_date != self.end_date
    }

    /// Calendar month the holiday starts in.
    pub fn month(&self) -> Month {
        month_of(self.start_date)
    }
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

fn month_of(date: NaiveDate) -> Month {
    usize::try_from(date.month0())
        .ok()
        .and_then(|i| MONTHS.get(i).copied())
        .unwrap_or(Month::January)
}

/// Sort ascending by start date. Stable: holidays on the same day keep
/// their source order.
pub fn sort_by_start_date(holidays: &mut [Holiday]) {
    holidays.sort_by_key(|h| h.start_date);
}

/// Holidays that start in the same calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup {
    pub month: Month,
    pub holidays: Vec<Holiday>,
}

/// Group holidays by start month, in calendar order (January first).
///
/// Within a group the input order is preserved, so sorted input yields
/// sorted groups. Months without holidays are omitted.
pub fn group_by_month(holidays: &[Holiday]) -> Vec<MonthGroup> {
    let mut groups: BTreeMap<u32, Vec<Holiday>> = BTreeMap::new();
    for holiday in holidays {
        groups
            .entry(holiday.start_date.month0())
            .or_default()
            .push(holiday.clone());
    }
    groups
        .into_values()
        .filter_map(|holidays| {
            let month = holidays.first()?.month();
            Some(MonthGroup { month, holidays })
        })
        .collect()
}
