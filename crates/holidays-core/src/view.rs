// ── Presentation contract ──
//
// What a renderer needs from the orchestrator in one value: both lists,
// per-resource loading and error flags, and the active selection.

use serde::Serialize;

use crate::model::{Country, Holiday, MonthGroup, country, group_by_month};
use crate::store::FetchState;

/// Placeholder shown while the selected country's name is unknown.
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadingStates {
    pub countries: bool,
    pub holidays: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorStates {
    pub country: Option<String>,
    pub holiday: Option<String>,
}

/// Snapshot of everything a renderer consumes.
///
/// `holidays` is sorted ascending by start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayView {
    pub countries: Vec<Country>,
    pub holidays: Vec<Holiday>,
    pub loading: LoadingStates,
    pub errors: ErrorStates,
    pub selected: Option<String>,
    pub year: i32,
}

impl HolidayView {
    pub fn from_snapshots(
        countries: &FetchState<Country>,
        holidays: &FetchState<Holiday>,
        selected: Option<String>,
        year: i32,
    ) -> Self {
        Self {
            countries: countries.data.clone(),
            holidays: holidays.data.clone(),
            loading: LoadingStates {
                // Never-started counts as loading for the selector.
                countries: !countries.is_settled(),
                holidays: holidays.is_loading(),
            },
            errors: ErrorStates {
                country: countries.error.clone(),
                holiday: holidays.error.clone(),
            },
            selected,
            year,
        }
    }

    /// Display name of the active selection, or [`LOADING_LABEL`] until the
    /// country list contains it.
    pub fn selected_country_name(&self) -> &str {
        self.selected
            .as_deref()
            .and_then(|code| country::name_for(&self.countries, code))
            .unwrap_or(LOADING_LABEL)
    }

    /// Holidays grouped by start month, January first.
    pub fn holidays_by_month(&self) -> Vec<MonthGroup> {
        group_by_month(&self.holidays)
    }

    /// The country list failed and nothing else can be shown.
    pub fn is_blocked(&self) -> bool {
        self.errors.country.is_some() && self.countries.is_empty()
    }
}
