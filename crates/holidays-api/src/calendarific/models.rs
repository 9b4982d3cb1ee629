// Wire types for the Calendarific v2 API.
//
// Only the fields the holiday view consumes are modelled; everything else in
// the payload is ignored by serde.

use serde::{Deserialize, Serialize};

/// Outer envelope. `response` is an empty array on errors and an object on
/// success, so it stays untyped until `meta.code` has been checked.
#[derive(Debug, Deserialize)]
pub(crate) struct CalendarificEnvelope {
    pub meta: CalendarificMeta,
    #[serde(default)]
    pub response: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CalendarificMeta {
    pub code: u16,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_detail: Option<String>,
}

/// The `response` object of a successful call.
#[derive(Debug, Deserialize)]
pub(crate) struct CalendarificResponse {
    pub holidays: Vec<CalendarificHoliday>,
}

/// A single holiday from `GET /holidays`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalendarificHoliday {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: CalendarificDate,
    /// e.g. `["National holiday"]`.
    #[serde(default, rename = "type")]
    pub kinds: Vec<String>,
    #[serde(default)]
    pub primary_type: Option<String>,
    /// `"All"` for nationwide holidays, otherwise a comma-separated list.
    #[serde(default)]
    pub locations: Option<String>,
    #[serde(default)]
    pub states: Option<CalendarificStates>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalendarificDate {
    /// `2025-01-01`, or a full timestamp for time-bound observances.
    pub iso: String,
    #[serde(default)]
    pub datetime: Option<CalendarificDateParts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalendarificDateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// `states` is either the literal string `"All"` or a list of subdivisions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CalendarificStates {
    All(String),
    List(Vec<CalendarificState>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalendarificState {
    #[serde(default)]
    pub abbrev: Option<String>,
    pub name: String,
    #[serde(default)]
    pub iso: Option<String>,
}
