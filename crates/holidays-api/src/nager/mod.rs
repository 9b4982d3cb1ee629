// Nager.Date API client modules
//
// Primary provider for both the country list and per-country holiday
// calendars. Plain JSON arrays, no envelope.

pub mod client;
pub mod models;

pub use client::{DEFAULT_BASE_URL, NagerClient};
