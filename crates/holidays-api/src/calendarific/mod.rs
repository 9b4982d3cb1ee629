// Calendarific API client modules
//
// Secondary, key-based holiday provider. Responses arrive wrapped in a
// `{ meta: { code }, response: { holidays: [...] } }` envelope.

pub mod client;
pub mod models;

pub use client::{CalendarificClient, DEFAULT_BASE_URL};
