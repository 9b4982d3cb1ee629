// holidays-api: Async Rust clients for public-holiday data providers (Nager.Date + Calendarific)

pub mod calendarific;
pub mod error;
pub mod nager;
pub mod transport;

pub use calendarific::CalendarificClient;
pub use error::Error;
pub use nager::NagerClient;
pub use transport::TransportConfig;
