// ── Domain model ──
//
// Canonical country and holiday types. Provider-specific shapes are
// normalized into these by `crate::convert` before anything else sees them.

pub mod country;
pub mod holiday;

// ── Re-exports ──────────────────────────────────────────────────────

pub use country::Country;
pub use holiday::{Holiday, MonthGroup, group_by_month, sort_by_start_date};
