// holidays-core: Fetch orchestration between holidays-api and consumers (CLI).

pub mod config;
pub mod convert;
pub mod error;
pub mod fallback;
pub mod model;
pub mod orchestrator;
pub mod preference;
pub mod reconcile;
pub mod retry;
pub mod source;
pub mod store;
pub mod view;

#[cfg(test)]
mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_COUNTRY, OrchestratorConfig};
pub use error::CoreError;
pub use fallback::{FALLBACK_COUNTRIES, FallbackCoordinator, fallback_countries};
pub use orchestrator::FetchOrchestrator;
pub use preference::{MemoryPreferenceStore, PreferenceStore, SELECTED_COUNTRY_KEY};
pub use reconcile::{ReconcileRule, Resolution, SelectionReconciler, resolve_selection};
pub use retry::{Attempted, RetryPolicy};
pub use source::{CountrySource, HolidaySource};
pub use store::{FetchPhase, FetchState};
pub use view::{ErrorStates, HolidayView, LOADING_LABEL, LoadingStates};

// Re-export model types at the crate root for ergonomics.
pub use model::{Country, Holiday, MonthGroup, group_by_month, sort_by_start_date};
