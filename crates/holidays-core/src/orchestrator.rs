// ── Fetch orchestration ──
//
// Sequences the two task chains (countries, holidays), reconciles the
// selection between them, and publishes per-resource state through `watch`
// channels. Results from superseded triggers, or arriving after shutdown,
// are dropped without touching state.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::OrchestratorConfig;
use crate::fallback::FallbackCoordinator;
use crate::model::{Country, Holiday, country, sort_by_start_date};
use crate::preference::PreferenceStore;
use crate::reconcile::{ReconcileRule, SelectionReconciler};
use crate::source::{CountrySource, HolidaySource};
use crate::store::{FetchState, ResourceSlot, Ticket};
use crate::view::HolidayView;

// ── FetchOrchestrator ────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<OrchestratorInner>`. Two triggers drive it:
/// [`start`](Self::start) (and [`refresh_countries`](Self::refresh_countries))
/// for the country list, [`select_country`](Self::select_country) for
/// holidays. Each trigger spawns one task; only the newest trigger per
/// resource may publish its result.
pub struct FetchOrchestrator<P, S> {
    inner: Arc<OrchestratorInner<P, S>>,
}

impl<P, S> Clone for FetchOrchestrator<P, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct OrchestratorInner<P, S> {
    config: OrchestratorConfig,
    year: i32,
    coordinator: FallbackCoordinator<P, S>,
    reconciler: SelectionReconciler,
    countries: ResourceSlot<Country>,
    holidays: ResourceSlot<Holiday>,
    selection: watch::Sender<Option<String>>,
    alive: CancellationToken,
}

impl<P, S> FetchOrchestrator<P, S>
where
    P: CountrySource + HolidaySource + 'static,
    S: HolidaySource + 'static,
{
    /// Build an orchestrator. Does NOT fetch anything -- call
    /// [`start()`](Self::start).
    pub fn new(
        config: OrchestratorConfig,
        primary: P,
        secondary: S,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        let year = config.year();
        let coordinator = FallbackCoordinator::new(primary, secondary, config.retry);
        let reconciler = SelectionReconciler::new(store, config.default_country.clone());
        let (selection, _) = watch::channel(None);

        Self {
            inner: Arc::new(OrchestratorInner {
                config,
                year,
                coordinator,
                reconciler,
                countries: ResourceSlot::new(),
                holidays: ResourceSlot::new(),
                selection,
                alive: CancellationToken::new(),
            }),
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.inner.config
    }

    /// Year holidays are fetched for, fixed at construction.
    pub fn year(&self) -> i32 {
        self.inner.year
    }

    pub fn coordinator(&self) -> &FallbackCoordinator<P, S> {
        &self.inner.coordinator
    }

    // ── Triggers ─────────────────────────────────────────────────────

    /// Startup trigger: load countries, reconcile against the stored
    /// preference, then load holidays for the effective selection.
    ///
    /// The returned task finishes once both resources have settled (or the
    /// trigger was superseded). `None` after [`shutdown`](Self::shutdown).
    pub fn start(&self) -> Option<JoinHandle<()>> {
        let stored = self.inner.reconciler.stored_code();
        self.trigger_countries(stored)
    }

    /// Re-run the startup sequence. An active in-memory selection takes the
    /// place of the stored preference; the store is not re-read.
    pub fn refresh_countries(&self) -> Option<JoinHandle<()>> {
        let current = self.inner.selection.borrow().clone();
        let stored = current.unwrap_or_else(|| self.inner.reconciler.stored_code());
        self.trigger_countries(stored)
    }

    /// User selection. Persists the code and loads its holidays.
    ///
    /// The holidays state enters `Loading` before this returns, so any
    /// earlier holiday request is already superseded. Returns `None` after
    /// shutdown, for an empty code, or for a code missing from a loaded
    /// country list; nothing is persisted or published in those cases.
    pub fn select_country(&self, code: &str) -> Option<JoinHandle<()>> {
        let code = code.trim().to_owned();
        if self.inner.alive.is_cancelled() {
            return None;
        }
        if code.is_empty() {
            warn!("ignoring empty country selection");
            return None;
        }

        // Before the first list arrives the code is accepted as-is and
        // revalidated by the countries task.
        let countries = self.inner.countries.snapshot();
        if !countries.data.is_empty() && !country::contains(&countries.data, &code) {
            warn!(code = %code, "selected country is not in the loaded list, ignoring");
            return None;
        }

        self.inner.reconciler.commit(&code);
        if !self.publish_selection(&code) {
            return None;
        }

        let ticket = self.inner.holidays.begin(&self.inner.alive, false)?;
        let this = self.clone();
        Some(tokio::spawn(async move {
            this.run_holidays(ticket, code).await;
        }))
    }

    /// Tear down. Every in-flight result is discarded from here on and no
    /// new trigger is accepted.
    pub fn shutdown(&self) {
        self.inner.alive.cancel();
        debug!("orchestrator shut down");
    }

    pub fn is_alive(&self) -> bool {
        !self.inner.alive.is_cancelled()
    }

    // ── Observation ──────────────────────────────────────────────────

    pub fn countries(&self) -> watch::Receiver<Arc<FetchState<Country>>> {
        self.inner.countries.subscribe()
    }

    pub fn holidays(&self) -> watch::Receiver<Arc<FetchState<Holiday>>> {
        self.inner.holidays.subscribe()
    }

    pub fn selection(&self) -> watch::Receiver<Option<String>> {
        self.inner.selection.subscribe()
    }

    pub fn selected_code(&self) -> Option<String> {
        self.inner.selection.borrow().clone()
    }

    /// Point-in-time view for presentation.
    pub fn view(&self) -> HolidayView {
        HolidayView::from_snapshots(
            &self.inner.countries.snapshot(),
            &self.inner.holidays.snapshot(),
            self.selected_code(),
            self.inner.year,
        )
    }

    // ── Task chains ──────────────────────────────────────────────────

    fn trigger_countries(&self, stored: String) -> Option<JoinHandle<()>> {
        let ticket = self.inner.countries.begin(&self.inner.alive, true)?;
        debug!(generation = ticket.generation(), stored = %stored, "countries trigger");
        let this = self.clone();
        Some(tokio::spawn(async move {
            this.run_countries(ticket, stored).await;
        }))
    }

    async fn run_countries(&self, ticket: Ticket, stored: String) {
        let countries = self.inner.coordinator.list_countries_with_fallback().await;

        if !self.is_alive() || !self.inner.countries.is_current(ticket) {
            debug!(generation = ticket.generation(), "discarding superseded country result");
            return;
        }

        // A selection made while the list was loading outranks the value
        // captured at trigger time.
        let current = self.selected_code();
        let baseline = current.clone().unwrap_or(stored);
        let resolution = self.inner.reconciler.reconcile(&countries, &baseline);
        let count = countries.len();
        if !self
            .inner
            .countries
            .resolve(ticket, &self.inner.alive, FetchState::loaded(countries))
        {
            debug!(generation = ticket.generation(), "discarding superseded country result");
            return;
        }
        info!(count, selected = %resolution.code, rule = %resolution.rule, "countries loaded");

        if resolution.rule == ReconcileRule::Pending || resolution.code.is_empty() {
            return;
        }
        self.inner.reconciler.commit(&resolution.code);
        if !self.publish_selection(&resolution.code) {
            return;
        }

        // Refetch holidays even when the code is unchanged, unless a fetch
        // for that code is still in flight.
        let unchanged = current.as_deref() == Some(resolution.code.as_str());
        if unchanged && self.inner.holidays.snapshot().is_loading() {
            debug!(code = %resolution.code, "holidays already loading for selection");
            return;
        }
        if let Some(holiday_ticket) = self.inner.holidays.begin(&self.inner.alive, false) {
            self.run_holidays(holiday_ticket, resolution.code).await;
        }
    }

    async fn run_holidays(&self, ticket: Ticket, code: String) {
        let year = self.inner.year;
        let result = self
            .inner
            .coordinator
            .list_holidays_with_fallback(&code, year)
            .await;

        let next = match result {
            Ok(mut holidays) => {
                sort_by_start_date(&mut holidays);
                info!(code = %code, year, count = holidays.len(), "holidays loaded");
                FetchState::loaded(holidays)
            }
            Err(e) => {
                warn!(code = %code, year, error = %e, "holiday fetch failed");
                FetchState::failed(format!("Failed to load holidays for {code}: {e}"))
            }
        };

        if !self.inner.holidays.resolve(ticket, &self.inner.alive, next) {
            debug!(code = %code, generation = ticket.generation(), "discarding superseded holiday result");
        }
    }

    /// Set the in-memory selection unless shut down.
    fn publish_selection(&self, code: &str) -> bool {
        let alive = &self.inner.alive;
        let mut published = false;
        self.inner.selection.send_if_modified(|current| {
            if alive.is_cancelled() {
                return false;
            }
            published = true;
            if current.as_deref() == Some(code) {
                return false;
            }
            *current = Some(code.to_owned());
            true
        });
        published
    }
}
