// ── Test doubles ──
//
// Scriptable in-memory source shared by the unit tests. Responses, failures
// and per-code gates are configured up front; call counts are recorded.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use tokio::sync::oneshot;

use crate::error::CoreError;
use crate::model::{Country, Holiday};
use crate::source::{CountrySource, HolidaySource};

/// Error shaped like the one a provider returns for a non-success status.
pub(crate) fn network_error(status: u16) -> CoreError {
    CoreError::Network {
        message: format!("HTTP error! status: {status}"),
        status: Some(status),
    }
}

/// A failure that repeats `remaining` more times, or forever when `None`.
#[derive(Debug, Clone)]
struct Failure {
    remaining: Option<u32>,
    error: CoreError,
}

impl Failure {
    fn fire(&mut self) -> Option<CoreError> {
        match &mut self.remaining {
            None => Some(self.error.clone()),
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                Some(self.error.clone())
            }
        }
    }
}

#[derive(Default)]
struct MockState {
    countries: Vec<Country>,
    country_failure: Option<Failure>,
    country_calls: u32,
    country_gates: VecDeque<oneshot::Receiver<()>>,
    holidays: HashMap<String, Vec<Holiday>>,
    holiday_failures: HashMap<String, Failure>,
    holiday_calls: HashMap<String, u32>,
    gates: HashMap<String, oneshot::Receiver<()>>,
}

#[derive(Default)]
pub(crate) struct MockSource {
    state: Mutex<MockState>,
}

impl MockSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub(crate) fn with_countries(self, countries: Vec<Country>) -> Self {
        self.state().countries = countries;
        self
    }

    pub(crate) fn with_holidays(self, iso_code: &str, holidays: Vec<Holiday>) -> Self {
        self.state().holidays.insert(iso_code.to_owned(), holidays);
        self
    }

    pub(crate) fn set_countries(&self, countries: Vec<Country>) {
        self.state().countries = countries;
    }

    pub(crate) fn fail_countries(&self, error: CoreError) {
        self.state().country_failure = Some(Failure { remaining: None, error });
    }

    pub(crate) fn fail_countries_times(&self, times: u32, error: CoreError) {
        self.state().country_failure = Some(Failure {
            remaining: Some(times),
            error,
        });
    }

    pub(crate) fn fail_holidays(&self, iso_code: &str, error: CoreError) {
        self.state()
            .holiday_failures
            .insert(iso_code.to_owned(), Failure { remaining: None, error });
    }

    /// Hold the next holiday request for `iso_code` until the returned
    /// sender fires (or is dropped).
    pub(crate) fn gate_holidays(&self, iso_code: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state().gates.insert(iso_code.to_owned(), rx);
        tx
    }

    /// Hold a future country request until the returned sender fires (or
    /// is dropped). Gates are consumed in call order; the response is
    /// captured when the request starts, not when the gate opens.
    pub(crate) fn gate_countries(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state().country_gates.push_back(rx);
        tx
    }

    pub(crate) fn country_calls(&self) -> u32 {
        self.state().country_calls
    }

    pub(crate) fn holiday_calls(&self, iso_code: &str) -> u32 {
        self.state().holiday_calls.get(iso_code).copied().unwrap_or(0)
    }
}

impl CountrySource for MockSource {
    async fn list_countries(&self) -> Result<Vec<Country>, CoreError> {
        let (result, gate) = {
            let mut state = self.state();
            state.country_calls += 1;
            let result = match state.country_failure.as_mut().and_then(Failure::fire) {
                Some(error) => Err(error),
                None => Ok(state.countries.clone()),
            };
            (result, state.country_gates.pop_front())
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        result
    }
}

impl HolidaySource for MockSource {
    fn label(&self) -> &'static str {
        "mock"
    }

    async fn list_holidays(&self, iso_code: &str, _year: i32) -> Result<Vec<Holiday>, CoreError> {
        let gate = {
            let mut state = self.state();
            *state.holiday_calls.entry(iso_code.to_owned()).or_default() += 1;
            state.gates.remove(iso_code)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let mut state = self.state();
        if let Some(error) = state
            .holiday_failures
            .get_mut(iso_code)
            .and_then(Failure::fire)
        {
            return Err(error);
        }
        Ok(state.holidays.get(iso_code).cloned().unwrap_or_default())
    }
}
