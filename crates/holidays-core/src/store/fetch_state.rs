use serde::Serialize;
use strum::Display;

/// Where a resource is in its fetch cycle.
///
/// `Idle -> Loading -> {Loaded, Failed}`; any phase may go back to
/// `Loading` on a new trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Immutable snapshot of one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchState<T> {
    pub phase: FetchPhase,
    pub error: Option<String>,
    pub data: Vec<T>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T: Clone> FetchState<T> {
    /// Loading snapshot that keeps the previous data visible.
    pub fn reloading(previous: &Self) -> Self {
        Self {
            phase: FetchPhase::Loading,
            error: None,
            data: previous.data.clone(),
        }
    }
}

impl<T> FetchState<T> {
    pub fn idle() -> Self {
        Self {
            phase: FetchPhase::Idle,
            error: None,
            data: Vec::new(),
        }
    }

    /// Loading snapshot with no data.
    pub fn loading() -> Self {
        Self {
            phase: FetchPhase::Loading,
            error: None,
            data: Vec::new(),
        }
    }

    pub fn loaded(data: Vec<T>) -> Self {
        Self {
            phase: FetchPhase::Loaded,
            error: None,
            data,
        }
    }

    /// Failed snapshot. Data is cleared.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            phase: FetchPhase::Failed,
            error: Some(error.into()),
            data: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// Loaded or failed.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, FetchPhase::Loaded | FetchPhase::Failed)
    }
}
