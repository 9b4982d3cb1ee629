// ── Generation-guarded resource slot ──
//
// One `watch` channel per resource. Every trigger takes a ticket; a result
// is applied only if its ticket is still the newest and the owner is still
// alive. Both checks and the write happen inside `send_if_modified`, so a
// trigger and a completion can never interleave.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::FetchState;

/// Proof that a trigger was issued. Only the newest ticket may resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

pub struct ResourceSlot<T> {
    generation: AtomicU64,
    state: watch::Sender<Arc<FetchState<T>>>,
}

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceSlot<T> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(Arc::new(FetchState::idle()));
        Self {
            generation: AtomicU64::new(0),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<FetchState<T>>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Arc<FetchState<T>> {
        Arc::clone(&self.state.borrow())
    }

    /// Whether `ticket` belongs to the most recent trigger.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Apply `next` if `ticket` is still current and `alive` has not been
    /// cancelled. Returns whether the state changed.
    pub fn resolve(&self, ticket: Ticket, alive: &CancellationToken, next: FetchState<T>) -> bool {
        self.state.send_if_modified(|state| {
            if alive.is_cancelled() || !self.is_current(ticket) {
                return false;
            }
            *state = Arc::new(next);
            true
        })
    }
}

impl<T: Clone> ResourceSlot<T> {
    /// Issue a new trigger and move to `Loading`. Supersedes every earlier
    /// ticket. `None` once `alive` is cancelled.
    pub fn begin(&self, alive: &CancellationToken, keep_data: bool) -> Option<Ticket> {
        let mut ticket = None;
        self.state.send_if_modified(|state| {
            if alive.is_cancelled() {
                return false;
            }
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            ticket = Some(Ticket(generation));
            *state = Arc::new(if keep_data {
                FetchState::reloading(state)
            } else {
                FetchState::loading()
            });
            true
        });
        ticket
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::FetchPhase;

    #[test]
    fn newest_ticket_wins() {
        let slot = ResourceSlot::<u32>::new();
        let alive = CancellationToken::new();

        let first = slot.begin(&alive, false).unwrap();
        let second = slot.begin(&alive, false).unwrap();

        assert!(slot.resolve(second, &alive, FetchState::loaded(vec![2])));
        assert!(!slot.resolve(first, &alive, FetchState::loaded(vec![1])));
        assert_eq!(slot.snapshot().data, vec![2]);
    }

    #[test]
    fn superseded_ticket_cannot_resolve_even_first() {
        let slot = ResourceSlot::<u32>::new();
        let alive = CancellationToken::new();

        let first = slot.begin(&alive, false).unwrap();
        let second = slot.begin(&alive, false).unwrap();

        assert!(!slot.resolve(first, &alive, FetchState::loaded(vec![1])));
        assert!(slot.snapshot().is_loading(), "still waiting on the newest trigger");
        assert!(slot.resolve(second, &alive, FetchState::loaded(vec![2])));
    }

    #[test]
    fn cancelled_owner_blocks_everything() {
        let slot = ResourceSlot::<u32>::new();
        let alive = CancellationToken::new();
        let ticket = slot.begin(&alive, false).unwrap();

        alive.cancel();

        assert!(!slot.resolve(ticket, &alive, FetchState::loaded(vec![1])));
        assert!(slot.begin(&alive, false).is_none());
        assert_eq!(slot.snapshot().phase, FetchPhase::Loading);
    }

    #[test]
    fn begin_can_keep_previous_data() {
        let slot = ResourceSlot::<u32>::new();
        let alive = CancellationToken::new();
        let ticket = slot.begin(&alive, false).unwrap();
        slot.resolve(ticket, &alive, FetchState::loaded(vec![7]));

        slot.begin(&alive, true).unwrap();
        assert_eq!(slot.snapshot().data, vec![7]);

        slot.begin(&alive, false).unwrap();
        assert!(slot.snapshot().data.is_empty());
    }

    #[tokio::test]
    async fn subscribers_see_transitions() {
        let slot = ResourceSlot::<u32>::new();
        let alive = CancellationToken::new();
        let mut rx = slot.subscribe();

        let ticket = slot.begin(&alive, false).unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_loading());

        slot.resolve(ticket, &alive, FetchState::failed("nope"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().phase, FetchPhase::Failed);
    }
}
