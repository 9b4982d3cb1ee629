// ── Reactive fetch state ──
//
// Per-resource snapshots with push-based change notification and a
// generation counter that rejects superseded results.

mod fetch_state;
mod slot;

pub use fetch_state::{FetchPhase, FetchState};
pub use slot::{ResourceSlot, Ticket};
