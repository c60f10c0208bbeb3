//! `qs-queue` — the simulated clock and its pending-event set.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`event`]       | `Event`, `EventKind`, `EventHandle`                   |
//! | [`event_queue`] | `EventQueue` (`BTreeMap<(SimTime, EventId), _>`)      |
//! | [`error`]       | `QueueError`, `QueueResult<T>`                        |
//!
//! # Ordering model (summary)
//!
//! ```text
//! key(event)  = (due_time, sequence_id)
//! advance()   = pop smallest key; now = key.due_time
//! schedule(t) = reject if t < now; sequence_id = counter++
//! ```
//!
//! The sequence counter is the only tie-breaker, so events sharing a due time
//! resolve in the order they were scheduled and every run is reproducible.

pub mod error;
pub mod event;
pub mod event_queue;


pub use error::{QueueError, QueueResult};
pub use event::{Event, EventHandle, EventKind};
pub use event_queue::EventQueue;
