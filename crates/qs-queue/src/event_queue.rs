//! `EventQueue` — simulated clock plus the time-ordered pending-event set.
//!
//! # Storage
//!
//! Pending events live in a `BTreeMap` keyed by `(due_time, sequence_id)`.
//! Insert, pop-min, and removal of an arbitrary entry are all O(log n).
//! Cancelled events are removed eagerly, so `len()` counts exactly the
//! events that will still fire.

use std::collections::BTreeMap;

use qs_core::{EventId, ProcessId, SimTime};

use crate::{Event, EventHandle, EventKind, QueueError, QueueResult};

/// Simulated clock and pending events.
#[derive(Debug)]
pub struct EventQueue {
    now:      SimTime,
    next_seq: EventId,
    pending:  BTreeMap<(SimTime, EventId), (EventKind, ProcessId)>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// An empty queue with the clock at zero.
    pub fn new() -> Self {
        Self {
            now:      SimTime::ZERO,
            next_seq: EventId(0),
            pending:  BTreeMap::new(),
        }
    }

    /// Current simulated time: the due time of the last event returned by
    /// [`advance`][Self::advance].
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Insert an event due at `due_time`.
    ///
    /// Fails with [`QueueError::InvalidTime`] if `due_time` is earlier than
    /// the current time or is not finite.
    pub fn schedule(
        &mut self,
        due_time: SimTime,
        kind:     EventKind,
        process:  ProcessId,
    ) -> QueueResult<EventHandle> {
        if !due_time.is_finite() || due_time < self.now {
            return Err(QueueError::InvalidTime { due: due_time, now: self.now });
        }
        let seq = self.next_seq;
        self.next_seq = seq.next();
        self.pending.insert((due_time, seq), (kind, process));
        tracing::trace!(%due_time, seq = seq.0, ?kind, %process, "event scheduled");
        Ok(Event { due_time, sequence_id: seq, kind, process }.handle())
    }

    /// Insert an event `delay` minutes after the current time.
    pub fn schedule_in(
        &mut self,
        delay:   f64,
        kind:    EventKind,
        process: ProcessId,
    ) -> QueueResult<EventHandle> {
        self.schedule(self.now + delay, kind, process)
    }

    /// Pop the event with the smallest `(due_time, sequence_id)` and move the
    /// clock to its due time.  Returns `None` when nothing is pending.
    pub fn advance(&mut self) -> Option<Event> {
        let ((due_time, sequence_id), (kind, process)) = self.pending.pop_first()?;
        self.now = due_time;
        Some(Event { due_time, sequence_id, kind, process })
    }

    /// Remove a not-yet-fired event.
    ///
    /// Returns `true` if the event was pending; `false` (a no-op) if it has
    /// already fired or was cancelled before.
    pub fn cancel(&mut self, handle: EventHandle) -> bool {
        self.remove(handle).is_some()
    }

    /// Remove a not-yet-fired event and return it, so the caller can undo
    /// whatever the event was going to deliver.
    pub fn remove(&mut self, handle: EventHandle) -> Option<Event> {
        let (kind, process) = self.pending.remove(&handle.key())?;
        Some(Event {
            due_time:    handle.due_time(),
            sequence_id: handle.sequence_id(),
            kind,
            process,
        })
    }

    /// Whether `handle` still refers to a pending event.
    pub fn is_pending(&self, handle: EventHandle) -> bool {
        self.pending.contains_key(&handle.key())
    }

    /// Due time of the next event, without firing it.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.pending.keys().next().map(|&(t, _)| t)
    }

    /// Move the clock forward to `to` without firing anything.
    ///
    /// Used to park the clock on the run horizon.  Fails if `to` is in the
    /// past or if an event is pending strictly before `to`.
    pub fn advance_clock_to(&mut self, to: SimTime) -> QueueResult<()> {
        if !to.is_finite() || to < self.now {
            return Err(QueueError::InvalidTime { due: to, now: self.now });
        }
        if let Some(next) = self.peek_time() {
            if next < to {
                return Err(QueueError::SkipsPending { to, next });
            }
        }
        self.now = to;
        Ok(())
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total number of events ever scheduled (fired, pending, or cancelled).
    pub fn scheduled_count(&self) -> u64 {
        self.next_seq.0
    }
}
