//! Event records stored in the [`EventQueue`][crate::EventQueue].

use qs_core::{EventId, ProcessId, ResourceId, SimTime};

/// What firing an event means for the process it targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A requested delay has elapsed (also used to start freshly spawned
    /// processes, with zero delay).
    Timeout,
    /// The process has been admitted into the given resource.
    ResourceGrant(ResourceId),
}

/// A fired (or pending) event.
///
/// Events are ordered by `(due_time, sequence_id)`.  `sequence_id` comes from
/// the queue's creation counter, so it doubles as a FIFO tie-breaker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub due_time:    SimTime,
    pub sequence_id: EventId,
    pub kind:        EventKind,
    /// The process resumed when this event fires.
    pub process:     ProcessId,
}

impl Event {
    /// The handle that was returned when this event was scheduled.
    #[inline]
    pub fn handle(&self) -> EventHandle {
        EventHandle { due_time: self.due_time, sequence_id: self.sequence_id }
    }
}

/// Opaque reference to a scheduled event, used for cancellation.
///
/// Carries the full ordering key so cancellation is a single `O(log n)`
/// removal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventHandle {
    due_time:    SimTime,
    sequence_id: EventId,
}

impl EventHandle {
    #[inline]
    pub fn due_time(&self) -> SimTime {
        self.due_time
    }

    #[inline]
    pub fn sequence_id(&self) -> EventId {
        self.sequence_id
    }

    #[inline]
    pub(crate) fn key(&self) -> (SimTime, EventId) {
        (self.due_time, self.sequence_id)
    }
}
