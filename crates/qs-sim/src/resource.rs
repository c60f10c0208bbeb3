//! `Resource` — a capacity-limited unit pool with a strict FIFO waiting line.
//!
//! # Invariants
//!
//! - `in_service.len() <= capacity` at all times.
//! - A process is never both in service and waiting.
//! - Admission order into service equals arrival order into the waiting
//!   line.  There is no reordering by demand or any other field.
//!
//! Grants are delivered through the event queue: both an immediate admission
//! and a hand-over on release schedule a `ResourceGrant` event at the current
//! instant, so the admitted process resumes after every event already due at
//! that instant (the same FIFO discipline as every other event).

use std::collections::VecDeque;

use qs_core::{ProcessId, ResourceId};
use qs_queue::{EventHandle, EventKind, EventQueue};

use crate::{SimError, SimResult};

/// Outcome of [`Resource::request`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// A unit was free; the grant event fires at the current instant.
    Granted(EventHandle),
    /// All units are busy; the process sits at `position` (0 = head) in the
    /// waiting line and its grant is scheduled when a unit frees up.
    Queued { position: usize },
}

/// A capacity-limited, FIFO-fair contended resource.
#[derive(Debug, Clone)]
pub struct Resource {
    id:              ResourceId,
    capacity:        u32,
    in_service:      Vec<ProcessId>,
    waiting:         VecDeque<ProcessId>,
    /// Processes admitted so far (immediately or from the waiting line).
    grants:          u64,
    peak_in_service: usize,
    peak_waiting:    usize,
}

impl Resource {
    /// Create an idle resource.  `capacity` is validated by the caller.
    pub fn new(id: ResourceId, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            in_service:      Vec::with_capacity(capacity as usize),
            waiting:         VecDeque::new(),
            grants:          0,
            peak_in_service: 0,
            peak_waiting:    0,
        }
    }

    /// Ask for one unit on behalf of `process`.
    ///
    /// If a unit is free the process is admitted now and a grant event is
    /// scheduled at the current instant; otherwise it joins the tail of the
    /// waiting line.
    pub fn request(&mut self, process: ProcessId, queue: &mut EventQueue) -> SimResult<Admission> {
        if self.is_in_service(process) || self.is_waiting(process) {
            return Err(SimError::ReentrantRequest { process, resource: self.id });
        }

        if self.has_free_unit() {
            let handle = self.admit(process, queue)?;
            Ok(Admission::Granted(handle))
        } else {
            self.waiting.push_back(process);
            self.peak_waiting = self.peak_waiting.max(self.waiting.len());
            tracing::debug!(
                resource = %self.id,
                %process,
                position = self.waiting.len() - 1,
                "all units busy, queued"
            );
            Ok(Admission::Queued { position: self.waiting.len() - 1 })
        }
    }

    /// Give back the unit held by `process`.
    ///
    /// If anyone is waiting, the head of the line is admitted into the freed
    /// unit with a grant at the current instant (zero hand-over delay).
    /// Returns the admitted process and its grant, if any.
    ///
    /// Also used to withdraw an admission whose grant event was cancelled
    /// before it fired.
    pub fn release(
        &mut self,
        process: ProcessId,
        queue:   &mut EventQueue,
    ) -> SimResult<Option<(ProcessId, EventHandle)>> {
        let Some(slot) = self.in_service.iter().position(|&p| p == process) else {
            return Err(SimError::ReleaseWithoutGrant { process, resource: self.id });
        };
        // Preserve admission order of the remaining holders.
        self.in_service.remove(slot);

        match self.waiting.pop_front() {
            None => Ok(None),
            Some(next) => {
                let handle = self.admit(next, queue)?;
                Ok(Some((next, handle)))
            }
        }
    }

    fn admit(&mut self, process: ProcessId, queue: &mut EventQueue) -> SimResult<EventHandle> {
        let handle = queue.schedule(queue.now(), EventKind::ResourceGrant(self.id), process)?;
        self.in_service.push(process);
        self.grants += 1;
        self.peak_in_service = self.peak_in_service.max(self.in_service.len());
        tracing::debug!(
            resource = %self.id,
            %process,
            now = %queue.now(),
            in_service = self.in_service.len(),
            "unit granted"
        );
        Ok(handle)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ResourceId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn has_free_unit(&self) -> bool {
        self.in_service.len() < self.capacity as usize
    }

    /// Processes currently holding a unit, in admission order.
    pub fn in_service(&self) -> &[ProcessId] {
        &self.in_service
    }

    /// Processes waiting for a unit, head first.
    pub fn waiting(&self) -> impl ExactSizeIterator<Item = ProcessId> + '_ {
        self.waiting.iter().copied()
    }

    pub fn in_service_len(&self) -> usize {
        self.in_service.len()
    }

    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_in_service(&self, process: ProcessId) -> bool {
        self.in_service.contains(&process)
    }

    pub fn is_waiting(&self, process: ProcessId) -> bool {
        self.waiting.contains(&process)
    }

    /// Total admissions since creation.
    pub fn grants(&self) -> u64 {
        self.grants
    }

    /// Largest number of simultaneously busy units observed.
    pub fn peak_in_service(&self) -> usize {
        self.peak_in_service
    }

    /// Longest waiting line observed.
    pub fn peak_waiting(&self) -> usize {
        self.peak_waiting
    }
}
