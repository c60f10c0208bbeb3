//! The `Sim` struct and its event-dispatch loop.

use qs_core::{ProcessId, QsError, ResourceId, SimTime};
use qs_process::{Await, Command, MetricsRecord, Process, ProcessContext, ProcessState, Step};
use qs_queue::{Event, EventHandle, EventKind, EventQueue};

use crate::{Admission, Resource, SimError, SimObserver, SimResult};

#[cfg(feature = "fx-hash")]
type ProcessTable = rustc_hash::FxHashMap<ProcessId, ProcessSlot>;
#[cfg(not(feature = "fx-hash"))]
type ProcessTable = std::collections::HashMap<ProcessId, ProcessSlot>;

/// A live process, what it is waiting for, and the event that will wake it.
struct ProcessSlot {
    process: Box<dyn Process>,
    state:   ProcessState,
    /// `None` while queued for a resource (no grant scheduled yet).
    pending: Option<EventHandle>,
}

/// Why [`Sim::run_until`] returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// No events were left to dispatch.
    Exhausted,
    /// The next pending event was due at or after the horizon.
    Horizon,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The process scheduler.
///
/// `Sim` owns the clock, every live process, and every resource.  It is a
/// single logical thread of control: one event is popped, exactly the process
/// it targets is resumed, the commands that process queued are applied, and
/// only then is the next event considered.
///
/// Dispatching one event:
///
/// 1. **Advance**: pop the smallest `(due_time, sequence_id)`; the clock
///    jumps to its due time.
/// 2. **Match**: the target process must be awaiting exactly this kind of
///    event, otherwise the run aborts with [`SimError::UnexpectedWake`].
/// 3. **Resume**: call [`Process::resume`] with a fresh [`ProcessContext`].
/// 4. **Commands**: apply releases, spawns, and records in issue order.
/// 5. **Suspend**: schedule the returned timeout, file the resource request,
///    or drop the process if it completed.
pub struct Sim {
    queue:             EventQueue,
    resources:         Vec<Resource>,
    processes:         ProcessTable,
    next_process:      ProcessId,
    records:           Vec<MetricsRecord>,
    events_dispatched: u64,
    completed:         usize,
}

impl Default for Sim {
    fn default() -> Self {
        Self::new()
    }
}

impl Sim {
    /// An empty simulation at time zero with no processes or resources.
    pub fn new() -> Self {
        Self {
            queue:             EventQueue::new(),
            resources:         Vec::new(),
            processes:         ProcessTable::default(),
            next_process:      ProcessId(0),
            records:           Vec::new(),
            events_dispatched: 0,
            completed:         0,
        }
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    /// Register a resource with `capacity` units.
    pub fn add_resource(&mut self, capacity: u32) -> SimResult<ResourceId> {
        if capacity == 0 {
            return Err(QsError::Config("resource capacity must be at least 1".into()).into());
        }
        let id = ResourceId(self.resources.len() as u32);
        self.resources.push(Resource::new(id, capacity));
        Ok(id)
    }

    /// Register `process` and make it runnable at the current instant.
    ///
    /// The process is first resumed when its start event is dispatched, i.e.
    /// after every event already due at the current instant.
    pub fn spawn<P: Process>(&mut self, process: P) -> SimResult<ProcessId> {
        self.spawn_boxed(Box::new(process), &mut crate::NoopObserver)
    }

    fn spawn_boxed<O: SimObserver>(
        &mut self,
        process:  Box<dyn Process>,
        observer: &mut O,
    ) -> SimResult<ProcessId> {
        let id = self.next_process;
        self.next_process = id.next();
        let start = self.queue.schedule(self.queue.now(), EventKind::Timeout, id)?;
        let name = process.name();
        self.processes.insert(
            id,
            ProcessSlot { process, state: ProcessState::Runnable, pending: Some(start) },
        );
        tracing::trace!(%id, name, now = %self.queue.now(), "process spawned");
        observer.on_spawn(id, name, self.queue.now());
        Ok(id)
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Dispatch exactly one event.  Returns `None` when the queue is empty.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Event>> {
        let Some(event) = self.queue.advance() else {
            return Ok(None);
        };
        self.dispatch(event, observer)?;
        self.events_dispatched += 1;
        observer.on_event(&event, &self.resources);
        Ok(Some(event))
    }

    /// Dispatch events until the queue is empty or the next event is due at
    /// or after `horizon`.
    ///
    /// Events due exactly at the horizon are not dispatched.  When the run
    /// stops on the horizon the clock is parked on it.
    pub fn run_until<O: SimObserver>(
        &mut self,
        horizon:  SimTime,
        observer: &mut O,
    ) -> SimResult<StopReason> {
        let reason = loop {
            match self.queue.peek_time() {
                None => break StopReason::Exhausted,
                Some(t) if t >= horizon => break StopReason::Horizon,
                Some(_) => {
                    self.step(observer)?;
                }
            }
        };
        if reason == StopReason::Horizon && horizon > self.queue.now() {
            self.queue.advance_clock_to(horizon)?;
        }
        observer.on_sim_end(self.queue.now());
        Ok(reason)
    }

    /// Cancel a pending event.  No-op (returns `false`) if it already fired.
    ///
    /// A process whose awaited event is cancelled stays suspended for the
    /// rest of the run.  Cancelling a `ResourceGrant` also withdraws the
    /// admission: the unit goes to the head of the waiting line, if any.
    /// Handles come from [`pending_event`][Self::pending_event].
    pub fn cancel(&mut self, handle: EventHandle) -> SimResult<bool> {
        let Some(event) = self.queue.remove(handle) else {
            return Ok(false);
        };
        if let Some(slot) = self.processes.get_mut(&event.process) {
            slot.pending = None;
        }
        if let EventKind::ResourceGrant(rid) = event.kind {
            let resource = self
                .resources
                .get_mut(rid.index())
                .ok_or(SimError::UnknownResource(rid))?;
            let next = resource.release(event.process, &mut self.queue)?;
            tracing::debug!(process = %event.process, resource = %rid, "grant withdrawn");
            self.hand_over(next);
        }
        Ok(true)
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    fn dispatch<O: SimObserver>(&mut self, event: Event, observer: &mut O) -> SimResult<()> {
        let pid = event.process;
        let slot = self
            .processes
            .get_mut(&pid)
            .ok_or(SimError::UnknownProcess(pid))?;

        let expected = match (slot.state, event.kind) {
            (ProcessState::Runnable, EventKind::Timeout) => true,
            (ProcessState::Suspended(Await::Timeout(_)), EventKind::Timeout) => true,
            (ProcessState::Suspended(Await::Grant(want)), EventKind::ResourceGrant(got)) => want == got,
            _ => false,
        };
        if !expected {
            return Err(SimError::UnexpectedWake { process: pid, kind: event.kind });
        }

        tracing::trace!(process = %pid, name = slot.process.name(), now = %event.due_time, "resume");
        slot.state = ProcessState::Runnable;
        slot.pending = None;
        let mut ctx = ProcessContext::new(self.queue.now(), pid);
        let step = slot.process.resume(&mut ctx)?;

        for command in ctx.into_commands() {
            self.apply_command(pid, command, observer)?;
        }
        self.suspend(pid, step)
    }

    fn apply_command<O: SimObserver>(
        &mut self,
        pid:      ProcessId,
        command:  Command,
        observer: &mut O,
    ) -> SimResult<()> {
        match command {
            Command::Release(rid) => {
                let resource = self
                    .resources
                    .get_mut(rid.index())
                    .ok_or(SimError::UnknownResource(rid))?;
                let next = resource.release(pid, &mut self.queue)?;
                self.hand_over(next);
            }
            Command::Spawn(process) => {
                self.spawn_boxed(process, observer)?;
            }
            Command::Record(record) => {
                observer.on_record(&record);
                self.records.push(record);
            }
        }
        Ok(())
    }

    fn suspend(&mut self, pid: ProcessId, step: Step) -> SimResult<()> {
        let pending = match step {
            Step::Complete => {
                self.processes.remove(&pid);
                self.completed += 1;
                tracing::trace!(process = %pid, now = %self.queue.now(), "process completed");
                return Ok(());
            }
            Step::Await(Await::Timeout(delay)) => {
                Some(self.queue.schedule_in(delay, EventKind::Timeout, pid)?)
            }
            Step::Await(Await::Grant(rid)) => {
                let resource = self
                    .resources
                    .get_mut(rid.index())
                    .ok_or(SimError::UnknownResource(rid))?;
                match resource.request(pid, &mut self.queue)? {
                    Admission::Granted(handle) => Some(handle),
                    Admission::Queued { .. } => None,
                }
            }
        };
        if let Some(slot) = self.processes.get_mut(&pid) {
            slot.state = ProcessState::after(step);
            slot.pending = pending;
        }
        Ok(())
    }

    /// Record the grant a waiter received when a unit was handed over.
    fn hand_over(&mut self, next: Option<(ProcessId, EventHandle)>) {
        if let Some((pid, grant)) = next {
            if let Some(slot) = self.processes.get_mut(&pid) {
                slot.pending = Some(grant);
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.queue.now()
    }

    /// Resource table, indexed by `ResourceId`.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.get(id.index())
    }

    /// State of `process`, or `None` if it was never spawned.
    ///
    /// Finished processes are dropped from the table and report
    /// [`ProcessState::Completed`].
    pub fn state(&self, process: ProcessId) -> Option<ProcessState> {
        match self.processes.get(&process) {
            Some(slot) => Some(slot.state),
            None if process < self.next_process => Some(ProcessState::Completed),
            None => None,
        }
    }

    /// The event that will next wake `process`.
    ///
    /// `None` if the process is finished or unknown, or while it sits in a
    /// resource's waiting line with no grant scheduled yet.
    pub fn pending_event(&self, process: ProcessId) -> Option<EventHandle> {
        self.processes.get(&process).and_then(|slot| slot.pending)
    }

    /// Number of processes that have been spawned and not yet completed.
    pub fn live_processes(&self) -> usize {
        self.processes.len()
    }

    /// Number of processes that ran to completion.
    pub fn completed_processes(&self) -> usize {
        self.completed
    }

    /// Total processes ever spawned.
    pub fn spawned_processes(&self) -> usize {
        self.next_process.index()
    }

    /// Number of events still pending.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    pub fn events_dispatched(&self) -> u64 {
        self.events_dispatched
    }

    /// Metrics records emitted so far, in completion order.
    pub fn records(&self) -> &[MetricsRecord] {
        &self.records
    }

    /// Move the collected records out, leaving the list empty.
    pub fn take_records(&mut self) -> Vec<MetricsRecord> {
        std::mem::take(&mut self.records)
    }
}
