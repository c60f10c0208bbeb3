//! Per-resumption view of the engine handed to every [`Process`].

use std::fmt;

use qs_core::{ProcessId, ResourceId, SimTime};

use crate::{MetricsRecord, Process};

/// A side effect requested by a process during `resume`.
///
/// Commands are applied by the scheduler in the order they were queued,
/// immediately after `resume` returns and before the next event fires.
pub enum Command {
    /// Give back a unit of `resource` held by the resuming process.
    Release(ResourceId),
    /// Start a new process at the current instant.
    Spawn(Box<dyn Process>),
    /// Append a metrics record to the run output.
    Record(MetricsRecord),
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Release(r) => f.debug_tuple("Release").field(r).finish(),
            Command::Spawn(p)   => f.debug_tuple("Spawn").field(&p.name()).finish(),
            Command::Record(m)  => f.debug_tuple("Record").field(m).finish(),
        }
    }
}

/// What a process can see and do while it is being resumed.
///
/// Built fresh by the scheduler for each resumption.  Reading the clock is
/// direct; everything that mutates shared state goes through the command
/// buffer.
#[derive(Debug)]
pub struct ProcessContext {
    now:      SimTime,
    process:  ProcessId,
    commands: Vec<Command>,
}

impl ProcessContext {
    pub fn new(now: SimTime, process: ProcessId) -> Self {
        Self { now, process, commands: Vec::new() }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Identity of the process being resumed.
    #[inline]
    pub fn process(&self) -> ProcessId {
        self.process
    }

    /// Release a unit of `resource` held by this process.
    pub fn release(&mut self, resource: ResourceId) {
        self.commands.push(Command::Release(resource));
    }

    /// Spawn `process`.  It becomes runnable at the current instant but does
    /// not run until the spawner has suspended or completed.
    pub fn spawn<P: Process>(&mut self, process: P) {
        self.commands.push(Command::Spawn(Box::new(process)));
    }

    /// Emit a metrics record.
    pub fn record(&mut self, record: MetricsRecord) {
        self.commands.push(Command::Record(record));
    }

    /// Queued commands, in issue order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Consume the context, yielding its queued commands.
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}
