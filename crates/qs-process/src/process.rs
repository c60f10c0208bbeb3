//! The `Process` trait — the unit of simulated behavior.

use crate::{Await, ProcessContext, ProcessResult, Step};

/// A suspendable routine driven by the scheduler.
///
/// The scheduler calls [`resume`][Self::resume] once when the process is
/// first started and then once each time the event it awaits fires.  Each
/// call runs the process up to its next suspension point.
///
/// # Example
///
/// ```rust,ignore
/// /// Holds a unit of `resource` for `minutes`, then leaves.
/// struct Occupy { resource: ResourceId, minutes: f64, stage: u8 }
///
/// impl Process for Occupy {
///     fn name(&self) -> &'static str { "occupy" }
///
///     fn resume(&mut self, ctx: &mut ProcessContext) -> ProcessResult<Step> {
///         self.stage += 1;
///         Ok(match self.stage {
///             1 => Step::request(self.resource),
///             2 => Step::timeout(self.minutes),
///             _ => { ctx.release(self.resource); Step::Complete }
///         })
///     }
/// }
/// ```
pub trait Process: 'static {
    /// Short label used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Run until the next suspension point.
    ///
    /// Returning an error aborts the whole run.
    fn resume(&mut self, ctx: &mut ProcessContext) -> ProcessResult<Step>;
}

/// Lifecycle state of a process in the scheduler's table.
///
/// `Runnable → Suspended(_) → Runnable → … → Completed`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ProcessState {
    /// Spawned or woken; will be resumed by the event now being dispatched.
    Runnable,
    /// Waiting for the given event.
    Suspended(Await),
    /// Ran to its end.
    Completed,
}

impl ProcessState {
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, ProcessState::Completed)
    }

    /// The state a process enters after returning `step`.
    #[inline]
    pub fn after(step: Step) -> ProcessState {
        match step {
            Step::Await(a) => ProcessState::Suspended(a),
            Step::Complete => ProcessState::Completed,
        }
    }
}
