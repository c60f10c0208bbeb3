//! `qs-process` — the contract between simulated processes and the scheduler.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`step`]    | `Step` / `Await` — what a process yields at a suspension point    |
//! | [`context`] | `ProcessContext` — clock view + deferred commands for one resume  |
//! | [`process`] | `Process` trait, `ProcessState`                                   |
//! | [`metrics`] | `MetricsRecord` — one per completed service process               |
//! | [`error`]   | `ProcessError`, `ProcessResult<T>`                                |
//!
//! # Design notes
//!
//! A process is an explicit state machine rather than a coroutine.  The
//! scheduler calls [`Process::resume`] each time the event the process is
//! waiting on fires; the process advances its own state and returns the next
//! thing it waits for, or [`Step::Complete`].
//!
//! Side effects that touch shared engine state (releasing a resource,
//! spawning another process, emitting a metrics record) are *not* performed
//! during `resume`.  They are queued on the [`ProcessContext`] and applied by
//! the scheduler, in order, immediately after `resume` returns, so a process
//! never holds a mutable borrow of the engine.

pub mod context;
pub mod error;
pub mod metrics;
pub mod process;
pub mod step;

#[cfg(test)]
mod tests;

pub use context::{Command, ProcessContext};
pub use error::{ProcessError, ProcessResult};
pub use metrics::MetricsRecord;
pub use process::{Process, ProcessState};
pub use step::{Await, Step};
