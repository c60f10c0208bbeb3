//! Simulation observer trait for invariant checks and data collection.

use qs_core::{ProcessId, SimTime};
use qs_process::MetricsRecord;
use qs_queue::Event;

use crate::Resource;

/// Callbacks invoked by [`Sim`][crate::Sim] while it dispatches events.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — capacity checker
///
/// ```rust,ignore
/// struct CapacityCheck;
///
/// impl SimObserver for CapacityCheck {
///     fn on_event(&mut self, _event: &Event, resources: &[Resource]) {
///         for r in resources {
///             assert!(r.in_service_len() <= r.capacity() as usize);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after a process has been registered with the scheduler.
    fn on_spawn(&mut self, _process: ProcessId, _name: &'static str, _now: SimTime) {}

    /// Called after each event has been fully dispatched: the woken process
    /// has been resumed and all of its commands applied.
    ///
    /// `resources` is the scheduler's resource table, indexed by
    /// `ResourceId`.
    fn on_event(&mut self, _event: &Event, _resources: &[Resource]) {}

    /// Called for every metrics record, in completion order.
    fn on_record(&mut self, _record: &MetricsRecord) {}

    /// Called once when a run stops (queue exhausted or horizon reached).
    fn on_sim_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
