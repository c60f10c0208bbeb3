//! Suspension points — what a process hands back to the scheduler.

use qs_core::ResourceId;

/// The event a suspended process is waiting for.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Await {
    /// Resume after this many simulated minutes.  Zero is allowed and means
    /// "after everything already scheduled for the current instant".
    Timeout(f64),

    /// Request the resource and resume once it admits this process.
    ///
    /// The request is issued at the moment the process suspends; if a unit
    /// is free the grant fires at the current instant.
    Grant(ResourceId),
}

/// Result of one call to [`Process::resume`][crate::Process::resume].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Suspend until the given event fires.
    Await(Await),
    /// The process has run to its end; the scheduler drops it.
    Complete,
}

impl Step {
    /// Shorthand for `Step::Await(Await::Timeout(minutes))`.
    #[inline]
    pub fn timeout(minutes: f64) -> Step {
        Step::Await(Await::Timeout(minutes))
    }

    /// Shorthand for `Step::Await(Await::Grant(resource))`.
    #[inline]
    pub fn request(resource: ResourceId) -> Step {
        Step::Await(Await::Grant(resource))
    }
}
