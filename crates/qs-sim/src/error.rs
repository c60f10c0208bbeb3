use qs_core::{ProcessId, QsError, ResourceId};
use qs_process::ProcessError;
use qs_queue::{EventKind, QueueError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] QsError),

    #[error("event queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("process error: {0}")]
    Process(#[from] ProcessError),

    /// A process released a resource it was not admitted to.
    #[error("{process} released {resource} without holding a grant")]
    ReleaseWithoutGrant {
        process:  ProcessId,
        resource: ResourceId,
    },

    /// A process requested a resource it already holds or is queued for.
    #[error("{process} requested {resource} while already holding or awaiting it")]
    ReentrantRequest {
        process:  ProcessId,
        resource: ResourceId,
    },

    #[error("unknown resource {0}")]
    UnknownResource(ResourceId),

    #[error("event for unknown or finished process {0}")]
    UnknownProcess(ProcessId),

    /// An event fired for a process that was not waiting for it.
    #[error("{process} woken by {kind:?} while not awaiting it")]
    UnexpectedWake {
        process: ProcessId,
        kind:    EventKind,
    },

    /// Entities were still in the system at the horizon and the run was
    /// configured with `HorizonPolicy::Fail`.
    #[error("{incomplete} arrival(s) did not complete before the horizon")]
    HorizonTruncated { incomplete: usize },
}

pub type SimResult<T> = Result<T, SimError>;
