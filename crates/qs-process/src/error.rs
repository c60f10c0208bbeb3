use qs_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProcessError {
    /// The arrival schedule is not sorted by timestamp.
    #[error(
        "arrival {index} at {timestamp} is earlier than the preceding arrival at {previous}; \
         the schedule must be sorted by timestamp"
    )]
    NonMonotonicArrival {
        index:     usize,
        timestamp: SimTime,
        previous:  SimTime,
    },

    #[error("arrival {index} has invalid demand {demand}")]
    InvalidDemand { index: usize, demand: f64 },

    /// A process was resumed in a state it cannot handle.
    #[error("process {name} resumed after completion")]
    ResumedAfterCompletion { name: &'static str },
}

pub type ProcessResult<T> = Result<T, ProcessError>;
