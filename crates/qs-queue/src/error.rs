use qs_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QueueError {
    /// An event was scheduled before the current time, or at a non-finite time.
    #[error("cannot schedule an event at {due} (current time {now})")]
    InvalidTime { due: SimTime, now: SimTime },

    /// Moving the clock to `to` would jump over a pending event at `next`.
    #[error("cannot move clock to {to}: event pending at {next}")]
    SkipsPending { to: SimTime, next: SimTime },
}

pub type QueueResult<T> = Result<T, QueueError>;
