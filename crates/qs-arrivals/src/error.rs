use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("timetable parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
