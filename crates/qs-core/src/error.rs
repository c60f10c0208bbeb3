//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `QsError` as one variant
//! via `#[from]`, so configuration problems surface the same way everywhere.

use thiserror::Error;

/// The base error type for `qs-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum QsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `qs-*` crates.
pub type QsResult<T> = Result<T, QsError>;
