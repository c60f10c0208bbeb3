//! The `OutputWriter` trait implemented by backend writers.

use qs_process::MetricsRecord;

use crate::{OutputResult, RunSummary};

/// Sink for per-entity metrics and the end-of-run summary.
///
/// Errors surfaced while driven by [`MetricsObserver`][crate::MetricsObserver]
/// are stored and retrieved with
/// [`take_error`][crate::MetricsObserver::take_error].
pub trait OutputWriter {
    /// Append a batch of metrics records, preserving their order.
    fn write_records(&mut self, records: &[MetricsRecord]) -> OutputResult<()>;

    /// Write the summary of a finished run.
    fn write_summary(&mut self, summary: &RunSummary) -> OutputResult<()>;

    /// Push buffered rows to the underlying files without closing them.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close.  Idempotent, so safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
