//! `MetricsObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use qs_core::SimTime;
use qs_process::MetricsRecord;
use qs_sim::SimObserver;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every metrics record to an
/// [`OutputWriter`] as it is emitted.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].  The writer is flushed, not finished, at
/// the end of the run so a summary can still be appended via
/// [`into_writer`][Self::into_writer].
pub struct MetricsObserver<W: OutputWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> MetricsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Records successfully handed to the writer.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Unwrap the inner writer (e.g. to append a summary after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for MetricsObserver<W> {
    fn on_record(&mut self, record: &MetricsRecord) {
        let result = self.writer.write_records(std::slice::from_ref(record));
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_time: SimTime) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
