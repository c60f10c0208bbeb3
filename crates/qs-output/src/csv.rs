//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `metrics.csv` — one row per completed entity, in completion order
//! - `summary.csv` — one row per run summary

use std::fs::File;
use std::path::Path;

use csv::Writer;
use qs_process::MetricsRecord;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, RunSummary};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    metrics:  Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut metrics = Writer::from_path(dir.join("metrics.csv"))?;
        metrics.write_record([
            "arrival_index",
            "demand",
            "arrival_time",
            "service_start",
            "wait_time",
            "service_time",
            "total_time",
        ])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record([
            "capacity",
            "arrivals",
            "completed",
            "incomplete",
            "mean_wait",
            "mean_service",
            "mean_total",
            "max_wait",
            "utilisation",
            "final_time",
        ])?;

        tracing::debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { metrics, summary, finished: false })
    }

    fn ensure_open(&self) -> OutputResult<()> {
        if self.finished { Err(OutputError::Finished) } else { Ok(()) }
    }
}

impl OutputWriter for CsvWriter {
    fn write_records(&mut self, records: &[MetricsRecord]) -> OutputResult<()> {
        self.ensure_open()?;
        for r in records {
            self.metrics.write_record(&[
                r.arrival_index.to_string(),
                r.demand.to_string(),
                r.arrival_time.minutes().to_string(),
                r.service_start.minutes().to_string(),
                r.wait_time.to_string(),
                r.service_time.to_string(),
                r.total_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, s: &RunSummary) -> OutputResult<()> {
        self.ensure_open()?;
        self.summary.write_record(&[
            s.capacity.to_string(),
            s.arrivals.to_string(),
            s.completed.to_string(),
            s.incomplete.to_string(),
            s.mean_wait.to_string(),
            s.mean_service.to_string(),
            s.mean_total.to_string(),
            s.max_wait.to_string(),
            s.utilisation.to_string(),
            s.final_time.to_string(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.metrics.flush()?;
        self.summary.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
