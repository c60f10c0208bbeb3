//! `qs-output` — summaries and output writers for bus-stop runs.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`summary`]  | `RunSummary` — averages, maxima and utilisation of a run  |
//! | [`writer`]   | `OutputWriter` trait                                      |
//! | [`csv`]      | `CsvWriter` → `metrics.csv`, `summary.csv`                |
//! | [`observer`] | `MetricsObserver<W>` — streams records to a writer        |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use qs_output::{CsvWriter, MetricsObserver, OutputWriter, RunSummary};
//!
//! let mut obs = MetricsObserver::new(CsvWriter::new(Path::new("./out"))?);
//! let outcome = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! let mut writer = obs.into_writer();
//! writer.write_summary(&RunSummary::from_outcome(capacity, &outcome))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MetricsObserver;
pub use summary::RunSummary;
pub use writer::OutputWriter;
