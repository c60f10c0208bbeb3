//! Integration tests for qs-output.

use qs_core::{ArrivalRecord, SimConfig, SimTime};
use qs_process::MetricsRecord;
use qs_sim::{run, RunOutcome, SimBuilder};

use crate::{CsvWriter, MetricsObserver, OutputError, OutputResult, OutputWriter, RunSummary};

fn three_at_once() -> RunOutcome {
    let arrivals: Vec<_> = (0..3).map(|_| ArrivalRecord::new(0.0, 1.0)).collect();
    run(&arrivals, 1, SimTime::new(60.0)).unwrap()
}

fn read_rows(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn averages_over_completed_entities() {
        let s = RunSummary::from_outcome(1, &three_at_once());
        assert_eq!(s.arrivals, 3);
        assert_eq!(s.completed, 3);
        assert_eq!(s.incomplete, 0);
        assert!((s.mean_wait - 0.3).abs() < 1e-9);
        assert!((s.mean_service - 0.3).abs() < 1e-9);
        assert!((s.mean_total - 0.6).abs() < 1e-9);
        assert!((s.max_wait - 0.6).abs() < 1e-9);
    }

    #[test]
    fn fully_busy_single_unit_is_fully_utilised() {
        // The queue drains at 0.9 and the run ends there.
        let s = RunSummary::from_outcome(1, &three_at_once());
        assert!((s.final_time - 0.9).abs() < 1e-9);
        assert!((s.utilisation - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_run_reports_zeros() {
        let outcome = run(&[], 2, SimTime::new(10.0)).unwrap();
        let s = RunSummary::from_outcome(2, &outcome);
        assert_eq!(s.completed, 0);
        assert_eq!(s.mean_wait, 0.0);
        assert_eq!(s.mean_total, 0.0);
        assert_eq!(s.utilisation, 0.0);
    }

    #[test]
    fn utilisation_counts_completed_service_only() {
        // The second entity is in service from 9.9 when the run stops at 10.
        let arrivals = vec![ArrivalRecord::new(0.0, 10.0), ArrivalRecord::new(9.9, 10.0)];
        let outcome = run(&arrivals, 1, SimTime::new(10.0)).unwrap();
        let s = RunSummary::from_outcome(1, &outcome);
        assert_eq!(s.incomplete, 1);
        assert!((s.utilisation - 3.0 / 10.0).abs() < 1e-9);
    }

    #[test]
    fn truncated_run_counts_incomplete() {
        let arrivals = vec![ArrivalRecord::new(0.0, 1.0), ArrivalRecord::new(9.9, 1.0)];
        let outcome = run(&arrivals, 1, SimTime::new(10.0)).unwrap();
        let s = RunSummary::from_outcome(1, &outcome);
        assert_eq!((s.completed, s.incomplete), (1, 1));
        assert_eq!(s.final_time, 10.0);
        assert!((s.utilisation - 0.03).abs() < 1e-9);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_rows(&dir.path().join("metrics.csv"));
        assert_eq!(
            headers,
            ["arrival_index", "demand", "arrival_time", "service_start", "wait_time", "service_time", "total_time"]
        );
        assert!(rows.is_empty());

        let (headers, _) = read_rows(&dir.path().join("summary.csv"));
        assert_eq!(headers[0], "capacity");
        assert_eq!(headers.len(), 10);
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        CsvWriter::new(&nested).unwrap();
        assert!(nested.join("metrics.csv").exists());
    }

    #[test]
    fn records_written_in_given_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rec = |i: usize| MetricsRecord::new(i, 2.0, SimTime::new(1.0), SimTime::new(1.5), 0.6);
        w.write_records(&[rec(2), rec(0), rec(1)]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_rows(&dir.path().join("metrics.csv"));
        let order: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
        assert_eq!(order, ["2", "0", "1"]);
        assert_eq!(&rows[0][4], "0.5"); // wait_time
        let total: f64 = rows[0][6].parse().unwrap();
        assert!((total - 1.1).abs() < 1e-9);
    }

    #[test]
    fn summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&RunSummary::from_outcome(1, &three_at_once())).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_rows(&dir.path().join("summary.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1"); // capacity
        assert_eq!(&rows[0][1], "3"); // arrivals
        let mean_wait: f64 = rows[0][4].parse().unwrap();
        assert!((mean_wait - 0.3).abs() < 1e-9);
    }

    #[test]
    fn finish_idempotent_and_final() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert!(matches!(w.write_records(&[]), Err(OutputError::Finished)));
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use super::*;

    /// Fails every write after the first `ok` records.
    struct Flaky {
        ok:   usize,
        seen: usize,
    }

    impl OutputWriter for Flaky {
        fn write_records(&mut self, records: &[MetricsRecord]) -> OutputResult<()> {
            self.seen += records.len();
            if self.seen > self.ok {
                return Err(std::io::Error::other("disk full").into());
            }
            Ok(())
        }
        fn write_summary(&mut self, _summary: &RunSummary) -> OutputResult<()> {
            Ok(())
        }
        fn flush(&mut self) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn streams_records_then_appends_summary() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let arrivals = vec![ArrivalRecord::new(0.0, 10.0), ArrivalRecord::new(0.0, 1.0)];
        let config = SimConfig::with_capacity(2);

        let mut obs = MetricsObserver::new(CsvWriter::new(dir.path()).unwrap());
        let outcome = SimBuilder::new(config, arrivals).build().unwrap().run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.written(), 2);

        let mut w = obs.into_writer();
        w.write_summary(&RunSummary::from_outcome(2, &outcome)).unwrap();
        w.finish().unwrap();

        // Completion order: the short job leaves first.
        let (_, rows) = read_rows(&dir.path().join("metrics.csv"));
        let order: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
        assert_eq!(order, ["1", "0"]);
        let (_, summary) = read_rows(&dir.path().join("summary.csv"));
        assert_eq!(&summary[0][2], "2"); // completed
    }

    #[test]
    fn keeps_first_error_and_lets_run_finish() {
        let arrivals: Vec<_> = (0..4).map(|_| ArrivalRecord::new(0.0, 1.0)).collect();
        let mut obs = MetricsObserver::new(Flaky { ok: 1, seen: 0 });
        let outcome = SimBuilder::new(SimConfig::default(), arrivals)
            .build()
            .unwrap()
            .run(&mut obs)
            .unwrap();
        assert_eq!(outcome.completed, 4);
        assert_eq!(obs.written(), 1);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}
