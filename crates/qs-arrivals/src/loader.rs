//! Timetable CSV loader.
//!
//! # CSV format
//!
//! One row per bus arrival.  Only two columns are read; any others (route,
//! scheduled time, …) are ignored.
//!
//! ```csv
//! Route,Scheduled_Arrival,Actual_Arrival,Passenger_Count
//! 1,07:00,07:02,34
//! 2,07:05,07:04,12
//! 1,07:15,07:19,40
//! ```
//!
//! | Column            | Meaning                                         |
//! |-------------------|-------------------------------------------------|
//! | `Actual_Arrival`  | clock time `HH:MM` (24 h)                       |
//! | `Passenger_Count` | boarding demand, a non-negative number          |
//!
//! Rows are stably sorted by arrival clock time and shifted so that the
//! earliest arrival is simulated time zero.  Arrivals are assumed to fall on
//! a single service day; there is no wrap past midnight.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use qs_core::ArrivalRecord;

use crate::{ArrivalError, ArrivalResult, Schedule};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TimetableRow {
    #[serde(rename = "Actual_Arrival")]
    actual_arrival:  String,
    #[serde(rename = "Passenger_Count")]
    passenger_count: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and normalise a timetable CSV file.
pub fn load_arrivals_csv(path: &Path) -> ArrivalResult<Schedule> {
    let file = std::fs::File::open(path)?;
    let schedule = load_arrivals_reader(file)?;
    tracing::info!(path = %path.display(), arrivals = schedule.len(), "timetable loaded");
    Ok(schedule)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded sample data.
pub fn load_arrivals_reader<R: Read>(reader: R) -> ArrivalResult<Schedule> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows: Vec<(f64, f64)> = Vec::new();

    for (line, result) in csv_reader.deserialize::<TimetableRow>().enumerate() {
        let row = result?;
        let clock = parse_clock_minutes(&row.actual_arrival)
            .map_err(|e| ArrivalError::Parse(format!("row {}: {e}", line + 1)))?;
        if !row.passenger_count.is_finite() || row.passenger_count < 0.0 {
            return Err(ArrivalError::Parse(format!(
                "row {}: passenger count must be a non-negative number, got {}",
                line + 1,
                row.passenger_count
            )));
        }
        rows.push((clock, row.passenger_count));
    }

    // ── Sort and shift onto the simulated axis ────────────────────────────
    // `sort_by` is stable: rows sharing a clock time keep file order.
    rows.sort_by(|a, b| a.0.total_cmp(&b.0));
    let origin_minutes = rows.first().map_or(0.0, |r| r.0);

    let arrivals = rows
        .into_iter()
        .map(|(clock, demand)| ArrivalRecord::new(clock - origin_minutes, demand))
        .collect();

    Ok(Schedule { origin_minutes, arrivals })
}

/// Parse a 24-hour `HH:MM` clock time into minutes after midnight.
///
/// Single-digit hours and minutes (`7:5`) are accepted.
pub fn parse_clock_minutes(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid clock time {s:?}: expected HH:MM"))?;

    let field = |v: &str, max: u32, what: &str| -> Result<u32, String> {
        if v.is_empty() || v.len() > 2 || !v.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("invalid {what} {v:?} in clock time {s:?}"));
        }
        let n: u32 = v.parse().map_err(|_| format!("invalid {what} {v:?} in clock time {s:?}"))?;
        if n > max {
            return Err(format!("{what} {n} out of range in clock time {s:?}"));
        }
        Ok(n)
    };

    let hours = field(h, 23, "hour")?;
    let minutes = field(m, 59, "minute")?;
    Ok(f64::from(hours * 60 + minutes))
}
