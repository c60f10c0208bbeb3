//! Aggregate statistics of one run.

use qs_sim::RunOutcome;

/// What the demo prints after a run, and what `summary.csv` holds.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub capacity:     u32,
    pub arrivals:     usize,
    pub completed:    usize,
    pub incomplete:   usize,
    /// Averages over completed entities; `0.0` when none completed.
    pub mean_wait:    f64,
    pub mean_service: f64,
    pub mean_total:   f64,
    pub max_wait:     f64,
    /// Service minutes of *completed* entities over available unit-minutes
    /// up to the final time.  In a truncated run, service still in progress
    /// at the horizon is not counted.
    pub utilisation:  f64,
    pub final_time:   f64,
}

impl RunSummary {
    pub fn from_outcome(capacity: u32, outcome: &RunOutcome) -> Self {
        let n = outcome.records.len();
        let (wait, service, total, max_wait) = outcome.records.iter().fold(
            (0.0, 0.0, 0.0, 0.0_f64),
            |(w, s, t, m), r| (w + r.wait_time, s + r.service_time, t + r.total_time, m.max(r.wait_time)),
        );
        let mean = |sum: f64| if n == 0 { 0.0 } else { sum / n as f64 };

        let available = f64::from(capacity) * outcome.final_time.minutes();
        let utilisation = if available > 0.0 { service / available } else { 0.0 };

        Self {
            capacity,
            arrivals:     outcome.arrivals,
            completed:    outcome.completed,
            incomplete:   outcome.incomplete,
            mean_wait:    mean(wait),
            mean_service: mean(service),
            mean_total:   mean(total),
            max_wait,
            utilisation,
            final_time:   outcome.final_time.minutes(),
        }
    }
}
