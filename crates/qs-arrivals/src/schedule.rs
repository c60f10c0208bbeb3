//! A normalised arrival schedule.

use qs_core::{horizon_for, ArrivalRecord, SimTime};

/// Arrivals on the zero-based minute axis, sorted by timestamp.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    /// Clock time (minutes after midnight) that maps to simulated time zero.
    pub origin_minutes: f64,
    pub arrivals:       Vec<ArrivalRecord>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    /// Latest arrival plus `drain_margin`.
    pub fn horizon(&self, drain_margin: f64) -> SimTime {
        horizon_for(&self.arrivals, drain_margin)
    }

    /// Sum of all demand in the schedule.
    pub fn total_demand(&self) -> f64 {
        self.arrivals.iter().map(|a| a.demand).sum()
    }

    /// Render a simulated instant back as `HH:MM` clock time.
    pub fn clock_label(&self, t: SimTime) -> String {
        let total = (self.origin_minutes + t.minutes()).max(0.0).round() as u64;
        format!("{:02}:{:02}", (total / 60) % 24, total % 60)
    }
}
