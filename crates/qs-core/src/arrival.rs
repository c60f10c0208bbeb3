//! The engine's input record.

use crate::SimTime;

/// One scheduled arrival: when it happens and how much service it needs.
///
/// `timestamp` is on the zero-based simulated-minute axis; `demand` is the
/// passenger count in the bus-stop domain.  Schedules handed to the driver
/// must already be sorted by `timestamp`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalRecord {
    pub timestamp: SimTime,
    pub demand:    f64,
}

impl ArrivalRecord {
    #[inline]
    pub fn new(timestamp: f64, demand: f64) -> Self {
        Self { timestamp: SimTime::new(timestamp), demand }
    }
}

/// Run horizon for `arrivals`: the latest timestamp plus `drain_margin`.
///
/// For an empty schedule the horizon is just `drain_margin`.
pub fn horizon_for(arrivals: &[ArrivalRecord], drain_margin: f64) -> SimTime {
    let latest = arrivals
        .iter()
        .map(|a| a.timestamp)
        .max()
        .unwrap_or(SimTime::ZERO);
    latest + drain_margin
}
