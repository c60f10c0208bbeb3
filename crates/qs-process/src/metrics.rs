//! Per-entity output of a completed service process.

use qs_core::SimTime;

/// Timing of one entity that finished service within the horizon.
///
/// Records are appended in *completion* order, which can differ from arrival
/// order when a later, smaller-demand entity finishes first.
///
/// `total_time` is stored as `wait_time + service_time`, so the conservation
/// identity holds bit-for-bit.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsRecord {
    /// Position of the entity in the input schedule.
    pub arrival_index: usize,
    /// Demand carried by the entity (passenger count).
    pub demand:        f64,
    /// When the entity arrived at the stop.
    pub arrival_time:  SimTime,
    /// When the entity was admitted to a service unit.
    pub service_start: SimTime,
    pub wait_time:     f64,
    pub service_time:  f64,
    pub total_time:    f64,
}

impl MetricsRecord {
    /// Build a record from the three instants of an entity's lifecycle.
    pub fn new(
        arrival_index: usize,
        demand:        f64,
        arrival_time:  SimTime,
        service_start: SimTime,
        service_time:  f64,
    ) -> Self {
        let wait_time = service_start.since(arrival_time);
        Self {
            arrival_index,
            demand,
            arrival_time,
            service_start,
            wait_time,
            service_time,
            total_time: wait_time + service_time,
        }
    }

    /// Instant the entity left the stop.
    #[inline]
    pub fn departure_time(&self) -> SimTime {
        self.service_start + self.service_time
    }
}
