//! Fluent builder for constructing a [`BusStopSim`].

use qs_core::{horizon_for, ArrivalRecord, QsError, SimConfig, SimTime};

use crate::{BusStopSim, SimResult};

/// Fluent builder for [`BusStopSim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — capacity, service rate, drain margin, horizon policy
/// - the arrival schedule, sorted by timestamp
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                         |
/// |-----------------|-------------------------------------------------|
/// | `.horizon(t)`   | latest arrival + `config.drain_margin`          |
///
/// # Example
///
/// ```rust,ignore
/// let outcome = SimBuilder::new(SimConfig::with_capacity(2), arrivals)
///     .horizon(SimTime::new(120.0))
///     .build()?
///     .run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    arrivals: Vec<ArrivalRecord>,
    horizon:  Option<SimTime>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, arrivals: Vec<ArrivalRecord>) -> Self {
        Self { config, arrivals, horizon: None }
    }

    /// Stop dispatching at `horizon` instead of the computed default.
    pub fn horizon(mut self, horizon: SimTime) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Validate inputs, register the stop and the arrival generator, and
    /// return a ready-to-run [`BusStopSim`].
    ///
    /// Schedule ordering is *not* checked here; the generator reports the
    /// first out-of-order record when it reaches it.
    pub fn build(self) -> SimResult<BusStopSim> {
        self.config.validate()?;

        let horizon = self
            .horizon
            .unwrap_or_else(|| horizon_for(&self.arrivals, self.config.drain_margin));
        if !horizon.is_finite() {
            return Err(QsError::Config(format!("horizon must be finite, got {horizon}")).into());
        }

        BusStopSim::new(self.config, self.arrivals, horizon)
    }
}
