//! The bus-stop scenario: an arrival generator feeding service processes
//! that contend for one shared resource.

use qs_core::{ArrivalRecord, HorizonPolicy, ResourceId, SimConfig, SimTime};
use qs_process::{MetricsRecord, Process, ProcessContext, ProcessError, ProcessResult, Step};

use crate::{Sim, SimError, SimObserver, SimResult, StopReason};

// ── ArrivalGenerator ──────────────────────────────────────────────────────────

/// Walks the arrival schedule, sleeping until each timestamp and then
/// spawning one [`ServiceProcess`] for it.
pub struct ArrivalGenerator {
    arrivals:     Vec<ArrivalRecord>,
    resource:     ResourceId,
    service_rate: f64,
    /// Index of the next record to sleep towards.
    next:         usize,
    /// Record whose timestamp the generator is currently sleeping towards.
    due:          Option<usize>,
    previous:     SimTime,
}

impl ArrivalGenerator {
    pub fn new(arrivals: Vec<ArrivalRecord>, resource: ResourceId, service_rate: f64) -> Self {
        Self {
            arrivals,
            resource,
            service_rate,
            next:     0,
            due:      None,
            previous: SimTime::ZERO,
        }
    }
}

impl Process for ArrivalGenerator {
    fn name(&self) -> &'static str {
        "arrival-generator"
    }

    fn resume(&mut self, ctx: &mut ProcessContext) -> ProcessResult<Step> {
        // The timeout for `due` has elapsed: that entity arrives now.
        if let Some(index) = self.due.take() {
            let demand = self.arrivals[index].demand;
            ctx.spawn(ServiceProcess::new(
                index,
                demand,
                self.resource,
                demand * self.service_rate,
            ));
        }

        let Some(record) = self.arrivals.get(self.next) else {
            return Ok(Step::Complete);
        };
        let index = self.next;

        if !record.timestamp.is_finite() || record.timestamp < self.previous {
            return Err(ProcessError::NonMonotonicArrival {
                index,
                timestamp: record.timestamp,
                previous:  self.previous,
            });
        }
        if !record.demand.is_finite() || record.demand < 0.0 {
            return Err(ProcessError::InvalidDemand { index, demand: record.demand });
        }

        // Clamp: `now` may sit one ulp past an equal timestamp after the
        // previous `now + delay` round trip.
        let delay = record.timestamp.since(ctx.now()).max(0.0);
        self.previous = record.timestamp;
        self.due = Some(index);
        self.next += 1;
        Ok(Step::timeout(delay))
    }
}

// ── ServiceProcess ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stage {
    Arriving,
    Waiting,
    InService,
    Departed,
}

/// One entity's lifecycle: arrive, queue for a unit, get served, leave.
pub struct ServiceProcess {
    index:         usize,
    demand:        f64,
    resource:      ResourceId,
    service_time:  f64,
    stage:         Stage,
    arrival_time:  SimTime,
    service_start: SimTime,
}

impl ServiceProcess {
    pub fn new(index: usize, demand: f64, resource: ResourceId, service_time: f64) -> Self {
        Self {
            index,
            demand,
            resource,
            service_time,
            stage:         Stage::Arriving,
            arrival_time:  SimTime::ZERO,
            service_start: SimTime::ZERO,
        }
    }
}

impl Process for ServiceProcess {
    fn name(&self) -> &'static str {
        "service"
    }

    fn resume(&mut self, ctx: &mut ProcessContext) -> ProcessResult<Step> {
        match self.stage {
            Stage::Arriving => {
                self.arrival_time = ctx.now();
                self.stage = Stage::Waiting;
                Ok(Step::request(self.resource))
            }
            Stage::Waiting => {
                self.service_start = ctx.now();
                self.stage = Stage::InService;
                Ok(Step::timeout(self.service_time))
            }
            Stage::InService => {
                ctx.release(self.resource);
                let record = MetricsRecord::new(
                    self.index,
                    self.demand,
                    self.arrival_time,
                    self.service_start,
                    self.service_time,
                );
                debug_assert!(
                    (record.total_time - ctx.now().since(self.arrival_time)).abs() < 1e-6,
                    "recorded total drifted from the clock"
                );
                ctx.record(record);
                self.stage = Stage::Departed;
                Ok(Step::Complete)
            }
            Stage::Departed => Err(ProcessError::ResumedAfterCompletion { name: "service" }),
        }
    }
}

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// Everything a finished run hands back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    /// Per-entity metrics, in completion order.
    pub records:           Vec<MetricsRecord>,
    /// Number of records in the input schedule.
    pub arrivals:          usize,
    /// Entities that finished service within the horizon.
    pub completed:         usize,
    /// Entities that did not finish (still waiting, in service, or never
    /// arrived) when the run stopped.
    pub incomplete:        usize,
    /// Clock value when the run stopped.
    pub final_time:        SimTime,
    pub horizon:           SimTime,
    pub stop:              StopReason,
    pub events_dispatched: u64,
    /// Largest number of units busy at once.
    pub peak_in_service:   usize,
    /// Longest waiting line observed.
    pub peak_waiting:      usize,
}

impl RunOutcome {
    /// `true` if some arrivals produced no metrics record.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.incomplete > 0
    }
}

// ── BusStopSim ────────────────────────────────────────────────────────────────

/// A ready-to-run bus-stop scenario.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct BusStopSim {
    pub config:  SimConfig,
    pub horizon: SimTime,
    /// The underlying scheduler, exposed for inspection and stepping.
    pub sim:     Sim,
    /// The shared service-unit pool.
    pub stop:    ResourceId,
    arrivals:    usize,
}

impl BusStopSim {
    pub(crate) fn new(
        config:   SimConfig,
        arrivals: Vec<ArrivalRecord>,
        horizon:  SimTime,
    ) -> SimResult<Self> {
        let mut sim = Sim::new();
        let stop = sim.add_resource(config.capacity)?;
        let count = arrivals.len();
        sim.spawn(ArrivalGenerator::new(arrivals, stop, config.service_rate_per_unit))?;
        Ok(Self { config, horizon, sim, stop, arrivals: count })
    }

    /// Number of arrivals in the schedule.
    pub fn arrivals(&self) -> usize {
        self.arrivals
    }

    /// Run to the horizon (or queue exhaustion) and collect the outcome.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<RunOutcome> {
        tracing::info!(
            arrivals = self.arrivals,
            capacity = self.config.capacity,
            horizon = %self.horizon,
            "bus-stop run starting"
        );

        let stop = self.sim.run_until(self.horizon, observer)?;
        let records = self.sim.take_records();
        let completed = records.len();
        let incomplete = self.arrivals.saturating_sub(completed);
        let resource = &self.sim.resources()[self.stop.index()];

        let outcome = RunOutcome {
            arrivals:          self.arrivals,
            completed,
            incomplete,
            final_time:        self.sim.now(),
            horizon:           self.horizon,
            stop,
            events_dispatched: self.sim.events_dispatched(),
            peak_in_service:   resource.peak_in_service(),
            peak_waiting:      resource.peak_waiting(),
            records,
        };

        if outcome.is_truncated() {
            tracing::warn!(
                incomplete,
                horizon = %self.horizon,
                "arrivals left unfinished at the horizon"
            );
            if self.config.horizon_policy == HorizonPolicy::Fail {
                return Err(SimError::HorizonTruncated { incomplete });
            }
        }

        tracing::info!(
            completed,
            incomplete,
            final_time = %outcome.final_time,
            events = outcome.events_dispatched,
            "bus-stop run finished"
        );
        Ok(outcome)
    }
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// Simulate `arrivals` through a stop with `capacity` units until `horizon`,
/// using default service rate and the truncation policy.
pub fn run(arrivals: &[ArrivalRecord], capacity: u32, horizon: SimTime) -> SimResult<RunOutcome> {
    crate::SimBuilder::new(SimConfig::with_capacity(capacity), arrivals.to_vec())
        .horizon(horizon)
        .build()?
        .run(&mut crate::NoopObserver)
}
