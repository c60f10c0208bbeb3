//! Seeded synthetic arrival schedules.
//!
//! Inter-arrival gaps are exponential with the configured mean (a Poisson
//! arrival stream); demand is a uniform integer in `0..=max_demand`.  The
//! same seed always produces the same schedule.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use qs_core::ArrivalRecord;

use crate::{ArrivalError, ArrivalResult};

/// Parameters of a synthetic schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticSchedule {
    /// Number of arrivals to generate.
    pub count:             usize,
    /// Mean minutes between consecutive arrivals.  Zero puts every arrival
    /// at time zero.
    pub mean_interarrival: f64,
    /// Largest demand a single arrival can carry.
    pub max_demand:        u32,
    pub seed:              u64,
}

impl SyntheticSchedule {
    /// Generate the schedule, sorted by timestamp, first arrival at zero.
    pub fn generate(&self) -> ArrivalResult<Vec<ArrivalRecord>> {
        if !self.mean_interarrival.is_finite() || self.mean_interarrival < 0.0 {
            return Err(ArrivalError::Parse(format!(
                "mean_interarrival must be non-negative and finite, got {}",
                self.mean_interarrival
            )));
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut now = 0.0_f64;
        let mut arrivals = Vec::with_capacity(self.count);

        for i in 0..self.count {
            if i > 0 {
                // Inverse-CDF sample; `1 - u` keeps the argument in (0, 1].
                let u: f64 = rng.r#gen();
                now += -(1.0 - u).ln() * self.mean_interarrival;
            }
            let demand = rng.gen_range(0..=self.max_demand);
            arrivals.push(ArrivalRecord::new(now, f64::from(demand)));
        }
        Ok(arrivals)
    }
}
