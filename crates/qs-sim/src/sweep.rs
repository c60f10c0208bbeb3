//! Capacity sweeps: the same schedule through stops of different sizes.

use qs_core::{ArrivalRecord, SimConfig, SimTime};

use crate::{NoopObserver, RunOutcome, SimBuilder, SimResult};

/// The outcome of one run in a sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepPoint {
    pub capacity: u32,
    pub outcome:  RunOutcome,
}

/// Run one independent simulation per entry of `capacities`.
///
/// Every run uses `config` with its capacity overridden.  Results come back
/// in the order of `capacities`.  With the `parallel` feature the runs are
/// spread over Rayon's pool; output is identical to the sequential path.
pub fn sweep_capacities(
    arrivals:   &[ArrivalRecord],
    config:     &SimConfig,
    horizon:    Option<SimTime>,
    capacities: &[u32],
) -> SimResult<Vec<SweepPoint>> {
    let run_one = |capacity: u32| -> SimResult<SweepPoint> {
        let config = SimConfig { capacity, ..config.clone() };
        let mut builder = SimBuilder::new(config, arrivals.to_vec());
        if let Some(h) = horizon {
            builder = builder.horizon(h);
        }
        let outcome = builder.build()?.run(&mut NoopObserver)?;
        Ok(SweepPoint { capacity, outcome })
    };

    #[cfg(not(feature = "parallel"))]
    {
        capacities.iter().map(|&c| run_one(c)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        capacities.par_iter().map(|&c| run_one(c)).collect()
    }
}
