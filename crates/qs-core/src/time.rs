//! Simulated time model.
//!
//! # Design
//!
//! Time is a real-valued count of simulated minutes since the start of the
//! run.  Service and inter-arrival durations are arbitrary reals, so the
//! engine never steps a fixed granularity: the clock jumps straight to the
//! due time of the next pending event.
//!
//! `SimTime` wraps an `f64` with a *total* order (`f64::total_cmp`) so it can
//! key ordered collections.  Negative zero is folded into positive zero at
//! construction, which keeps `0.0` and `-0.0` from comparing unequal.

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulated instant, in minutes since the start of the run.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Wrap a minute count.
    #[inline]
    pub fn new(minutes: f64) -> SimTime {
        // `-0.0 + 0.0 == +0.0`
        SimTime(minutes + 0.0)
    }

    /// The raw minute count.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }

    /// `false` for NaN and the infinities.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Return the instant `delay` minutes after `self`.
    #[inline]
    pub fn offset(self, delay: f64) -> SimTime {
        SimTime::new(self.0 + delay)
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// Negative if `earlier` is actually later; callers that require a
    /// non-negative span must check ordering first.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl std::hash::Hash for SimTime {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Consistent with `total_cmp` equality.
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        self.offset(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.since(rhs)
    }
}

impl From<f64> for SimTime {
    fn from(minutes: f64) -> SimTime {
        SimTime::new(minutes)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}", self.0)
    }
}
