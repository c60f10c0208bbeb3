//! Run configuration.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature) and passed to the simulation driver.  Every field has a
//! default so a partial file is valid.

use crate::{QsError, QsResult};

/// Minutes of service each unit of demand costs (one boarding passenger).
pub const DEFAULT_SERVICE_RATE_PER_UNIT: f64 = 0.3;

/// Minutes appended after the latest arrival to form the run horizon.
pub const DEFAULT_DRAIN_MARGIN: f64 = 60.0;

// ── HorizonPolicy ─────────────────────────────────────────────────────────────

/// What to do with entities still in the system when the horizon is reached.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HorizonPolicy {
    /// Unfinished entities are counted as incomplete and the run succeeds.
    #[default]
    Truncate,
    /// Any unfinished entity turns the run into an error.
    Fail,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of service units at the stop.  Must be at least 1.
    pub capacity: u32,

    /// Service minutes per unit of demand.  Default: 0.3.
    pub service_rate_per_unit: f64,

    /// Minutes added to the latest arrival timestamp to form the horizon.
    /// Default: 60.
    pub drain_margin: f64,

    /// Truncation vs. failure when entities are unfinished at the horizon.
    pub horizon_policy: HorizonPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity:              1,
            service_rate_per_unit: DEFAULT_SERVICE_RATE_PER_UNIT,
            drain_margin:          DEFAULT_DRAIN_MARGIN,
            horizon_policy:        HorizonPolicy::Truncate,
        }
    }
}

impl SimConfig {
    /// Default configuration with the given number of service units.
    pub fn with_capacity(capacity: u32) -> Self {
        Self { capacity, ..Self::default() }
    }

    /// Service duration for an entity carrying `demand` units.
    #[inline]
    pub fn service_duration(&self, demand: f64) -> f64 {
        demand * self.service_rate_per_unit
    }

    /// Check field invariants.
    pub fn validate(&self) -> QsResult<()> {
        if self.capacity == 0 {
            return Err(QsError::Config("capacity must be at least 1".into()));
        }
        if !self.service_rate_per_unit.is_finite() || self.service_rate_per_unit <= 0.0 {
            return Err(QsError::Config(format!(
                "service_rate_per_unit must be positive and finite, got {}",
                self.service_rate_per_unit
            )));
        }
        if !self.drain_margin.is_finite() || self.drain_margin < 0.0 {
            return Err(QsError::Config(format!(
                "drain_margin must be non-negative and finite, got {}",
                self.drain_margin
            )));
        }
        Ok(())
    }
}
