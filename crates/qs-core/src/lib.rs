//! `qs-core` — foundational types for the `queuesim` discrete-event engine.
//!
//! This crate is a dependency of every other `qs-*` crate.  It intentionally
//! has no `qs-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `ProcessId`, `ResourceId`, `EventId`                      |
//! | [`arrival`] | `ArrivalRecord`, `horizon_for`                            |
//! | [`time`]    | `SimTime` (simulated minutes)                             |
//! | [`config`]  | `SimConfig`, `HorizonPolicy`                              |
//! | [`error`]   | `QsError`, `QsResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (TOML config) |

pub mod arrival;
pub mod config;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrival::{horizon_for, ArrivalRecord};
pub use config::{HorizonPolicy, SimConfig, DEFAULT_DRAIN_MARGIN, DEFAULT_SERVICE_RATE_PER_UNIT};
pub use error::{QsError, QsResult};
pub use ids::{EventId, ProcessId, ResourceId};
pub use time::SimTime;
