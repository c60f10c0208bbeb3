//! `qs-arrivals` — producing the engine's arrival schedule.
//!
//! The engine only accepts a time-sorted list of
//! [`ArrivalRecord`][qs_core::ArrivalRecord]s on a zero-based minute axis.
//! This crate turns raw inputs into that list.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`loader`]    | `load_arrivals_csv`, `load_arrivals_reader`, `parse_clock_minutes` |
//! | [`schedule`]  | `Schedule` — normalised arrivals plus their clock origin  |
//! | [`synthetic`] | `SyntheticSchedule` — seeded random schedules             |
//! | [`error`]     | `ArrivalError`, `ArrivalResult<T>`                        |

pub mod error;
pub mod loader;
pub mod schedule;
pub mod synthetic;

#[cfg(test)]
mod tests;

pub use error::{ArrivalError, ArrivalResult};
pub use loader::{load_arrivals_csv, load_arrivals_reader, parse_clock_minutes};
pub use qs_core::{horizon_for, ArrivalRecord};
pub use schedule::Schedule;
pub use synthetic::SyntheticSchedule;
