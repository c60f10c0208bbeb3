//! `qs-sim` — process scheduler, FIFO resource, and the bus-stop driver.
//!
//! # Dispatch loop
//!
//! ```text
//! while let Some(t) = queue.peek_time():
//!   if t >= horizon: park clock on horizon; stop
//!   ① Advance   — pop (due_time, sequence_id); now = due_time
//!   ② Resume    — Process::resume on exactly the targeted process
//!   ③ Commands  — Release(r)  → free a unit, grant head of line at `now`
//!                 Spawn(p)    → start event for p at `now`
//!                 Record(m)   → append to the metrics list
//!   ④ Suspend   — Timeout(d)  → event at now + d
//!                 Grant(r)    → Resource::request
//!                 Complete    → drop the process
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs capacity sweeps on Rayon's thread pool.            |
//! | `fx-hash`  | FxHash instead of SipHash for the process table.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qs_core::{ArrivalRecord, SimConfig};
//! use qs_sim::{NoopObserver, SimBuilder};
//!
//! let arrivals = vec![ArrivalRecord::new(0.0, 12.0), ArrivalRecord::new(5.0, 3.0)];
//! let outcome = SimBuilder::new(SimConfig::with_capacity(1), arrivals)
//!     .build()?
//!     .run(&mut NoopObserver)?;
//! println!("{} of {} completed", outcome.completed, outcome.arrivals);
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod resource;
pub mod sim;
pub mod sweep;


pub use builder::SimBuilder;
pub use driver::{run, ArrivalGenerator, BusStopSim, RunOutcome, ServiceProcess};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use resource::{Admission, Resource};
pub use sim::{Sim, StopReason};
pub use sweep::{sweep_capacities, SweepPoint};
