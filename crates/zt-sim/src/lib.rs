//! `zt-sim` — turn loop orchestrator for the rust_zt outbreak simulator.
//!
//! # Turn loop
//!
//! ```text
//! build:   validate config → GridStore → seed Humans, then Zombies
//! loop until no Humans (or max_turns):
//!   ① Roster  — snapshot live ids in registry order
//!   ② Paces   — for each id still alive:
//!                 policy.choose → candidate = position + delta(dir, pace)
//!                 propose → move_agent
//!                   Ok        → conversions counted
//!                   OutOfBounds / OccupiedByIncompatible → revert, forfeit
//!                   anything else → abort the run
//!   ③ Census  — counts reported to the observer
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use zt_core::OutbreakConfig;
//! use zt_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(OutbreakConfig::default()).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{} conversions in {}", summary.conversions, summary.turns);
//! ```

pub mod builder;
pub mod census;
pub mod error;
pub mod observer;
pub mod resolver;
pub mod seed;
pub mod sim;


pub use builder::SimBuilder;
pub use census::{Census, RunOutcome, RunSummary};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use resolver::{PaceOutcome, resolve_pace};
pub use seed::{Population, seed_population};
pub use sim::Sim;
