//! Simulation observer trait for progress reporting and data collection.

use zt_core::Turn;

use crate::{Census, RunSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_turns`][crate::Sim::run_turns] at turn boundaries.
///
/// Every hook defaults to a no-op.
///
/// # Example — extinction watcher
///
/// ```rust,ignore
/// struct LastHuman { turn: Option<Turn> }
///
/// impl SimObserver for LastHuman {
///     fn on_turn_end(&mut self, census: &Census) {
///         if census.humans == 0 && self.turn.is_none() {
///             self.turn = Some(census.turn);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any agent moves in `turn`.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called after every agent alive at the start of the turn has had its
    /// pace.
    fn on_turn_end(&mut self, _census: &Census) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
