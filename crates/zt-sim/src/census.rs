//! Per-turn and per-run tallies handed to observers.

use zt_core::Turn;

/// Board state at the end of one turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Census {
    /// The turn just completed.  The first call to `advance_turn` yields `T1`.
    pub turn:      Turn,
    pub humans:    usize,
    pub zombies:   usize,
    /// Humans converted during this turn.
    pub converted: usize,
    /// Paces rejected as off-board or blocked.
    pub forfeited: usize,
}

/// Why [`Sim::run`][crate::Sim::run] stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// No Humans are left.
    Extinction,
    /// `max_turns` was reached with Humans still alive.
    TurnLimit,
}

/// Final tallies of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Turns completed since seeding.
    pub turns:       Turn,
    pub humans:      usize,
    pub zombies:     usize,
    /// Conversions over the whole run, placement conversions excluded.
    pub conversions: usize,
    pub outcome:     RunOutcome,
}
