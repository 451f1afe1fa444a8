//! Simulation time model.
//!
//! Time is a monotonically increasing `Turn` counter.  One turn is one full
//! pass in which every agent alive at the start of the pass attempts exactly
//! one pace.  There is no wall-clock mapping; frame pacing belongs to the
//! presentation layer.

use std::fmt;

/// An absolute turn counter.  `Turn::ZERO` is the seeded, not-yet-stepped
/// board.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
