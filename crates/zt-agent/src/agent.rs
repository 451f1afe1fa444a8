//! A single simulated individual.

use zt_core::{AgentId, Position};

use crate::Species;

/// One Human or Zombie.
///
/// While registered on a grid, `position` is the agent's cell.  During a turn
/// it briefly holds the *candidate* destination (possibly off the board)
/// and `previous_position` holds the last validated cell to roll back to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:                AgentId,
    pub species:           Species,
    pub position:          Position,
    pub previous_position: Position,
}

impl Agent {
    /// A new agent whose previous position equals its current one.
    pub fn new(id: AgentId, species: Species, position: Position) -> Self {
        Self { id, species, position, previous_position: position }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        self.species == Species::Human
    }

    #[inline]
    pub fn is_zombie(&self) -> bool {
        self.species == Species::Zombie
    }

    /// Restore the last validated position after a rejected move.
    #[inline]
    pub fn revert(&mut self) {
        self.position = self.previous_position;
    }
}
