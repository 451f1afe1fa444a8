//! Deterministic simulation-level RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `OutbreakConfig::seed`, and
//! threads it by `&mut` through population seeding and every movement-policy
//! call.  The turn loop is strictly sequential, so the same seed always
//! replays the same sequence of draws and therefore the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Direction, GridBounds, Position};

/// Simulation-level RNG.
///
/// Not `Sync` by intent: the simulation is single-threaded and the draw order
/// is part of the reproducibility contract.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// One of the 8 compass directions, uniformly.
    #[inline]
    pub fn direction(&mut self) -> Direction {
        Direction::ALL[self.0.gen_range(0..Direction::ALL.len())]
    }

    /// A uniformly random on-board position.
    ///
    /// # Panics
    /// Panics if `bounds` has zero width or height (validated configs never
    /// do).
    pub fn position_in(&mut self, bounds: GridBounds) -> Position {
        let x = self.0.gen_range(0..bounds.width);
        let y = self.0.gen_range(0..bounds.height);
        Position::new(x as i32, y as i32)
    }
}
