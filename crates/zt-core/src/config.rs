//! Run configuration.

use crate::{CoreError, CoreResult, GridBounds};

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate (enable the
/// `serde` feature) and handed to `zt_sim::SimBuilder`.  Missing JSON fields
/// fall back to [`OutbreakConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutbreakConfig {
    /// Board width in cells.
    pub grid_width: u32,

    /// Board height in cells.
    pub grid_height: u32,

    /// Humans placed at seed time.  Humans may stack on one cell.
    pub human_count: usize,

    /// Zombies placed at seed time, each onto an empty cell.
    pub zombie_count: usize,

    /// Cells a Human covers in one pace.
    pub human_pace: i32,

    /// Cells a Zombie covers in one pace.
    pub zombie_pace: i32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Stop `Sim::run` after this many turns even if Humans survive.
    /// `None` runs until the last Human is converted, which never happens
    /// on a board with no Zombies.
    pub max_turns: Option<u64>,

    /// Give up seeding after this many consecutive failed attempts to place
    /// one Zombie.  `None` retries forever.
    pub max_seed_attempts: Option<u32>,
}

impl Default for OutbreakConfig {
    fn default() -> Self {
        Self {
            grid_width:        40,
            grid_height:       30,
            human_count:       100,
            zombie_count:      5,
            human_pace:        1,
            zombie_pace:       1,
            seed:              42,
            max_turns:         Some(10_000),
            max_seed_attempts: None,
        }
    }
}

impl OutbreakConfig {
    /// The board extent described by this config.
    #[inline]
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.grid_width, self.grid_height)
    }

    /// Reject configurations that cannot produce a valid run.
    ///
    /// Every Zombie needs its own empty cell at seed time, and Humans are
    /// scattered first, possibly one per cell.  Unless the Zombies fit in
    /// the cells the Humans cannot reach, seeding could spin forever.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(CoreError::Config(format!(
                "grid must be at least 1x1, got {}",
                self.bounds()
            )));
        }
        if self.human_pace < 1 || self.zombie_pace < 1 {
            return Err(CoreError::Config(format!(
                "paces must be positive, got human={} zombie={}",
                self.human_pace, self.zombie_pace
            )));
        }
        let cells = self.bounds().cell_count();
        if self.zombie_count > cells {
            return Err(CoreError::Config(format!(
                "{} zombies cannot each take an empty cell on a {} grid ({cells} cells)",
                self.zombie_count,
                self.bounds()
            )));
        }
        let free = cells - self.human_count.min(cells);
        if self.zombie_count > free {
            return Err(CoreError::Config(format!(
                "{} zombies may not find empty cells: {} humans can cover {} of {cells}",
                self.zombie_count,
                self.human_count,
                cells - free
            )));
        }
        Ok(())
    }
}
