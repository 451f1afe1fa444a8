//! Random initial population.

use tracing::info;

use zt_agent::Species;
use zt_core::SimRng;
use zt_grid::GridStore;

use crate::{SimError, SimResult};

/// How many agents to scatter and how hard to try for Zombies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Population {
    pub humans:       usize,
    pub zombies:      usize,
    /// Consecutive failed draws allowed for one Zombie.  `None` retries
    /// forever.
    pub max_attempts: Option<u32>,
}

/// Scatter `population` over `grid` at uniformly random cells.
///
/// Humans go first and may stack.  Each Zombie then redraws until it lands
/// on an empty cell.  With `max_attempts` set, a Zombie that misses that many
/// times in a row fails the whole call with [`SimError::SeedingStalled`];
/// agents already placed stay on the board.
pub fn seed_population(
    grid:       &mut GridStore,
    rng:        &mut SimRng,
    population: Population,
) -> SimResult<()> {
    let bounds = grid.bounds();

    for _ in 0..population.humans {
        let human = grid.create(Species::Human, rng.position_in(bounds));
        grid.place(human, true)?;
    }

    for placed in 0..population.zombies {
        let mut attempts = 0u32;
        loop {
            let zombie = grid.create(Species::Zombie, rng.position_in(bounds));
            match grid.place(zombie, true) {
                Ok(_) => break,
                Err(e) if e.is_recoverable() => {
                    attempts += 1;
                    if population.max_attempts.is_some_and(|max| attempts >= max) {
                        return Err(SimError::SeedingStalled {
                            placed,
                            requested: population.zombies,
                            attempts,
                        });
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    info!(
        humans = population.humans,
        zombies = population.zombies,
        %bounds,
        "population seeded"
    );
    Ok(())
}
