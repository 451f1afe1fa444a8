//! Fluent builder for constructing a [`Sim`].

use zt_agent::{MovementPolicy, Paces, SpeciesPolicy};
use zt_core::{OutbreakConfig, SimRng, Turn};
use zt_grid::GridStore;

use crate::seed::{Population, seed_population};
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Inputs
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `new(config)`   | required                                  |
/// | `.policy(p)`    | [`SpeciesPolicy`]                         |
///
/// `build` validates the config, creates the board, and seeds
/// `config.human_count` Humans and `config.zombie_count` Zombies.  Set both
/// counts to zero and use [`Sim::spawn`] to script an exact layout.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(OutbreakConfig::default()).build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: MovementPolicy = SpeciesPolicy> {
    config: OutbreakConfig,
    policy: P,
}

impl SimBuilder {
    pub fn new(config: OutbreakConfig) -> Self {
        Self { config, policy: SpeciesPolicy }
    }
}

impl<P: MovementPolicy> SimBuilder<P> {
    /// Replace the movement policy.
    pub fn policy<Q: MovementPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder { config: self.config, policy }
    }

    /// Validate the config, seed the board, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let mut grid = GridStore::new(self.config.bounds());
        let mut rng = SimRng::new(self.config.seed);
        seed_population(
            &mut grid,
            &mut rng,
            Population {
                humans:       self.config.human_count,
                zombies:      self.config.zombie_count,
                max_attempts: self.config.max_seed_attempts,
            },
        )?;

        Ok(Sim {
            paces: Paces::new(self.config.human_pace, self.config.zombie_pace),
            config: self.config,
            grid,
            rng,
            policy: self.policy,
            turn: Turn::ZERO,
            conversions: 0,
        })
    }
}
