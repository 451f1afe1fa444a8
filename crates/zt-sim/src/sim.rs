//! The `Sim` struct and its turn loop.

use tracing::{debug, info, warn};

use zt_agent::{Agent, MovementPolicy, Paces, Species, SpeciesPolicy};
use zt_core::{AgentId, OutbreakConfig, Position, SimRng, Turn};
use zt_grid::{GridError, GridStore};

use crate::resolver::{PaceOutcome, resolve_pace};
use crate::seed::{Population, seed_population};
use crate::{Census, RunOutcome, RunSummary, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<P>` owns the board, the run's single RNG, and the movement policy.
/// Each turn:
///
/// 1. **Roster**: snapshot the ids of every live agent, in registry order.
/// 2. **Paces**: for each id still alive, ask the policy for a direction
///    and resolve one pace against the live board.  Zombies created during
///    the pass are not on the roster and wait for the next turn; Humans
///    converted before their slot are skipped.
/// 3. **Census**: count the survivors and report.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: MovementPolicy = SpeciesPolicy> {
    pub(crate) config:      OutbreakConfig,
    pub(crate) grid:        GridStore,
    pub(crate) rng:         SimRng,
    pub(crate) policy:      P,
    pub(crate) paces:       Paces,
    pub(crate) turn:        Turn,
    pub(crate) conversions: usize,
}

impl<P: MovementPolicy> Sim<P> {
    // ── Population ────────────────────────────────────────────────────────

    /// Scatter more agents at random, using the config's retry cap.
    pub fn seed(&mut self, humans: usize, zombies: usize) -> SimResult<()> {
        let population = Population {
            humans,
            zombies,
            max_attempts: self.config.max_seed_attempts,
        };
        seed_population(&mut self.grid, &mut self.rng, population)
    }

    /// Place one agent at an exact cell, with initial-placement rules.
    ///
    /// Returns the id now standing for the placement.  That is a fresh
    /// Zombie's id when a Human is placed among Zombies.
    pub fn spawn(&mut self, species: Species, position: Position) -> SimResult<AgentId> {
        let agent = self.grid.create(species, position);
        self.grid.place(agent, true)?;
        // Whatever the placement resolved to was registered last.
        self.grid
            .agents()
            .last()
            .map(|a| a.id)
            .ok_or_else(|| GridError::Desync("registry empty after placement".into()).into())
    }

    // ── Turn loop ─────────────────────────────────────────────────────────

    /// Give every agent alive right now exactly one pace.
    pub fn advance_turn(&mut self) -> SimResult<Census> {
        let roster: Vec<AgentId> = self.grid.agents().iter().map(|a| a.id).collect();
        let mut converted = 0;
        let mut forfeited = 0;

        for agent in roster {
            if self.grid.agent(agent).is_none() {
                continue;
            }
            match resolve_pace(&mut self.grid, &self.policy, self.paces, &mut self.rng, agent)? {
                PaceOutcome::Completed(outcome) => converted += outcome.conversions().len(),
                PaceOutcome::Forfeited(_) => forfeited += 1,
            }
        }

        #[cfg(debug_assertions)]
        self.grid.check_invariants()?;

        self.turn = self.turn.next();
        self.conversions += converted;
        let census = Census {
            turn: self.turn,
            humans: self.count_humans(),
            zombies: self.count_zombies(),
            converted,
            forfeited,
        };
        debug!(
            turn = %census.turn,
            humans = census.humans,
            zombies = census.zombies,
            converted,
            forfeited,
            "turn complete"
        );
        Ok(census)
    }

    /// Run until no Human is left or `config.max_turns` is reached.
    ///
    /// With `max_turns = None` and no Zombie on the board this never
    /// returns.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while !self.is_over() {
            if self.config.max_turns.is_some_and(|max| self.turn.0 >= max) {
                break;
            }
            self.step(observer)?;
        }

        let summary = self.summary();
        match summary.outcome {
            RunOutcome::Extinction => info!(
                turns = %summary.turns,
                zombies = summary.zombies,
                conversions = summary.conversions,
                "no humans left"
            ),
            RunOutcome::TurnLimit => warn!(
                turns = %summary.turns,
                humans = summary.humans,
                zombies = summary.zombies,
                "turn limit reached with humans alive"
            ),
        }
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Run at most `n` turns, stopping early once no Human is left.
    ///
    /// Ignores `max_turns`.  Useful for tests and incremental stepping.
    pub fn run_turns<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if self.is_over() {
                break;
            }
            self.step(observer)?;
        }
        Ok(())
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Census> {
        observer.on_turn_start(self.turn.next());
        let census = self.advance_turn()?;
        observer.on_turn_end(&census);
        Ok(census)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` once no Human is alive.  Pure; calling it twice without a turn
    /// in between gives the same answer.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.count_humans() == 0
    }

    #[inline]
    pub fn count_humans(&self) -> usize {
        self.grid.count(Species::Human)
    }

    #[inline]
    pub fn count_zombies(&self) -> usize {
        self.grid.count(Species::Zombie)
    }

    /// Every live agent, in turn order.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        self.grid.agents()
    }

    #[inline]
    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &OutbreakConfig {
        &self.config
    }

    /// Turns completed so far.
    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Tallies as of now.  `outcome` is `TurnLimit` while Humans survive.
    pub fn summary(&self) -> RunSummary {
        let humans = self.count_humans();
        RunSummary {
            turns: self.turn,
            humans,
            zombies: self.count_zombies(),
            conversions: self.conversions,
            outcome: if humans == 0 { RunOutcome::Extinction } else { RunOutcome::TurnLimit },
        }
    }
}
