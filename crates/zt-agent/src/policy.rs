//! The `MovementPolicy` trait — how an agent picks its pace each turn.

use zt_core::{Direction, Position, SimRng};

use crate::{Agent, Species, WorldView};

/// Pluggable movement decision.
///
/// Called once per agent per turn with a read-only [`WorldView`] and the
/// run's [`SimRng`].  All randomness must come from `rng` so a run replays
/// exactly from its seed.
///
/// # Example
///
/// ```rust
/// use zt_agent::{Agent, MovementPolicy, WorldView};
/// use zt_core::{Direction, SimRng};
///
/// /// Everyone drifts east.
/// struct EastWind;
///
/// impl MovementPolicy for EastWind {
///     fn choose(&self, _agent: &Agent, _world: &WorldView<'_>, _rng: &mut SimRng) -> Direction {
///         Direction::E
///     }
/// }
/// ```
pub trait MovementPolicy {
    fn choose(&self, agent: &Agent, world: &WorldView<'_>, rng: &mut SimRng) -> Direction;
}

// ── SpeciesPolicy ─────────────────────────────────────────────────────────────

/// The standard rules, dispatched on [`Species`]:
///
/// - **Human**: a uniformly random compass direction, blind to the world.
/// - **Zombie**: a pure N/E/S/W step toward the nearest Human along the axis
///   with the larger gap (horizontal wins ties); a random direction when no
///   Human is left.
#[derive(Copy, Clone, Debug, Default)]
pub struct SpeciesPolicy;

impl MovementPolicy for SpeciesPolicy {
    fn choose(&self, agent: &Agent, world: &WorldView<'_>, rng: &mut SimRng) -> Direction {
        match agent.species {
            Species::Human => rng.direction(),
            Species::Zombie => match world.nearest_human(agent.position) {
                Some(target) => pursue(agent.position, target.position),
                None => rng.direction(),
            },
        }
    }
}

/// The single-axis greedy step from `from` toward `target`.
pub fn pursue(from: Position, target: Position) -> Direction {
    let (dx, dy) = from.delta_to(target);
    if dx.abs() >= dy.abs() {
        if dx > 0 { Direction::E } else { Direction::W }
    } else if dy > 0 {
        Direction::S
    } else {
        Direction::N
    }
}

// ── ForcedDirection ───────────────────────────────────────────────────────────

/// A policy that always answers the same direction, for every species.
///
/// Used to script scenarios: the movement rules are bypassed but bounds,
/// space sharing, and conversion still apply.
#[derive(Copy, Clone, Debug)]
pub struct ForcedDirection(pub Direction);

impl MovementPolicy for ForcedDirection {
    fn choose(&self, _agent: &Agent, _world: &WorldView<'_>, _rng: &mut SimRng) -> Direction {
        self.0
    }
}
