//! One agent's pace: decide, stage, move, and roll back on rejection.

use tracing::trace;

use zt_agent::{MovementPolicy, Paces};
use zt_core::{AgentId, SimRng};
use zt_grid::{GridError, GridStore, MoveOutcome};

use crate::SimResult;

/// What happened to one pace attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaceOutcome {
    /// The grid accepted the move.
    Completed(MoveOutcome),
    /// The candidate was off the board or blocked.  The agent stays where it
    /// was and does not retry this turn.
    Forfeited(GridError),
}

/// Resolve a single pace for `agent`.
///
/// The policy sees the board as it stands now, including every move already
/// made this turn.  A pace is all-or-nothing: the agent either lands on the
/// candidate cell or ends the pace on its previous one.
///
/// Recoverable grid errors become [`PaceOutcome::Forfeited`]; anything else
/// is propagated.
pub fn resolve_pace<P: MovementPolicy>(
    grid:   &mut GridStore,
    policy: &P,
    paces:  Paces,
    rng:    &mut SimRng,
    agent:  AgentId,
) -> SimResult<PaceOutcome> {
    let (direction, candidate) = {
        let record = grid.agent(agent).ok_or(GridError::CharacterNotFound(agent))?;
        let direction = policy.choose(record, &grid.view(), rng);
        (direction, record.position.step(direction, paces.of(record.species)))
    };

    grid.propose(agent, candidate)?;
    match grid.move_agent(agent) {
        Ok(outcome) => Ok(PaceOutcome::Completed(outcome)),
        Err(e) if e.is_recoverable() => {
            grid.revert(agent)?;
            trace!(%agent, %direction, error = %e, "pace forfeited");
            Ok(PaceOutcome::Forfeited(e))
        }
        Err(e) => Err(e.into()),
    }
}
