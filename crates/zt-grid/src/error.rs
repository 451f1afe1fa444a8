//! Grid-store error type.

use thiserror::Error;

use zt_agent::Species;
use zt_core::{AgentId, GridBounds, Position};

/// Errors produced by `zt-grid`.
///
/// `OutOfBounds` and `OccupiedByIncompatible` are ordinary outcomes of a
/// rejected pace: the caller reverts the agent and carries on.  The rest
/// mean the registry and the caller disagree about what is on the board and
/// must be propagated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("{position} is outside the {bounds} grid")]
    OutOfBounds { position: Position, bounds: GridBounds },

    #[error("a {mover} cannot share {position} with a {occupant}")]
    OccupiedByIncompatible {
        position: Position,
        mover:    Species,
        occupant: Species,
    },

    #[error("agent {0} is not on the grid")]
    CharacterNotFound(AgentId),

    #[error("agent {0} is already on the grid")]
    AlreadyPlaced(AgentId),

    #[error("grid desync: {0}")]
    Desync(String),
}

impl GridError {
    /// `true` for errors that only forfeit a pace.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GridError::OutOfBounds { .. } | GridError::OccupiedByIncompatible { .. })
    }
}

pub type GridResult<T> = Result<T, GridError>;
