//! Moving registered agents: candidate staging, validation, conversion, and
//! relocation.
//!
//! # Protocol
//!
//! ```text
//! propose(id, candidate)   previous_position := position; position := candidate
//! move_agent(id)           validate, resolve conversions, relocate
//!   └─ on recoverable Err: revert(id)   position := previous_position
//! ```
//!
//! `move_agent` validates everything before touching the board, so a failed
//! move needs no undo beyond restoring the agent's own position field.

use tracing::{debug, trace};

use zt_agent::Species;
use zt_core::{AgentId, Position};

use crate::{Conversion, GridError, GridResult, GridStore, MoveOutcome};

impl GridStore {
    /// Stage `candidate` as `agent`'s destination and remember where it was.
    ///
    /// The board is not touched; only the registry record changes.
    pub fn propose(&mut self, agent: AgentId, candidate: Position) -> GridResult<()> {
        let record = self.agent_mut(agent)?;
        record.previous_position = record.position;
        record.position = candidate;
        Ok(())
    }

    /// Roll `agent` back to its last validated position after a rejected
    /// move.
    pub fn revert(&mut self, agent: AgentId) -> GridResult<()> {
        self.agent_mut(agent)?.revert();
        Ok(())
    }

    /// Move `agent` into the cell its `position` currently names.
    ///
    /// The destination's occupants are snapshotted before anything changes,
    /// then:
    ///
    /// - **Zombie mover**: every Human in the snapshot is replaced by a new
    ///   Zombie in that cell, and the mover relocates.  Any Zombie already
    ///   there makes the move fail instead.
    /// - **Human mover**: if the snapshot holds any Zombie, the mover is
    ///   deleted (from the registry and its current cell) and a new Zombie
    ///   is registered at the destination.  Nothing else happens.
    /// - Otherwise the mover relocates.
    ///
    /// # Errors
    ///
    /// - [`GridError::OutOfBounds`] if the destination is off the board.
    /// - [`GridError::OccupiedByIncompatible`] if an occupant that conversion
    ///   would not remove cannot share with the mover.
    /// - [`GridError::CharacterNotFound`] if `agent` is not registered or not
    ///   in any cell.
    ///
    /// On error the board is unchanged and the caller should
    /// [`revert`](Self::revert).
    pub fn move_agent(&mut self, agent: AgentId) -> GridResult<MoveOutcome> {
        let (species, destination) = {
            let record = self.agent(agent).ok_or(GridError::CharacterNotFound(agent))?;
            (record.species, record.position)
        };
        let dest_idx = self.cell_index(destination)?;
        let from_idx = self.find_cell(agent)?;
        let occupants = self.snapshot(dest_idx, Some(agent))?;

        let converts_occupants = species == Species::Zombie;
        let blocker = occupants.iter().find(|&&(_, other)| {
            let converted = converts_occupants && other == Species::Human;
            !converted && !species.will_share(other)
        });
        if let Some(&(_, occupant)) = blocker {
            return Err(GridError::OccupiedByIncompatible {
                position: destination,
                mover:    species,
                occupant,
            });
        }

        // Validation done; everything below mutates.
        match species {
            Species::Zombie => {
                let conversions = self.convert_humans(&occupants, dest_idx);
                self.relocate(agent, from_idx, dest_idx);
                if conversions.is_empty() {
                    Ok(MoveOutcome::Moved)
                } else {
                    Ok(MoveOutcome::Infected(conversions))
                }
            }
            Species::Human => {
                if occupants.iter().any(|&(_, s)| s == Species::Zombie) {
                    self.remove(agent, from_idx);
                    let zombie = self.register_zombie(destination, dest_idx);
                    debug!(human = %agent, %zombie, position = %destination, "human walked into zombies");
                    Ok(MoveOutcome::Turned(Conversion { human: agent, zombie, position: destination }))
                } else {
                    self.relocate(agent, from_idx, dest_idx);
                    Ok(MoveOutcome::Moved)
                }
            }
        }
    }

    fn relocate(&mut self, agent: AgentId, from_idx: usize, dest_idx: usize) {
        self.detach(agent, from_idx);
        self.attach(agent, dest_idx);
        trace!(%agent, from = %self.bounds().position_of(from_idx), to = %self.bounds().position_of(dest_idx), "relocated");
    }
}
