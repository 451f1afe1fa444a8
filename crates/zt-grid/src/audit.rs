//! Full consistency check of a `GridStore`.

use std::collections::HashSet;

use crate::{GridError, GridResult, GridStore};

impl GridStore {
    /// Verify the registry and the cells agree and no cell is mixed.
    ///
    /// O(cells + agents).  Returns [`GridError::Desync`] naming the first
    /// violation found.  Must only be called between operations; a staged
    /// but unresolved [`propose`](Self::propose) is itself a violation.
    pub fn check_invariants(&self) -> GridResult<()> {
        let bounds = self.bounds();
        let mut registered = HashSet::with_capacity(self.len());
        for agent in self.agents() {
            if !registered.insert(agent.id) {
                return Err(desync(format!("{} registered twice", agent.id)));
            }
        }

        let mut seen = HashSet::with_capacity(self.len());
        for (idx, cell) in self.cells().iter().enumerate() {
            let position = bounds.position_of(idx);
            let mut first_species = None;
            for &id in cell {
                let agent = self
                    .agent(id)
                    .ok_or_else(|| desync(format!("{id} in cell {position} is not registered")))?;
                if !seen.insert(id) {
                    return Err(desync(format!("{id} occupies more than one cell slot")));
                }
                if agent.position != position {
                    return Err(desync(format!(
                        "{id} records {} but sits in {position}",
                        agent.position
                    )));
                }
                match first_species {
                    None => first_species = Some(agent.species),
                    Some(s) if s.converts_on_contact(agent.species) => {
                        return Err(desync(format!("cell {position} mixes humans and zombies")));
                    }
                    Some(_) => {}
                }
            }
        }

        if seen.len() != registered.len() {
            return Err(desync(format!(
                "{} registered agents but {} placed in cells",
                registered.len(),
                seen.len()
            )));
        }
        Ok(())
    }
}

fn desync(msg: String) -> GridError {
    GridError::Desync(msg)
}
