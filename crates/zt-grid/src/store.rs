//! The `GridStore` — cell occupancy plus the ordered agent registry.

use tracing::debug;

use zt_agent::{Agent, Species, WorldView};
use zt_core::{AgentId, GridBounds, Position};

use crate::{Conversion, GridError, GridResult};

/// Owns every live agent and the cell each one stands in.
///
/// Two structures are kept in lock-step:
///
/// - `cells`: one `Vec<AgentId>` per cell, row-major.  Occupant order is
///   arrival order, so cell contents are deterministic.
/// - `agents`: the registry, in insertion order.  This is the order turns
///   are processed in and the order nearest-target searches scan.
///
/// Ids are minted here by [`create`](Self::create) and never reused.
pub struct GridStore {
    bounds:  GridBounds,
    cells:   Vec<Vec<AgentId>>,
    agents:  Vec<Agent>,
    next_id: AgentId,
}

impl GridStore {
    /// An empty board of the given size.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            cells: vec![Vec::new(); bounds.cell_count()],
            agents: Vec::new(),
            next_id: AgentId::FIRST,
        }
    }

    #[inline]
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Mint a fresh id and build an unregistered agent at `position`.
    ///
    /// The agent is not on the board until [`place`](Self::place) succeeds.
    /// An id burned by a failed placement is never handed out again.
    pub fn create(&mut self, species: Species, position: Position) -> Agent {
        let id = self.next_id;
        self.next_id = id.next();
        Agent::new(id, species, position)
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Put `agent` on the board at `agent.position`.
    ///
    /// - Off-board positions fail with [`GridError::OutOfBounds`].
    /// - An initial Zombie placement needs an empty cell; any occupant fails
    ///   with [`GridError::OccupiedByIncompatible`].
    /// - Otherwise every occupant is checked with [`Species::will_share`].
    ///
    /// A placement that would leave Humans and Zombies together converts the
    /// Humans on the spot, exactly as a move would: a Human placed among
    /// Zombies is registered as a new Zombie instead.
    ///
    /// Returns the position the agent was placed at, which is always the
    /// requested one.
    pub fn place(&mut self, mut agent: Agent, is_initial_placement: bool) -> GridResult<Position> {
        let position = agent.position;
        let idx = self.cell_index(position)?;
        if self.slot_of(agent.id).is_some() {
            return Err(GridError::AlreadyPlaced(agent.id));
        }

        if is_initial_placement && agent.is_zombie() {
            if let Some(&occupant) = self.cells[idx].first() {
                return Err(GridError::OccupiedByIncompatible {
                    position,
                    mover:    agent.species,
                    occupant: self.species_of(occupant)?,
                });
            }
        }
        let occupants = self.snapshot(idx, None)?;
        if let Some(&(_, occupant)) = occupants.iter().find(|(_, s)| !agent.species.will_share(*s)) {
            return Err(GridError::OccupiedByIncompatible { position, mover: agent.species, occupant });
        }

        let zombies_present = occupants.iter().any(|&(_, s)| s == Species::Zombie);
        match agent.species {
            Species::Human if zombies_present => {
                let zombie = self.register_zombie(position, idx);
                debug!(human = %agent.id, %zombie, %position, "human converted on placement");
            }
            species => {
                if species == Species::Zombie {
                    self.convert_humans(&occupants, idx);
                }
                let id = agent.id;
                agent.previous_position = position;
                self.agents.push(agent);
                self.attach(id, idx);
            }
        }
        Ok(position)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The cell holding `agent`, found by scanning every cell.
    ///
    /// [`GridError::CharacterNotFound`] means the caller and the board have
    /// drifted apart; it is never an expected outcome.
    pub fn find(&self, agent: AgentId) -> GridResult<Position> {
        self.find_cell(agent).map(|idx| self.bounds.position_of(idx))
    }

    /// Number of live agents of `species`.
    pub fn count(&self, species: Species) -> usize {
        self.agents.iter().filter(|a| a.species == species).count()
    }

    /// The registry entry for `agent`, if it is alive.
    pub fn agent(&self, agent: AgentId) -> Option<&Agent> {
        self.slot_of(agent).map(|slot| &self.agents[slot])
    }

    /// Every live agent, in registry (turn) order.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// A read-only view for movement policies.
    #[inline]
    pub fn view(&self) -> WorldView<'_> {
        WorldView::new(&self.agents)
    }

    /// Ids in the cell at `position`, in arrival order.  Empty for off-board
    /// positions.
    pub fn occupants(&self, position: Position) -> &[AgentId] {
        match self.bounds.index_of(position) {
            Some(idx) => &self.cells[idx],
            None => &[],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    // ── Crate-internal helpers ────────────────────────────────────────────

    pub(crate) fn cells(&self) -> &[Vec<AgentId>] {
        &self.cells
    }

    pub(crate) fn cell_index(&self, position: Position) -> GridResult<usize> {
        self.bounds
            .index_of(position)
            .ok_or(GridError::OutOfBounds { position, bounds: self.bounds })
    }

    pub(crate) fn slot_of(&self, agent: AgentId) -> Option<usize> {
        self.agents.iter().position(|a| a.id == agent)
    }

    pub(crate) fn agent_mut(&mut self, agent: AgentId) -> GridResult<&mut Agent> {
        let slot = self.slot_of(agent).ok_or(GridError::CharacterNotFound(agent))?;
        Ok(&mut self.agents[slot])
    }

    pub(crate) fn find_cell(&self, agent: AgentId) -> GridResult<usize> {
        self.cells
            .iter()
            .position(|cell| cell.contains(&agent))
            .ok_or(GridError::CharacterNotFound(agent))
    }

    fn species_of(&self, agent: AgentId) -> GridResult<Species> {
        self.agent(agent)
            .map(|a| a.species)
            .ok_or_else(|| GridError::Desync(format!("cell holds unregistered {agent}")))
    }

    /// Copy of a cell's occupants with their species, taken before any
    /// mutation.  `exclude` drops the mover itself when it stays in place.
    pub(crate) fn snapshot(
        &self,
        idx:     usize,
        exclude: Option<AgentId>,
    ) -> GridResult<Vec<(AgentId, Species)>> {
        self.cells[idx]
            .iter()
            .filter(|&&id| Some(id) != exclude)
            .map(|&id| Ok((id, self.species_of(id)?)))
            .collect()
    }

    /// Take `agent` out of cell `idx`, keeping the other occupants' order.
    pub(crate) fn detach(&mut self, agent: AgentId, idx: usize) {
        let cell = &mut self.cells[idx];
        if let Some(i) = cell.iter().position(|&a| a == agent) {
            cell.remove(i);
        }
    }

    #[inline]
    pub(crate) fn attach(&mut self, agent: AgentId, idx: usize) {
        self.cells[idx].push(agent);
    }

    /// Delete `agent` from the registry and from cell `idx`.
    pub(crate) fn remove(&mut self, agent: AgentId, idx: usize) {
        if let Some(slot) = self.slot_of(agent) {
            self.agents.remove(slot);
        }
        self.detach(agent, idx);
    }

    /// Register a brand-new Zombie at `position` (cell `idx`).
    pub(crate) fn register_zombie(&mut self, position: Position, idx: usize) -> AgentId {
        let zombie = self.create(Species::Zombie, position);
        let id = zombie.id;
        self.agents.push(zombie);
        self.attach(id, idx);
        id
    }

    /// Replace every Human in `occupants` with a new Zombie in cell `idx`.
    pub(crate) fn convert_humans(
        &mut self,
        occupants: &[(AgentId, Species)],
        idx:       usize,
    ) -> Vec<Conversion> {
        let position = self.bounds.position_of(idx);
        occupants
            .iter()
            .filter(|&&(_, s)| s == Species::Human)
            .map(|&(human, _)| {
                self.remove(human, idx);
                let zombie = self.register_zombie(position, idx);
                debug!(%human, %zombie, %position, "human converted");
                Conversion { human, zombie, position }
            })
            .collect()
    }
}
