//! Read-only simulation state passed to every movement decision.

use zt_core::Position;

use crate::Agent;

/// A read-only view of the live agent registry, in turn-processing order.
///
/// Built by the grid store for each decision.  Iteration order is the
/// registry's insertion order, which is what makes nearest-target tie-breaks
/// deterministic.
#[derive(Clone, Copy)]
pub struct WorldView<'a> {
    agents: &'a [Agent],
}

impl<'a> WorldView<'a> {
    #[inline]
    pub fn new(agents: &'a [Agent]) -> Self {
        Self { agents }
    }

    /// Every live agent, in registry order.
    #[inline]
    pub fn agents(&self) -> &'a [Agent] {
        self.agents
    }

    /// Live Humans, in registry order.
    pub fn humans(&self) -> impl Iterator<Item = &'a Agent> + 'a {
        self.agents.iter().filter(|a| a.is_human())
    }

    /// The Human closest to `from` by Euclidean distance.
    ///
    /// Only a strictly smaller distance replaces the current best, so among
    /// equidistant Humans the first in registry order wins.
    pub fn nearest_human(&self, from: Position) -> Option<&'a Agent> {
        let mut best: Option<(&'a Agent, f64)> = None;
        for human in self.humans() {
            let d = from.distance(human.position);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((human, d)),
            }
        }
        best.map(|(human, _)| human)
    }
}
