//! Strongly typed agent identity.
//!
//! Identities are minted by the grid store from a monotonically increasing
//! counter and are never reused: a converted Human's id disappears for good
//! and its replacement Zombie gets the next fresh value.

use std::fmt;

/// Stable identity of one simulated agent.
///
/// `Copy + Ord + Hash` so it can key maps and be compared without ceremony.
/// Ordering follows creation order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// The first id handed out by a fresh allocator.
    pub const FIRST: AgentId = AgentId(0);

    /// The id minted immediately after `self`.
    ///
    /// # Panics
    /// Panics in debug mode after `u32::MAX` agents.
    #[inline]
    pub fn next(self) -> AgentId {
        AgentId(self.0 + 1)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
