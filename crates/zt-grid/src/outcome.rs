//! What a successful move did to the board.

use std::slice;

use zt_core::{AgentId, Position};

/// One Human replaced by one new Zombie.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    /// The Human's id.  It is gone from the registry for good.
    pub human:    AgentId,
    /// The freshly minted Zombie standing where the Human was converted.
    pub zombie:   AgentId,
    pub position: Position,
}

/// Result of [`GridStore::move_agent`][crate::GridStore::move_agent].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mover relocated; nobody converted.
    Moved,

    /// A Zombie moved in and converted every Human in the destination.
    /// The mover relocated as well.
    Infected(Vec<Conversion>),

    /// A Human walked into Zombies and was converted itself.  The mover's
    /// id no longer exists; `Conversion::zombie` stands at the destination.
    Turned(Conversion),
}

impl MoveOutcome {
    /// Every conversion this move caused, in the order they happened.
    pub fn conversions(&self) -> &[Conversion] {
        match self {
            MoveOutcome::Moved          => &[],
            MoveOutcome::Infected(list) => list,
            MoveOutcome::Turned(one)    => slice::from_ref(one),
        }
    }

    /// `true` if the moving agent still exists under its old id.
    #[inline]
    pub fn mover_survived(&self) -> bool {
        !matches!(self, MoveOutcome::Turned(_))
    }
}
