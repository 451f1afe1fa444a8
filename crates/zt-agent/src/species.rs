//! Species variants and their fixed rules.

use std::fmt;

/// The two kinds of agent.
///
/// Conversion is one-way: a Human can be replaced by a new Zombie, never the
/// reverse.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Human,
    Zombie,
}

impl Species {
    /// Whether an agent of species `self` may enter a cell holding `other`.
    ///
    /// | self \ other | Human | Zombie |
    /// |--------------|-------|--------|
    /// | Human        | yes   | yes, converts the Human |
    /// | Zombie       | yes, converts the Human | no |
    ///
    /// The table is read directionally: callers check the mover against each
    /// occupant.
    #[inline]
    pub fn will_share(self, other: Species) -> bool {
        !matches!((self, other), (Species::Zombie, Species::Zombie))
    }

    /// `true` if `self` and `other` meeting in one cell converts the Human.
    #[inline]
    pub fn converts_on_contact(self, other: Species) -> bool {
        self != other
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Species::Human  => "human",
            Species::Zombie => "zombie",
        };
        f.write_str(s)
    }
}

// ── Paces ─────────────────────────────────────────────────────────────────────

/// Per-species step size in cells.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paces {
    pub human:  i32,
    pub zombie: i32,
}

impl Paces {
    pub const fn new(human: i32, zombie: i32) -> Self {
        Self { human, zombie }
    }

    /// Step size for `species`.
    #[inline]
    pub fn of(&self, species: Species) -> i32 {
        match species {
            Species::Human  => self.human,
            Species::Zombie => self.zombie,
        }
    }
}

impl Default for Paces {
    /// One cell per pace for both species.
    fn default() -> Self {
        Self::new(1, 1)
    }
}
