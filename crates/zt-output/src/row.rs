//! Plain data row types written by output backends.

use zt_sim::Census;

/// Species counts at the end of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensusRow {
    pub turn:      u64,
    pub humans:    u64,
    pub zombies:   u64,
    pub converted: u64,
    pub forfeited: u64,
}

impl From<&Census> for CensusRow {
    fn from(c: &Census) -> Self {
        Self {
            turn:      c.turn.0,
            humans:    c.humans as u64,
            zombies:   c.zombies as u64,
            converted: c.converted as u64,
            forfeited: c.forfeited as u64,
        }
    }
}
