//! The eight compass directions an agent can pace in.

use std::fmt;

/// One of the 8 compass directions.
///
/// Grid `y` grows downward, so `N` is `-y`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions, clockwise from north.  Uniform random choices index
    /// into this table.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// `(dx, dy)` for a pace of `pace` cells.
    #[inline]
    pub fn delta(self, pace: i32) -> (i32, i32) {
        match self {
            Direction::N  => (0, -pace),
            Direction::NE => (pace, -pace),
            Direction::E  => (pace, 0),
            Direction::SE => (pace, pace),
            Direction::S  => (0, pace),
            Direction::SW => (-pace, pace),
            Direction::W  => (-pace, 0),
            Direction::NW => (-pace, -pace),
        }
    }

    /// `true` for N, E, S and W.
    #[inline]
    pub fn is_cardinal(self) -> bool {
        matches!(self, Direction::N | Direction::E | Direction::S | Direction::W)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::N  => "N",
            Direction::NE => "NE",
            Direction::E  => "E",
            Direction::SE => "SE",
            Direction::S  => "S",
            Direction::SW => "SW",
            Direction::W  => "W",
            Direction::NW => "NW",
        };
        f.write_str(s)
    }
}
