//! Grid geometry: integer cell positions and fixed board bounds.
//!
//! Coordinates grow right (`x`) and down (`y`).  Positions are signed because
//! a candidate destination computed by a movement step may fall off the board
//! (negative or past the far edge) before the grid store rejects it.

use std::fmt;

use crate::Direction;

// ── Position ──────────────────────────────────────────────────────────────────

/// A cell coordinate `(x, y)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one pace of `pace` cells away in `direction`.
    ///
    /// No bounds check; the result may be off the board.  Coordinates
    /// saturate at the `i32` limits, which are off every board.
    #[inline]
    pub fn step(self, direction: Direction, pace: i32) -> Position {
        let (dx, dy) = direction.delta(pace);
        Position::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Signed `(dx, dy)` from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Position) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance to `other`, in cells.
    pub fn distance(self, other: Position) -> f64 {
        let (dx, dy) = self.delta_to(other);
        f64::from(dx).hypot(f64::from(dy))
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── GridBounds ────────────────────────────────────────────────────────────────

/// The fixed `width × height` extent of a board.
///
/// Valid positions are `[0, width) × [0, height)`.  Cells are laid out
/// row-major: `index = y * width + x`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub width:  u32,
    pub height: u32,
}

impl GridBounds {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` if `pos` lies on the board.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as u32) < self.width
            && (pos.y as u32) < self.height
    }

    /// Row-major cell index for `pos`, or `None` if it is off the board.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).  `index` must be
    /// `< cell_count()`.
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
