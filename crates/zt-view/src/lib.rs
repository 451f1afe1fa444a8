//! `zt-view` — pixel geometry for drawing a board.
//!
//! Pure functions only; no rendering backend.  A frontend feeds the viewport
//! size and the grid extent in and draws what comes out.
//!
//! # Layout
//!
//! The board is a centred block of square cells with a 10 px margin on
//! every side (20 px per axis):
//!
//! ```text
//! square_size = min((viewport_w - 20) / grid_w, (viewport_h - 20) / grid_h)
//! top_left    = viewport_centre - (grid_w, grid_h) * square_size / 2
//! cell_centre = top_left + (x + 0.5, y + 0.5) * square_size
//! ```

pub mod layout;

#[cfg(test)]
mod tests;

pub use layout::{BoardLayout, LineSegment, grid_to_viewport};
