//! `BoardLayout` and the free mapping function.

use zt_core::{GridBounds, Position};

/// Total margin per axis, split evenly on both sides.
const MARGIN: f64 = 20.0;

/// One straight line in viewport pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment {
    pub start: (f64, f64),
    pub end:   (f64, f64),
}

/// Square-cell board centred in a viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoardLayout {
    pub bounds:      GridBounds,
    /// Side of one cell in pixels.
    pub square_size: f64,
    /// Pixel coordinates of the board's top-left corner.
    pub top_left:    (f64, f64),
}

impl BoardLayout {
    /// Fit `bounds` into a `viewport_width` × `viewport_height` viewport.
    ///
    /// A zero-sized grid yields an infinite `square_size`; validated configs
    /// never produce one.
    pub fn new(viewport_width: f64, viewport_height: f64, bounds: GridBounds) -> Self {
        let (w, h) = (bounds.width as f64, bounds.height as f64);
        let square_size = ((viewport_width - MARGIN) / w).min((viewport_height - MARGIN) / h);
        let top_left = (
            viewport_width / 2.0 - w * square_size / 2.0,
            viewport_height / 2.0 - h * square_size / 2.0,
        );
        Self { bounds, square_size, top_left }
    }

    /// Board extent in pixels.
    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (
            self.bounds.width as f64 * self.square_size,
            self.bounds.height as f64 * self.square_size,
        )
    }

    /// Pixel centre of the cell at `position`.
    ///
    /// Off-board positions extrapolate linearly; callers only pass live
    /// agent positions.
    pub fn cell_center(&self, position: Position) -> (f64, f64) {
        (
            self.top_left.0 + (position.x as f64 + 0.5) * self.square_size,
            self.top_left.1 + (position.y as f64 + 0.5) * self.square_size,
        )
    }

    /// The board outline and cell borders: `width + 1` vertical lines left to
    /// right, then `height + 1` horizontal lines top to bottom.
    pub fn grid_lines(&self) -> Vec<LineSegment> {
        let (left, top) = self.top_left;
        let (board_w, board_h) = self.size();
        let verticals = (0..=self.bounds.width).map(|n| {
            let x = left + n as f64 * self.square_size;
            LineSegment { start: (x, top), end: (x, top + board_h) }
        });
        let horizontals = (0..=self.bounds.height).map(|n| {
            let y = top + n as f64 * self.square_size;
            LineSegment { start: (left, y), end: (left + board_w, y) }
        });
        verticals.chain(horizontals).collect()
    }
}

/// Pixel centre of `position` on a `grid_width` × `grid_height` board drawn
/// in a `viewport_width` × `viewport_height` viewport.
pub fn grid_to_viewport(
    position:        Position,
    viewport_width:  f64,
    viewport_height: f64,
    grid_width:      u32,
    grid_height:     u32,
) -> (f64, f64) {
    BoardLayout::new(viewport_width, viewport_height, GridBounds::new(grid_width, grid_height))
        .cell_center(position)
}
