//! Unit tests for zt-view.

use zt_core::{GridBounds, Position};

use crate::{BoardLayout, grid_to_viewport};

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

#[cfg(test)]
mod layout {
    use super::*;

    #[test]
    fn square_size_takes_the_tighter_axis() {
        let wide = BoardLayout::new(1280.0, 720.0, GridBounds::new(10, 10));
        assert!((wide.square_size - 70.0).abs() < 1e-9);
        let tall = BoardLayout::new(720.0, 1280.0, GridBounds::new(10, 10));
        assert!((tall.square_size - 70.0).abs() < 1e-9);
    }

    #[test]
    fn board_is_centred() {
        let l = BoardLayout::new(1280.0, 720.0, GridBounds::new(10, 10));
        assert!(close(l.top_left, (290.0, 10.0)));
        let (w, h) = l.size();
        assert!(close((l.top_left.0 + w / 2.0, l.top_left.1 + h / 2.0), (640.0, 360.0)));
    }

    #[test]
    fn odd_grid_centre_cell_is_screen_centre() {
        let c = grid_to_viewport(Position::new(4, 4), 1280.0, 720.0, 9, 9);
        assert!(close(c, (640.0, 360.0)), "{c:?}");
    }

    #[test]
    fn even_grid_central_cells_straddle_screen_centre() {
        let l = BoardLayout::new(1280.0, 720.0, GridBounds::new(8, 6));
        let a = l.cell_center(Position::new(3, 2));
        let b = l.cell_center(Position::new(4, 3));
        let mid = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
        assert!(close(mid, (640.0, 360.0)), "{mid:?}");
    }

    #[test]
    fn neighbouring_cells_are_one_square_apart() {
        let l = BoardLayout::new(800.0, 600.0, GridBounds::new(40, 30));
        let a = l.cell_center(Position::new(7, 7));
        let b = l.cell_center(Position::new(8, 8));
        assert!(close((b.0 - a.0, b.1 - a.1), (l.square_size, l.square_size)));
    }

    #[test]
    fn grid_lines_cover_every_border() {
        let l = BoardLayout::new(1280.0, 720.0, GridBounds::new(10, 10));
        let lines = l.grid_lines();
        assert_eq!(lines.len(), 11 + 11);
        // First vertical is the left edge, last horizontal the bottom edge.
        assert!(close(lines[0].start, (290.0, 10.0)));
        assert!(close(lines[0].end, (290.0, 710.0)));
        assert!(close(lines[21].start, (290.0, 710.0)));
        assert!(close(lines[21].end, (990.0, 710.0)));
    }
}
