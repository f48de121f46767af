//! Line cutting: mark a straight line and find the open area on each side.

use cleave_core::{CellState, CutError, GridCoord, LinePoints, Orientation};
use cleave_grid::{flood_fill, GridStore, Region};

/// Outcome of a successful cut.
#[derive(Clone, Debug, PartialEq)]
pub struct Cut {
    /// The cut, normalized so `a` precedes `b` along its axis.
    pub line: LinePoints,
    /// Axis of the cut.
    pub orientation: Orientation,
    /// Open region below (horizontal) or left of (vertical) the line.
    pub side_a: Region,
    /// Open region above (horizontal) or right of (vertical) the line.
    pub side_b: Region,
    /// Number of `Space` cells the line itself turned into `Crawl`.
    pub marked: usize,
}

/// Draws cuts into a [`GridStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LineCutter;

impl LineCutter {
    /// Probe steps `(side A, side B)` for a horizontal cut.
    pub const HORIZONTAL_STEPS: ((i32, i32), (i32, i32)) = ((1, -1), (1, 1));
    /// Probe steps `(side A, side B)` for a vertical cut.
    pub const VERTICAL_STEPS: ((i32, i32), (i32, i32)) = ((-1, 1), (1, 1));

    /// Check that `a`–`b` is a drawable line on `grid`.
    pub fn validate(grid: &GridStore, a: GridCoord, b: GridCoord) -> Result<Orientation, CutError> {
        for coord in [a, b] {
            if !grid.contains(coord) {
                return Err(CutError::OutOfRange { coord });
            }
        }
        if a == b {
            return Err(CutError::ZeroLength { at: a });
        }
        Orientation::of(a, b).ok_or(CutError::NotAxisAligned { a, b })
    }

    /// Mark the line `a`–`b` as `Crawl` and flood both sides.
    ///
    /// Only `Space` cells on the line change; walls and already claimed
    /// cells are left as they are. The grid is untouched on error.
    pub fn cut(grid: &mut GridStore, a: GridCoord, b: GridCoord) -> Result<Cut, CutError> {
        let orientation = Self::validate(grid, a, b)?;
        let (a, b) = match orientation {
            Orientation::Horizontal if a.x > b.x => (b, a),
            Orientation::Vertical if a.y > b.y => (b, a),
            _ => (a, b),
        };
        let line = LinePoints::new(a, b);
        let marked = grid.set_all(line.cells(), CellState::Crawl, false);

        let (step_a, step_b) = match orientation {
            Orientation::Horizontal => Self::HORIZONTAL_STEPS,
            Orientation::Vertical => Self::VERTICAL_STEPS,
        };
        let side_a = flood_fill(grid, a, b, step_a);
        let side_b = flood_fill(grid, a, b, step_b);

        Ok(Cut {
            line,
            orientation,
            side_a,
            side_b,
            marked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleave_grid::Layout;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    fn room() -> GridStore {
        GridStore::new(&Layout::bordered(5, 6).unwrap())
    }

    #[test]
    fn horizontal_cut_splits_rows() {
        let mut g = room();
        let cut = LineCutter::cut(&mut g, c(0, 3), c(5, 3)).unwrap();
        assert_eq!(cut.orientation, Orientation::Horizontal);
        assert_eq!(cut.marked, 4);
        assert_eq!(cut.side_a.len(), 8);
        assert_eq!(cut.side_b.len(), 8);
        assert!(cut.side_a.iter().all(|p| p.y < 3));
        assert!(cut.side_b.iter().all(|p| p.y > 3));
        assert_eq!(g.get(c(2, 3)), CellState::Crawl);
        assert_eq!(g.get(c(0, 3)), CellState::Bounds);
    }

    #[test]
    fn vertical_cut_splits_columns() {
        let mut g = room();
        let cut = LineCutter::cut(&mut g, c(2, 6), c(2, 0)).unwrap();
        assert_eq!(cut.orientation, Orientation::Vertical);
        assert_eq!(cut.line, LinePoints::new(c(2, 0), c(2, 6)));
        assert_eq!(cut.marked, 5);
        assert!(cut.side_a.iter().all(|p| p.x < 2));
        assert!(cut.side_b.iter().all(|p| p.x > 2));
        assert_eq!(cut.side_a.len(), 5);
        assert_eq!(cut.side_b.len(), 10);
    }

    #[test]
    fn endpoints_normalized() {
        let mut g = room();
        let cut = LineCutter::cut(&mut g, c(5, 3), c(0, 3)).unwrap();
        assert_eq!(cut.line.a(), c(0, 3));
        assert_eq!(cut.line.b(), c(5, 3));
    }

    #[test]
    fn invalid_cuts_leave_grid_untouched() {
        let mut g = room();
        let before = g.to_string();
        assert_eq!(
            LineCutter::cut(&mut g, c(0, 3), c(9, 3)),
            Err(CutError::OutOfRange { coord: c(9, 3) })
        );
        assert_eq!(
            LineCutter::cut(&mut g, c(1, 1), c(3, 4)),
            Err(CutError::NotAxisAligned {
                a: c(1, 1),
                b: c(3, 4)
            })
        );
        assert_eq!(
            LineCutter::cut(&mut g, c(2, 2), c(2, 2)),
            Err(CutError::ZeroLength { at: c(2, 2) })
        );
        assert_eq!(g.to_string(), before);
    }

    #[test]
    fn cut_through_claimed_cells_only_marks_space() {
        let mut g = room();
        g.set(c(2, 3), CellState::Crawl, false);
        g.set(c(2, 3), CellState::Filled, false);
        let cut = LineCutter::cut(&mut g, c(0, 3), c(5, 3)).unwrap();
        assert_eq!(cut.marked, 3);
        assert_eq!(g.get(c(2, 3)), CellState::Filled);
    }

    #[test]
    fn partial_cut_sees_one_region_twice() {
        let mut g = room();
        let cut = LineCutter::cut(&mut g, c(0, 3), c(2, 3)).unwrap();
        assert_eq!(cut.side_a.len(), cut.side_b.len());
        assert_eq!(cut.side_a.len(), g.space_count());
    }
}
