//! Reusable layout fixtures.
//!
//! - [`open_room`]: bordered room, all open inside.
//! - [`split_room`]: 4 × 5 room plus the wall-to-wall cut across its middle row.
//! - [`walled_goal`]: room with a goal cell sealed off by walls.

use cleave_core::{CellState, GridCoord, LinePoints};
use cleave_grid::Layout;

/// A bordered `size_x × size_y` room.
///
/// # Panics
///
/// Panics if either size is below 2.
pub fn open_room(size_x: u32, size_y: u32) -> Layout {
    Layout::bordered(size_x, size_y).expect("fixture sizes are at least 2")
}

/// Interior 4 wide × 5 tall (x `1..=4`, y `1..=5`) and the horizontal cut
/// from wall to wall along `y = 3`.
///
/// Cutting along the line leaves two 8-cell regions.
pub fn split_room() -> (Layout, LinePoints) {
    let line = LinePoints::new(GridCoord::new(0, 3), GridCoord::new(5, 3));
    (open_room(5, 6), line)
}

/// An 8 × 8 room whose cell `(5, 5)` is ringed by walls.
///
/// Returns the layout, an open start cell and the sealed goal.
pub fn walled_goal() -> (Layout, GridCoord, GridCoord) {
    let goal = GridCoord::new(5, 5);
    let layout = open_room(8, 8)
        .with_rect(GridCoord::new(4, 4), GridCoord::new(6, 6), CellState::Bounds)
        .with_cell(goal, CellState::Space);
    (layout, GridCoord::new(1, 1), goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleave_grid::GridStore;

    #[test]
    fn split_room_has_twenty_open_cells() {
        let (layout, line) = split_room();
        let g = GridStore::new(&layout);
        assert_eq!(g.initial_fillable(), 20);
        assert_eq!(line.cell_len(), 6);
    }

    #[test]
    fn walled_goal_is_isolated() {
        let (layout, start, goal) = walled_goal();
        let g = GridStore::new(&layout);
        assert!(g.is_open(start));
        assert!(g.is_open(goal));
        assert!(g.open_neighbours(goal).is_empty());
    }
}
