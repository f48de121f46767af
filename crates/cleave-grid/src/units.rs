//! Conversion between world units and grid coordinates.
//!
//! World space has its origin at the centre of the playfield; the grid
//! has its origin at the bottom-left corner. `multiplier` grid cells fit
//! in one world unit.

use cleave_core::{GridCoord, LinePoints};

use crate::store::GridStore;

/// Maps world-space points onto grid cells and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTransform {
    half_x: i32,
    half_y: i32,
    multiplier: u32,
}

impl GridTransform {
    /// Transform for a grid with inclusive bounds `size_x × size_y` and
    /// `multiplier` cells per world unit (clamped to at least 1).
    pub fn new(size_x: u32, size_y: u32, multiplier: u32) -> Self {
        Self {
            half_x: (size_x / 2) as i32,
            half_y: (size_y / 2) as i32,
            multiplier: multiplier.max(1),
        }
    }

    /// One cell per world unit, sized to `grid`.
    pub fn for_grid(grid: &GridStore) -> Self {
        Self::new(grid.size_x(), grid.size_y(), 1)
    }

    /// Grid cell containing the world point `(x, y)`.
    ///
    /// Rounds half away from zero. The result may lie outside the grid.
    pub fn unit_to_grid(&self, x: f32, y: f32) -> GridCoord {
        let m = self.multiplier as f32;
        GridCoord::new(
            round_half_away(x * m) + self.half_x,
            round_half_away(y * m) + self.half_y,
        )
    }

    /// World-space centre of `coord`.
    pub fn grid_to_unit(&self, coord: GridCoord) -> (f32, f32) {
        let m = self.multiplier as f32;
        (
            (coord.x - self.half_x) as f32 / m,
            (coord.y - self.half_y) as f32 / m,
        )
    }

    /// Both endpoints of `segment` in world units.
    pub fn segment_to_units(&self, segment: &LinePoints) -> ((f32, f32), (f32, f32)) {
        (self.grid_to_unit(segment.a()), self.grid_to_unit(segment.b()))
    }
}

fn round_half_away(v: f32) -> i32 {
    let adder = if v < 0.0 { -0.5 } else { 0.5 };
    (v + adder) as i32
}
