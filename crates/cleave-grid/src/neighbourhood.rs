//! Neighbour offsets shared by flood fill, path search and tracing.

use cleave_core::GridCoord;
use smallvec::SmallVec;

/// All 8 offsets `(dx, dy)`: W, E, S, N, SW, NW, SE, NE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Cardinal probe order used by the boundary tracer: right, up, left, down.
pub const CARDINALS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// The 8 surrounding coordinates of `coord`, unfiltered.
///
/// Callers decide what "in range" and "open" mean.
pub fn around(coord: GridCoord) -> SmallVec<[GridCoord; 8]> {
    OFFSETS_8
        .iter()
        .map(|&(dx, dy)| coord.offset(dx, dy))
        .collect()
}
