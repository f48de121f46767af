//! Connected-region discovery restricted to open cells.
//!
//! A cut splits the open area into two sides. For each side,
//! [`find_seed`] slides along the freshly drawn line until it finds an
//! adjacent `Space` cell, then [`connected_region`] expands breadth-first
//! over the 8-connected neighbourhood.

use std::collections::VecDeque;

use cleave_core::GridCoord;
use indexmap::IndexSet;

use crate::store::GridStore;

/// Cells of one flood fill, in discovery order.
pub type Region = Vec<GridCoord>;

/// Probe vector for a seed search from `from` toward `to`.
///
/// The along-line component points at `to`; the perpendicular component
/// comes from `step` and selects the side.
fn probe_vector(from: GridCoord, to: GridCoord, step: (i32, i32)) -> (i32, i32) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (
        if dx == 0 { step.0 } else { dx.signum() },
        if dy == 0 { step.1 } else { dy.signum() },
    )
}

/// Walk from `from` toward `to` looking for an open cell on the side
/// selected by `step`.
///
/// At each reference cell the dx-only neighbour is probed, then the
/// dy-only neighbour; the first `Space` cell wins. Otherwise the
/// reference advances along whichever axis strictly shrinks the
/// remaining distance to `to` (x first). Returns `None` once the
/// reference reaches `to` with nothing found.
pub fn find_seed(
    grid: &GridStore,
    from: GridCoord,
    to: GridCoord,
    step: (i32, i32),
) -> Option<GridCoord> {
    let (px, py) = probe_vector(from, to, step);
    let mut reference = from;
    let mut remaining = reference.distance_sq(to);

    loop {
        let along_x = reference.offset(px, 0);
        if grid.is_open(along_x) {
            return Some(along_x);
        }
        let along_y = reference.offset(0, py);
        if grid.is_open(along_y) {
            return Some(along_y);
        }
        if remaining == 0 {
            return None;
        }

        // Remaining distance strictly decreases, so this terminates.
        let via_x = along_x.distance_sq(to);
        let via_y = along_y.distance_sq(to);
        if via_x < remaining {
            reference = along_x;
            remaining = via_x;
        } else if via_y < remaining {
            reference = along_y;
            remaining = via_y;
        } else {
            return None;
        }
    }
}

/// Every `Space` cell 8-connected to any of `seeds`.
///
/// Seeds that are not `Space` are ignored. The result is in breadth-first
/// discovery order and contains no duplicates.
pub fn connected_region<I>(grid: &GridStore, seeds: I) -> Region
where
    I: IntoIterator<Item = GridCoord>,
{
    let mut visited: IndexSet<GridCoord> = IndexSet::new();
    let mut frontier: VecDeque<GridCoord> = VecDeque::new();

    for seed in seeds {
        if grid.is_open(seed) && visited.insert(seed) {
            frontier.push_back(seed);
        }
    }

    while let Some(coord) = frontier.pop_front() {
        for nb in grid.open_neighbours(coord) {
            if visited.insert(nb) {
                frontier.push_back(nb);
            }
        }
    }

    visited.into_iter().collect()
}

/// The open region on one side of the line `a`–`b`.
///
/// Seeds are searched from both endpoints. If neither search finds an
/// opening the region is empty.
pub fn flood_fill(grid: &GridStore, a: GridCoord, b: GridCoord, step: (i32, i32)) -> Region {
    let seeds = [find_seed(grid, a, b, step), find_seed(grid, b, a, step)];
    connected_region(grid, seeds.into_iter().flatten())
}
