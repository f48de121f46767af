//! A* search over open cells.
//!
//! Movement is 8-connected with unit cost per step, so the Chebyshev
//! distance is an exact lower bound and serves as the heuristic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use cleave_core::GridCoord;
use indexmap::{IndexMap, IndexSet};

use crate::store::GridStore;

/// Per-cell search bookkeeping. Discarded when the search returns.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    g: u32,
    parent: Option<GridCoord>,
}

/// Heap key: lowest `f`, then lowest `h`, then earliest push.
type OpenEntry = Reverse<(u32, u32, u64, GridCoord)>;

/// Shortest 8-connected route from `start` to `goal` through `Space`.
///
/// The returned path excludes `start` and ends at `goal`, so its length is
/// the number of steps taken. `start == goal` yields `[goal]`. An
/// unreachable goal yields an empty vector.
pub fn find_path(grid: &GridStore, start: GridCoord, goal: GridCoord) -> Vec<GridCoord> {
    if start == goal {
        return vec![goal];
    }

    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut nodes: IndexMap<GridCoord, SearchNode> = IndexMap::new();
    let mut closed: IndexSet<GridCoord> = IndexSet::new();
    let mut seq: u64 = 0;

    let h0 = start.chebyshev(goal);
    nodes.insert(start, SearchNode { g: 0, parent: None });
    open.push(Reverse((h0, h0, seq, start)));

    while let Some(Reverse((_, _, _, current))) = open.pop() {
        if !closed.insert(current) {
            continue;
        }
        if current == goal {
            return reconstruct(&nodes, start, goal);
        }
        let g = nodes.get(&current).map_or(0, |n| n.g);

        for nb in grid.open_neighbours(current) {
            if closed.contains(&nb) {
                continue;
            }
            let tentative = g + 1;
            let improved = nodes.get(&nb).is_none_or(|n| tentative < n.g);
            if !improved {
                continue;
            }
            nodes.insert(
                nb,
                SearchNode {
                    g: tentative,
                    parent: Some(current),
                },
            );
            let h = nb.chebyshev(goal);
            seq += 1;
            open.push(Reverse((tentative + h, h, seq, nb)));
        }
    }

    log::trace!("no route from {start} to {goal}");
    Vec::new()
}

fn reconstruct(
    nodes: &IndexMap<GridCoord, SearchNode>,
    start: GridCoord,
    goal: GridCoord,
) -> Vec<GridCoord> {
    let mut path = Vec::new();
    let mut cursor = goal;
    while cursor != start {
        path.push(cursor);
        match nodes.get(&cursor).and_then(|n| n.parent) {
            Some(parent) => cursor = parent,
            None => break,
        }
    }
    path.reverse();
    path
}
