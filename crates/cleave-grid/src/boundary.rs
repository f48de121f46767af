//! Rectilinear boundary tracing.
//!
//! Compresses runs of `Bounds` cells into straight [`LinePoints`]
//! segments for rendering and collision. Only walls that touch fillable
//! cells (8-connected) are traced, so thick walls and the void beyond
//! them produce no segments.
//!
//! Tracing is depth-first: after a run ends, tracing continues from the
//! run's end cell before the next direction of the run's start cell is
//! probed. The depth-first order is kept on an explicit frame stack, so
//! long borders cannot exhaust the call stack.

use cleave_core::{CellState, GridCoord, LinePoints};

use crate::neighbourhood::{around, CARDINALS};
use crate::store::GridStore;

/// Result of a full boundary trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryTrace {
    /// Straight segments, in emission order.
    pub segments: Vec<LinePoints>,
    /// Every cell consumed by a run, in walk order. Each appears once.
    pub walked: Vec<GridCoord>,
}

/// Trace every wall bordering open space. See [`trace`].
pub fn trace_boundaries(grid: &GridStore) -> Vec<LinePoints> {
    trace(grid).segments
}

/// Trace every wall bordering open space, keeping the walk order.
///
/// The grid is not modified; visited cells are tracked in a scratch mask.
pub fn trace(grid: &GridStore) -> BoundaryTrace {
    let mut tracer = Tracer {
        grid,
        visited: vec![false; grid.cell_count()],
        out: BoundaryTrace::default(),
    };
    for start in grid.coords_column_major() {
        if tracer.walkable(start) {
            tracer.trace_from(start);
        }
    }
    log::debug!(
        "traced {} boundary segments over {} cells",
        tracer.out.segments.len(),
        tracer.out.walked.len()
    );
    tracer.out
}

struct Tracer<'a> {
    grid: &'a GridStore,
    visited: Vec<bool>,
    out: BoundaryTrace,
}

impl Tracer<'_> {
    fn slot(&self, coord: GridCoord) -> Option<usize> {
        if !self.grid.contains(coord) {
            return None;
        }
        Some(coord.y as usize * (self.grid.size_x() as usize + 1) + coord.x as usize)
    }

    /// An unvisited wall cell with at least one fillable neighbour.
    fn walkable(&self, coord: GridCoord) -> bool {
        let Some(i) = self.slot(coord) else {
            return false;
        };
        !self.visited[i]
            && self.grid.get(coord) == CellState::Bounds
            && around(coord)
                .iter()
                .any(|&nb| self.grid.get(nb).is_fillable())
    }

    fn mark(&mut self, coord: GridCoord) {
        if let Some(i) = self.slot(coord) {
            self.visited[i] = true;
            self.out.walked.push(coord);
        }
    }

    fn trace_from(&mut self, start: GridCoord) {
        // (origin, next cardinal to probe, cardinal the origin was entered by)
        let mut stack: Vec<(GridCoord, usize, Option<usize>)> = vec![(start, 0, None)];

        while let Some(frame) = stack.last_mut() {
            let (origin, dir, entered) = *frame;
            if dir == CARDINALS.len() {
                stack.pop();
                continue;
            }
            frame.1 += 1;
            // Never walk straight back along the run that led here.
            if entered.is_some_and(|e| dir == (e + 2) % CARDINALS.len()) {
                continue;
            }

            let (dx, dy) = CARDINALS[dir];
            let mut end = origin;
            let mut next = origin.offset(dx, dy);
            while self.walkable(next) {
                self.mark(next);
                end = next;
                next = next.offset(dx, dy);
            }

            if end != origin {
                self.out.segments.push(LinePoints::new(origin, end));
                stack.push((end, 0, Some(dir)));
            }
        }
    }
}
