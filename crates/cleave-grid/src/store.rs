//! The cell-state array and its transition invariants.

use std::fmt;

use cleave_core::{CellState, GridCoord};
use smallvec::SmallVec;

use crate::layout::Layout;
use crate::neighbourhood::OFFSETS_8;

/// Exclusive owner of a playfield's cell states.
///
/// Bounds are inclusive (`[0, size_x] × [0, size_y]`). Every mutation
/// funnels through [`set`](Self::set), which only lets a cell move
/// forward along `Space → Crawl → Filled` unless the write is forced.
/// Per-state counts are maintained incrementally so the fill fraction
/// is O(1).
#[derive(Clone, Debug)]
pub struct GridStore {
    size_x: u32,
    size_y: u32,
    cells: Vec<CellState>,
    counts: [usize; 5],
    initial_fillable: usize,
}

impl GridStore {
    /// Create a store loaded from `layout`.
    pub fn new(layout: &Layout) -> Self {
        let mut store = Self {
            size_x: 0,
            size_y: 0,
            cells: Vec::new(),
            counts: [0; 5],
            initial_fillable: 0,
        };
        store.reset(layout);
        store
    }

    /// Reinitialize every cell from `layout` and recompute the cached
    /// initial fillable count.
    ///
    /// Adopts the layout's dimensions if they differ.
    pub fn reset(&mut self, layout: &Layout) {
        self.size_x = layout.size_x();
        self.size_y = layout.size_y();
        self.cells.clear();
        self.cells.extend_from_slice(layout.cells());
        self.counts = [0; 5];
        for &s in &self.cells {
            self.counts[slot(s)] += 1;
        }
        self.initial_fillable = self.count(CellState::Space)
            + self.count(CellState::Crawl)
            + self.count(CellState::Filled);
    }

    /// Largest valid x.
    pub fn size_x(&self) -> u32 {
        self.size_x
    }

    /// Largest valid y.
    pub fn size_y(&self) -> u32 {
        self.size_y
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `coord` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.index(coord).is_some()
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as u32, coord.y as u32);
        if x > self.size_x || y > self.size_y {
            return None;
        }
        Some(y as usize * (self.size_x as usize + 1) + x as usize)
    }

    /// State at `coord`. Out-of-range reads return `Void`.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> CellState {
        self.index(coord)
            .map_or(CellState::Void, |i| self.cells[i])
    }

    /// `true` if `coord` is an in-range `Space` cell.
    #[inline]
    pub fn is_open(&self, coord: GridCoord) -> bool {
        self.get(coord) == CellState::Space
    }

    /// Write `state` at `coord`.
    ///
    /// Without `forced`, only `Space → Crawl` and `Crawl → Filled` take
    /// effect; anything else (including same-state writes) is a no-op.
    /// With `forced`, any overwrite is applied. Out-of-range writes are
    /// ignored. Returns `true` if the cell changed.
    pub fn set(&mut self, coord: GridCoord, state: CellState, forced: bool) -> bool {
        let Some(i) = self.index(coord) else {
            return false;
        };
        let current = self.cells[i];
        if current == state || !(forced || current.can_transition_to(state)) {
            return false;
        }
        self.counts[slot(current)] -= 1;
        self.counts[slot(state)] += 1;
        self.cells[i] = state;
        true
    }

    /// [`set`](Self::set) over many coordinates. Returns how many changed.
    pub fn set_all<I>(&mut self, coords: I, state: CellState, forced: bool) -> usize
    where
        I: IntoIterator<Item = GridCoord>,
    {
        coords
            .into_iter()
            .filter(|&c| self.set(c, state, forced))
            .count()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.counts[slot(state)]
    }

    /// Number of `Space` cells remaining.
    pub fn space_count(&self) -> usize {
        self.count(CellState::Space)
    }

    /// `Space + Crawl + Filled` at load time.
    pub fn initial_fillable(&self) -> usize {
        self.initial_fillable
    }

    /// `1 − space / initial_fillable`, or `0.0` for a layout with no
    /// fillable cells.
    pub fn fill_fraction(&self) -> f64 {
        if self.initial_fillable == 0 {
            return 0.0;
        }
        1.0 - self.space_count() as f64 / self.initial_fillable as f64
    }

    /// 8-connected neighbours of `coord` that are `Space`.
    pub fn open_neighbours(&self, coord: GridCoord) -> SmallVec<[GridCoord; 8]> {
        OFFSETS_8
            .iter()
            .map(|&(dx, dy)| coord.offset(dx, dy))
            .filter(|&nb| self.is_open(nb))
            .collect()
    }

    /// Every in-range coordinate, column by column (`x` outer, `y` inner).
    pub fn coords_column_major(&self) -> impl Iterator<Item = GridCoord> {
        let (sx, sy) = (self.size_x as i32, self.size_y as i32);
        (0..=sx).flat_map(move |x| (0..=sy).map(move |y| GridCoord::new(x, y)))
    }
}

#[inline]
fn slot(state: CellState) -> usize {
    state as usize
}

/// Renders the grid top row first, one glyph per cell.
impl fmt::Display for GridStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size_x as usize + 1;
        for row in self.cells.chunks(width).rev() {
            let line: String = row.iter().map(|s| s.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
