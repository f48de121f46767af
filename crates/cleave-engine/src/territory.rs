//! One playfield: grid, claim policy, reveal pacing and boundaries.
//!
//! [`Territory`] is the single owner of a [`GridStore`]. External code
//! feeds it cut endpoints and drives it with [`tick`](Territory::tick);
//! everything it learns about the outside world comes through an
//! [`OccupantLocator`] and everything it reports goes out through a
//! [`RevealSink`].

use std::time::Instant;

use cleave_core::{
    CellState, CutError, GridCoord, LinePoints, OccupantLocator, RevealEvent, RevealSink,
};
use cleave_grid::{find_path, trace_boundaries, GridStore, Layout};

use crate::config::{ConfigError, LevelError, TerritoryConfig};
use crate::cutter::LineCutter;
use crate::metrics::TickMetrics;
use crate::reveal::RevealScheduler;
use crate::selector::{ClaimDecision, RegionSelector};

/// Summary of one accepted cut.
#[derive(Clone, Debug, PartialEq)]
pub struct CutOutcome {
    /// The normalized cut line.
    pub line: LinePoints,
    /// Cells in the region on side A and side B.
    pub sizes: (usize, usize),
    /// Occupants counted in side A and side B.
    pub occupants: (usize, usize),
    /// The rule that chose the claim.
    pub decision: ClaimDecision,
    /// Cells queued for reveal.
    pub queued: usize,
}

/// A playfield and the state of its current level.
#[derive(Debug)]
pub struct Territory {
    config: TerritoryConfig,
    layout: Layout,
    grid: GridStore,
    selector: RegionSelector,
    reveal: RevealScheduler,
    boundaries: Vec<LinePoints>,
    settled_fill: f64,
    quota_announced: bool,
    last_metrics: TickMetrics,
}

impl Territory {
    /// Validate `config` and load a bordered playfield of its size.
    pub fn new(config: TerritoryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout =
            Layout::bordered(config.size_x, config.size_y).map_err(|_| ConfigError::InvalidSize {
                size_x: config.size_x,
                size_y: config.size_y,
            })?;
        let grid = GridStore::new(&layout);
        let selector = RegionSelector::new(config.seed).with_weave(config.interleave);
        let reveal = RevealScheduler::new(config.reveal_growth);

        let mut territory = Self {
            config,
            layout,
            grid,
            selector,
            reveal,
            boundaries: Vec::new(),
            settled_fill: 0.0,
            quota_announced: false,
            last_metrics: TickMetrics::default(),
        };
        territory.reset();
        Ok(territory)
    }

    /// Replace the level layout and reset everything.
    ///
    /// The layout must match the configured playfield size.
    pub fn load_level(&mut self, layout: &Layout) -> Result<(), LevelError> {
        let expected = (self.config.size_x, self.config.size_y);
        let found = (layout.size_x(), layout.size_y());
        if expected != found {
            return Err(LevelError::SizeMismatch { expected, found });
        }
        self.layout = layout.clone();
        self.reset();
        Ok(())
    }

    /// Reload the current layout, abandon any reveal in progress and
    /// retrace the boundaries.
    pub fn reset(&mut self) {
        let dropped = self.reveal.clear();
        self.grid.reset(&self.layout);
        self.boundaries = trace_boundaries(&self.grid);
        self.settled_fill = 0.0;
        self.quota_announced = false;
        self.last_metrics = TickMetrics::default();
        log::info!(
            "level loaded: {}x{}, {} fillable cells, {} boundary segments{}",
            self.grid.size_x(),
            self.grid.size_y(),
            self.grid.initial_fillable(),
            self.boundaries.len(),
            if dropped > 0 {
                format!(", {dropped} pending cells abandoned")
            } else {
                String::new()
            }
        );
    }

    /// Cut from `a` to `b` and queue the chosen claim for reveal.
    ///
    /// `occupants` is asked how many hostiles sit in each side. A line that
    /// marks at least one open cell becomes a new boundary segment.
    ///
    /// Only report cuts that run from wall to wall. A line that stops short
    /// leaves one connected area, so both sides hold the same cells and the
    /// same occupants; the tie-break then claims the whole area, occupied
    /// or not.
    pub fn cut<L>(&mut self, a: GridCoord, b: GridCoord, occupants: &L) -> Result<CutOutcome, CutError>
    where
        L: OccupantLocator + ?Sized,
    {
        let cut = LineCutter::cut(&mut self.grid, a, b)?;
        let occ_a = occupants.count_occupants(&cut.side_a);
        let occ_b = occupants.count_occupants(&cut.side_b);
        let claim = self.selector.select(&cut.side_a, &cut.side_b, occ_a, occ_b);
        let queued = self.reveal.enqueue(&mut self.grid, claim.cells);
        if cut.marked > 0 {
            self.boundaries.push(cut.line);
        }

        log::debug!(
            "cut {}: sides {}/{} cells, {}/{} occupants, claimed {} ({} queued)",
            cut.line,
            cut.side_a.len(),
            cut.side_b.len(),
            occ_a,
            occ_b,
            claim.decision,
            queued
        );
        log::trace!("grid after cut:\n{}", self.grid);

        Ok(CutOutcome {
            line: cut.line,
            sizes: (cut.side_a.len(), cut.side_b.len()),
            occupants: (occ_a, occ_b),
            decision: claim.decision,
            queued,
        })
    }

    /// Advance the reveal by one tick.
    pub fn tick<S: RevealSink + ?Sized>(&mut self, sink: &mut S) -> &TickMetrics {
        let start = Instant::now();
        let step = self.reveal.tick(&mut self.grid, sink);
        if let Some(fill) = step.settled_fill {
            self.settle(fill);
        }
        self.last_metrics = TickMetrics {
            revealed: step.revealed,
            remaining: step.remaining,
            rate: step.rate,
            fill: self.grid.fill_fraction(),
            duration_us: start.elapsed().as_micros() as u64,
        };
        &self.last_metrics
    }

    /// Reveal every remaining fillable cell at once.
    ///
    /// Used when a level is complete. The pending queue is dropped; each
    /// newly filled cell is reported, followed by the final fill fraction.
    /// Returns how many cells changed.
    pub fn reveal_all<S: RevealSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        self.reveal.clear();
        let targets: Vec<GridCoord> = self
            .grid
            .coords_column_major()
            .filter(|&c| {
                let s = self.grid.get(c);
                s.is_fillable() && s != CellState::Filled
            })
            .collect();
        let mut changed = 0;
        for cell in targets {
            if self.grid.set(cell, CellState::Filled, true) {
                sink.emit(RevealEvent::Cell(cell));
                changed += 1;
            }
        }
        let fill = self.grid.fill_fraction();
        sink.emit(RevealEvent::Fill(fill));
        self.settle(fill);
        changed
    }

    fn settle(&mut self, fill: f64) {
        self.settled_fill = fill;
        if !self.quota_announced && self.quota_reached() {
            self.quota_announced = true;
            log::info!(
                "fill quota reached: {:.1}% >= {:.1}%",
                fill * 100.0,
                self.config.fill_quota * 100.0
            );
        }
    }

    /// Live fill fraction, counting cells still waiting to be revealed.
    pub fn fill_fraction(&self) -> f64 {
        self.grid.fill_fraction()
    }

    /// Fill fraction as of the last completed reveal.
    pub fn settled_fill(&self) -> f64 {
        self.settled_fill
    }

    /// Whether the last completed reveal met the configured quota.
    pub fn quota_reached(&self) -> bool {
        self.settled_fill >= self.config.fill_quota
    }

    /// Boundary segments: the traced walls plus every accepted cut.
    pub fn boundaries(&self) -> &[LinePoints] {
        &self.boundaries
    }

    /// Shortest route through open cells. See [`find_path`].
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> Vec<GridCoord> {
        find_path(&self.grid, start, goal)
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    /// Layout the current level was loaded from.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Configuration in effect.
    pub fn config(&self) -> &TerritoryConfig {
        &self.config
    }

    /// Cells waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.reveal.len()
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }
}
