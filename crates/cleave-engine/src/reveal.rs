//! Paced reveal of claimed cells.
//!
//! Claimed cells wait in a FIFO [`ClaimQueue`] as `Crawl`. Every tick the
//! reveal rate grows geometrically and that many cells (rounded down)
//! turn `Filled`, so a large claim starts slowly and accelerates. When
//! the queue drains the rate drops back to 1 and the new fill fraction
//! is announced.

use std::collections::VecDeque;

use cleave_core::{CellState, GridCoord, RevealEvent, RevealSink};
use cleave_grid::GridStore;

/// Cells waiting to be revealed, plus the current reveal rate.
///
/// The rate is 1.0 whenever the queue is empty.
#[derive(Clone, Debug)]
pub struct ClaimQueue {
    cells: VecDeque<GridCoord>,
    rate: f64,
}

impl Default for ClaimQueue {
    fn default() -> Self {
        Self {
            cells: VecDeque::new(),
            rate: 1.0,
        }
    }
}

/// What one [`RevealScheduler::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealTick {
    /// Cells turned `Filled` this tick.
    pub revealed: usize,
    /// Cells still queued.
    pub remaining: usize,
    /// Rate used for this tick (1.0 when idle).
    pub rate: f64,
    /// Fill fraction, set only on the tick that drained the queue.
    pub settled_fill: Option<f64>,
}

/// Drains a [`ClaimQueue`] over successive ticks.
#[derive(Clone, Debug)]
pub struct RevealScheduler {
    queue: ClaimQueue,
    growth: f64,
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GROWTH)
    }
}

impl RevealScheduler {
    /// Rate multiplier applied every tick unless configured otherwise.
    pub const DEFAULT_GROWTH: f64 = 1.25;

    /// Scheduler whose rate is multiplied by `growth` every tick.
    pub fn new(growth: f64) -> Self {
        Self {
            queue: ClaimQueue::default(),
            growth,
        }
    }

    /// Queue `cells` for reveal, marking each one `Crawl`.
    ///
    /// Cells that are not `Space` any more are skipped, so a cell is
    /// never queued twice. Returns how many were queued.
    pub fn enqueue<I>(&mut self, grid: &mut GridStore, cells: I) -> usize
    where
        I: IntoIterator<Item = GridCoord>,
    {
        let before = self.queue.cells.len();
        for cell in cells {
            if grid.set(cell, CellState::Crawl, false) {
                self.queue.cells.push_back(cell);
            }
        }
        self.queue.cells.len() - before
    }

    /// Reveal the next batch.
    ///
    /// Does nothing on an empty queue. Otherwise grows the rate, clamps
    /// it to the queue length and reveals `floor(rate)` cells from the
    /// head, emitting [`RevealEvent::Cell`] for each. The tick that
    /// empties the queue resets the rate and emits [`RevealEvent::Fill`].
    pub fn tick<S: RevealSink + ?Sized>(&mut self, grid: &mut GridStore, sink: &mut S) -> RevealTick {
        let pending = self.queue.cells.len();
        if pending == 0 {
            return RevealTick {
                rate: self.queue.rate,
                ..RevealTick::default()
            };
        }

        self.queue.rate = (self.queue.rate * self.growth).min(pending as f64);
        let rate = self.queue.rate;
        let batch = (rate as usize).clamp(1, pending);

        let mut revealed = 0;
        for cell in self.queue.cells.drain(..batch) {
            if grid.set(cell, CellState::Filled, false) {
                sink.emit(RevealEvent::Cell(cell));
                revealed += 1;
            }
        }

        let remaining = self.queue.cells.len();
        let settled_fill = if remaining == 0 {
            self.queue.rate = 1.0;
            let fill = grid.fill_fraction();
            sink.emit(RevealEvent::Fill(fill));
            log::debug!("reveal drained, fill {:.3}", fill);
            Some(fill)
        } else {
            None
        };

        RevealTick {
            revealed,
            remaining,
            rate,
            settled_fill,
        }
    }

    /// Abandon the in-progress reveal. Returns how many cells were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.queue.cells.len();
        self.queue = ClaimQueue::default();
        dropped
    }

    /// Current reveal rate.
    pub fn rate(&self) -> f64 {
        self.queue.rate
    }

    /// Growth factor.
    pub fn growth(&self) -> f64 {
        self.growth
    }

    /// Number of cells waiting.
    pub fn len(&self) -> usize {
        self.queue.cells.len()
    }

    /// `true` if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.cells.is_empty()
    }
}
