//! Test utilities and mock types for Cleave development.
//!
//! Provides scripted implementations of the collaborator traits
//! ([`OccupantLocator`], [`RevealSink`]), seeded and fixed random sources
//! for tie-break tests, and a set of small layout fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::collections::VecDeque;

use cleave_core::{GridCoord, OccupantLocator, RevealEvent, RevealSink};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use fixtures::{open_room, split_room, walled_goal};

/// A deterministic random source for tie-break tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A random source that returns the same word forever.
///
/// `FixedRng::low()` makes every `random_bool(0.5)` come up `true`;
/// `FixedRng::high()` makes it come up `false`.
#[derive(Clone, Copy, Debug)]
pub struct FixedRng(pub u64);

impl FixedRng {
    pub fn low() -> Self {
        Self(0)
    }

    pub fn high() -> Self {
        Self(u64::MAX)
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.0 as u8);
    }
}

/// [`OccupantLocator`] that answers from a script.
///
/// Each query pops the next scripted count; once the script runs out,
/// `fallback` is returned. Every queried region size is recorded.
pub struct FixedOccupants {
    script: RefCell<VecDeque<usize>>,
    fallback: usize,
    queries: RefCell<Vec<usize>>,
}

impl FixedOccupants {
    /// Answer `counts` in order, then `0`.
    pub fn new(counts: impl IntoIterator<Item = usize>) -> Self {
        Self::with_fallback(counts, 0)
    }

    /// Answer `counts` in order, then `fallback` forever.
    pub fn with_fallback(counts: impl IntoIterator<Item = usize>, fallback: usize) -> Self {
        Self {
            script: RefCell::new(counts.into_iter().collect()),
            fallback,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Always answer `count`.
    pub fn always(count: usize) -> Self {
        Self::with_fallback([], count)
    }

    /// Sizes of every region queried so far.
    pub fn queried_sizes(&self) -> Vec<usize> {
        self.queries.borrow().clone()
    }
}

impl OccupantLocator for FixedOccupants {
    fn count_occupants(&self, region: &[GridCoord]) -> usize {
        self.queries.borrow_mut().push(region.len());
        self.script.borrow_mut().pop_front().unwrap_or(self.fallback)
    }
}

/// [`RevealSink`] that keeps every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<RevealEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revealed cells, in order.
    pub fn cells(&self) -> Vec<GridCoord> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::Cell(c) => Some(*c),
                RevealEvent::Fill(_) => None,
            })
            .collect()
    }

    /// Announced fill fractions, in order.
    pub fn fills(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::Fill(f) => Some(*f),
                RevealEvent::Cell(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RevealSink for RecordingSink {
    fn emit(&mut self, event: RevealEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn fixed_occupants_follow_script_then_fallback() {
        let occ = FixedOccupants::with_fallback([3, 0], 9);
        let region = [GridCoord::new(1, 1), GridCoord::new(2, 1)];
        assert_eq!(occ.count_occupants(&region), 3);
        assert_eq!(occ.count_occupants(&region[..1]), 0);
        assert_eq!(occ.count_occupants(&[]), 9);
        assert_eq!(occ.queried_sizes(), vec![2, 1, 0]);
    }

    #[test]
    fn recording_sink_splits_events() {
        let mut sink = RecordingSink::new();
        sink.emit(RevealEvent::Cell(GridCoord::new(1, 2)));
        sink.emit(RevealEvent::Fill(0.5));
        assert_eq!(sink.cells(), vec![GridCoord::new(1, 2)]);
        assert_eq!(sink.fills(), vec![0.5]);
        sink.clear();
        assert!(sink.events.is_empty());
    }

    #[test]
    fn fixed_rng_pins_the_coin() {
        assert!((0..16).all(|_| FixedRng::low().random_bool(0.5)));
        assert!((0..16).all(|_| !FixedRng::high().random_bool(0.5)));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let (mut a, mut b) = (seeded_rng(5), seeded_rng(5));
        for _ in 0..4 {
            assert_eq!(a.random::<u32>(), b.random::<u32>());
        }
    }
}
