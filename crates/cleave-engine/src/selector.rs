//! Claim selection after a cut.
//!
//! Given the two regions a cut produced and the number of hostile
//! occupants in each, [`RegionSelector::select`] decides what becomes
//! claimed territory:
//!
//! 1. Neither side holds an occupant: both sides, interleaved.
//! 2. The sides differ in size: the smaller side.
//! 3. The sides differ in occupants: the side with fewer.
//! 4. Otherwise a fair coin flip.
//!
//! The coin is a seeded [`ChaCha8Rng`] by default, so sessions replay
//! deterministically for a given seed.

use std::fmt;

use cleave_core::GridCoord;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// One side of a cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Below a horizontal cut, left of a vertical one.
    A,
    /// Above a horizontal cut, right of a vertical one.
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Which rule picked the claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClaimDecision {
    /// No occupants anywhere; both sides claimed.
    Both,
    /// Sizes differed; the smaller side won.
    Smaller(Side),
    /// Equal sizes, occupants differed; the emptier side won.
    FewerOccupants(Side),
    /// Equal sizes and occupants; chosen at random.
    TieBreak(Side),
}

impl ClaimDecision {
    /// The claimed side, or `None` when both were claimed.
    pub fn side(&self) -> Option<Side> {
        match *self {
            Self::Both => None,
            Self::Smaller(s) | Self::FewerOccupants(s) | Self::TieBreak(s) => Some(s),
        }
    }
}

impl fmt::Display for ClaimDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both => write!(f, "both sides"),
            Self::Smaller(s) => write!(f, "smaller side {s}"),
            Self::FewerOccupants(s) => write!(f, "emptier side {s}"),
            Self::TieBreak(s) => write!(f, "tie-break side {s}"),
        }
    }
}

/// Cells to claim and the rule that chose them.
#[derive(Clone, Debug, PartialEq)]
pub struct Claim {
    /// Cells in reveal order.
    pub cells: Vec<GridCoord>,
    /// The rule that fired.
    pub decision: ClaimDecision,
}

/// Round-robin merge: `weave` cells from `a`, then `weave` from `b`, and
/// so on. Whatever remains of the longer input is appended.
///
/// A `weave` of zero is treated as one.
pub fn interleave(a: &[GridCoord], b: &[GridCoord], weave: usize) -> Vec<GridCoord> {
    let weave = weave.max(1);
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut ca = a.chunks(weave);
    let mut cb = b.chunks(weave);
    loop {
        let (na, nb) = (ca.next(), cb.next());
        if na.is_none() && nb.is_none() {
            break;
        }
        out.extend_from_slice(na.unwrap_or_default());
        out.extend_from_slice(nb.unwrap_or_default());
    }
    out
}

/// Applies the claim policy with an injectable random source.
#[derive(Clone, Debug)]
pub struct RegionSelector<R: Rng = ChaCha8Rng> {
    rng: R,
    weave: usize,
}

impl RegionSelector<ChaCha8Rng> {
    /// Selector seeded with `seed`, interleaving two cells at a time.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RegionSelector<R> {
    /// Selector drawing tie-breaks from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, weave: 2 }
    }

    /// Set how many cells each side contributes per turn when both
    /// sides are claimed. Clamped to at least 1.
    pub fn with_weave(mut self, weave: usize) -> Self {
        self.weave = weave.max(1);
        self
    }

    /// Cells per side per turn when both sides are claimed.
    pub fn weave(&self) -> usize {
        self.weave
    }

    /// Pick the claim for one cut.
    pub fn select(
        &mut self,
        side_a: &[GridCoord],
        side_b: &[GridCoord],
        occupants_a: usize,
        occupants_b: usize,
    ) -> Claim {
        let decision = if occupants_a == 0 && occupants_b == 0 {
            ClaimDecision::Both
        } else if side_a.len() != side_b.len() {
            ClaimDecision::Smaller(if side_a.len() < side_b.len() {
                Side::A
            } else {
                Side::B
            })
        } else if occupants_a != occupants_b {
            ClaimDecision::FewerOccupants(if occupants_a < occupants_b {
                Side::A
            } else {
                Side::B
            })
        } else {
            ClaimDecision::TieBreak(if self.rng.random_bool(0.5) {
                Side::A
            } else {
                Side::B
            })
        };

        let cells = match decision.side() {
            None => interleave(side_a, side_b, self.weave),
            Some(Side::A) => side_a.to_vec(),
            Some(Side::B) => side_b.to_vec(),
        };
        Claim { cells, decision }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleave_test_utils::{seeded_rng, FixedRng};

    fn cells(xs: std::ops::Range<i32>, y: i32) -> Vec<GridCoord> {
        xs.map(|x| GridCoord::new(x, y)).collect()
    }

    #[test]
    fn interleave_two_at_a_time_with_remainder() {
        let a = cells(0..5, 0);
        let b = cells(0..2, 1);
        let woven = interleave(&a, &b, 2);
        let expected: Vec<_> = [
            (0, 0),
            (1, 0),
            (0, 1),
            (1, 1),
            (2, 0),
            (3, 0),
            (4, 0),
        ]
        .into_iter()
        .map(GridCoord::from)
        .collect();
        assert_eq!(woven, expected);
    }

    #[test]
    fn interleave_empty_sides() {
        let a = cells(0..3, 0);
        assert_eq!(interleave(&a, &[], 2), a);
        assert_eq!(interleave(&[], &a, 2), a);
        assert!(interleave(&[], &[], 2).is_empty());
        assert_eq!(interleave(&a, &[], 0), a);
    }

    #[test]
    fn no_occupants_claims_both() {
        let mut sel = RegionSelector::new(0);
        let (a, b) = (cells(0..3, 0), cells(0..6, 1));
        let claim = sel.select(&a, &b, 0, 0);
        assert_eq!(claim.decision, ClaimDecision::Both);
        assert_eq!(claim.cells.len(), 9);
        assert_eq!(&claim.cells[..2], &a[..2]);
        assert_eq!(&claim.cells[2..4], &b[..2]);
    }

    #[test]
    fn smaller_side_wins_even_with_occupants() {
        let mut sel = RegionSelector::new(0);
        let (a, b) = (cells(0..3, 0), cells(0..6, 1));
        let claim = sel.select(&a, &b, 2, 0);
        assert_eq!(claim.decision, ClaimDecision::Smaller(Side::A));
        assert_eq!(claim.cells, a);

        let claim = sel.select(&b, &a, 0, 1);
        assert_eq!(claim.decision, ClaimDecision::Smaller(Side::B));
    }

    #[test]
    fn equal_sizes_prefer_fewer_occupants() {
        let mut sel = RegionSelector::new(0);
        let (a, b) = (cells(0..4, 0), cells(0..4, 1));
        let claim = sel.select(&a, &b, 0, 1);
        assert_eq!(claim.decision, ClaimDecision::FewerOccupants(Side::A));
        assert_eq!(claim.cells, a);
        let claim = sel.select(&a, &b, 3, 1);
        assert_eq!(claim.decision, ClaimDecision::FewerOccupants(Side::B));
        assert_eq!(claim.cells, b);
    }

    #[test]
    fn full_tie_uses_coin() {
        let mut sel = RegionSelector::new(7);
        let (a, b) = (cells(0..4, 0), cells(0..4, 1));
        let claim = sel.select(&a, &b, 1, 1);
        match claim.decision {
            ClaimDecision::TieBreak(Side::A) => assert_eq!(claim.cells, a),
            ClaimDecision::TieBreak(Side::B) => assert_eq!(claim.cells, b),
            other => panic!("unexpected decision {other:?}"),
        }
    }

    #[test]
    fn tie_break_is_deterministic_per_seed() {
        let (a, b) = (cells(0..4, 0), cells(0..4, 1));
        let run = |seed| {
            let mut sel = RegionSelector::new(seed);
            (0..32)
                .map(|_| sel.select(&a, &b, 1, 1).decision)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn injected_rng_matches_seeded_constructor() {
        let (a, b) = (cells(0..4, 0), cells(0..4, 1));
        let mut injected = RegionSelector::with_rng(seeded_rng(42));
        let mut seeded = RegionSelector::new(42);
        for _ in 0..32 {
            assert_eq!(
                injected.select(&a, &b, 1, 1).decision,
                seeded.select(&a, &b, 1, 1).decision
            );
        }
    }

    #[test]
    fn injected_rng_decides_the_tie() {
        let (a, b) = (cells(0..4, 0), cells(0..4, 1));

        let claim = RegionSelector::with_rng(FixedRng::low()).select(&a, &b, 2, 2);
        assert_eq!(claim.decision, ClaimDecision::TieBreak(Side::A));
        assert_eq!(claim.cells, a);

        let claim = RegionSelector::with_rng(FixedRng::high()).select(&a, &b, 2, 2);
        assert_eq!(claim.decision, ClaimDecision::TieBreak(Side::B));
        assert_eq!(claim.cells, b);
    }

    #[test]
    fn injected_rng_is_not_consulted_before_a_tie() {
        let (a, b) = (cells(0..3, 0), cells(0..4, 1));
        let mut sel = RegionSelector::with_rng(FixedRng::high());
        assert_eq!(sel.select(&a, &b, 1, 1).decision, ClaimDecision::Smaller(Side::A));
        assert_eq!(sel.select(&a, &a, 0, 1).decision, ClaimDecision::FewerOccupants(Side::A));
    }

    #[test]
    fn tie_break_is_roughly_fair() {
        let (a, b) = (cells(0..4, 0), cells(0..4, 1));
        let mut sel = RegionSelector::new(1234);
        let trials = 4000;
        let picked_a = (0..trials)
            .filter(|_| sel.select(&a, &b, 2, 2).decision == ClaimDecision::TieBreak(Side::A))
            .count();
        let ratio = picked_a as f64 / trials as f64;
        assert!((0.45..=0.55).contains(&ratio), "ratio = {ratio}");
    }

    #[test]
    fn custom_weave() {
        let mut sel = RegionSelector::new(0).with_weave(3);
        assert_eq!(sel.weave(), 3);
        let (a, b) = (cells(0..4, 0), cells(0..4, 1));
        let claim = sel.select(&a, &b, 0, 0);
        assert_eq!(&claim.cells[..3], &a[..3]);
        assert_eq!(&claim.cells[3..6], &b[..3]);
    }
}
