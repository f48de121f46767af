//! Benchmark profiles and session drivers for the Cleave territory engine.
//!
//! Provides pre-built [`TerritoryConfig`] profiles and deterministic
//! inputs for benchmarks and examples:
//!
//! - [`reference_profile`]: the default 24x48 playfield (1225 cells)
//! - [`stress_profile`]: a 240x480 playfield (~116K cells)
//! - [`cut_script`]: seeded wall-to-wall cuts
//! - [`scatter_occupants`]: seeded occupant placement
//! - [`play_session`]: run a script to completion

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cleave_core::{GridCoord, OccupantLocator, RevealSink};
use cleave_engine::{OccupantPositions, Territory, TerritoryConfig};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// The default playfield.
pub fn reference_profile(seed: u64) -> TerritoryConfig {
    TerritoryConfig {
        seed,
        ..TerritoryConfig::default()
    }
}

/// A playfield 10x the reference size along each axis.
pub fn stress_profile(seed: u64) -> TerritoryConfig {
    TerritoryConfig {
        size_x: 240,
        size_y: 480,
        seed,
        ..TerritoryConfig::default()
    }
}

/// `n` axis-aligned cuts spanning the playfield from wall to wall.
///
/// Orientation and position are drawn from a `ChaCha8Rng` seeded with
/// `seed`, so the same arguments always give the same script.
pub fn cut_script(config: &TerritoryConfig, n: usize, seed: u64) -> Vec<(GridCoord, GridCoord)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (sx, sy) = (config.size_x as i32, config.size_y as i32);
    (0..n)
        .map(|_| {
            if rng.random_bool(0.5) {
                let y = rng.random_range(1..sy);
                (GridCoord::new(0, y), GridCoord::new(sx, y))
            } else {
                let x = rng.random_range(1..sx);
                (GridCoord::new(x, 0), GridCoord::new(x, sy))
            }
        })
        .collect()
}

/// `n` occupants on interior cells, placed deterministically from `seed`.
pub fn scatter_occupants(config: &TerritoryConfig, n: usize, seed: u64) -> OccupantPositions {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (sx, sy) = (config.size_x as i32, config.size_y as i32);
    OccupantPositions::new(
        (0..n)
            .map(|_| GridCoord::new(rng.random_range(1..sx), rng.random_range(1..sy)))
            .collect(),
    )
}

/// Totals from [`play_session`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionReport {
    /// Cuts the territory accepted.
    pub accepted: usize,
    /// Cuts rejected as invalid.
    pub rejected: usize,
    /// Reveal ticks run.
    pub ticks: usize,
    /// Settled fill fraction at the end.
    pub fill: f64,
    /// Whether the fill quota was met.
    pub quota_reached: bool,
}

/// Apply every cut in `script`, draining the reveal after each, and stop
/// early once the quota is reached.
pub fn play_session<L, S>(
    territory: &mut Territory,
    script: &[(GridCoord, GridCoord)],
    occupants: &L,
    sink: &mut S,
) -> SessionReport
where
    L: OccupantLocator + ?Sized,
    S: RevealSink + ?Sized,
{
    let mut report = SessionReport::default();
    for &(a, b) in script {
        match territory.cut(a, b, occupants) {
            Ok(_) => report.accepted += 1,
            Err(e) => {
                log::debug!("skipping cut: {e}");
                report.rejected += 1;
                continue;
            }
        }
        while territory.pending() > 0 {
            territory.tick(sink);
            report.ticks += 1;
        }
        if territory.quota_reached() {
            break;
        }
    }
    report.fill = territory.settled_fill();
    report.quota_reached = territory.quota_reached();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleave_engine::NullSink;

    #[test]
    fn profiles_validate() {
        reference_profile(42).validate().unwrap();
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn cut_script_is_deterministic_and_in_range() {
        let cfg = reference_profile(0);
        let a = cut_script(&cfg, 50, 7);
        assert_eq!(a, cut_script(&cfg, 50, 7));
        for (p, q) in &a {
            assert!(p.x == q.x || p.y == q.y);
            for c in [p, q] {
                assert!((0..=24).contains(&c.x) && (0..=48).contains(&c.y));
            }
        }
    }

    #[test]
    fn scattered_occupants_are_interior() {
        let cfg = reference_profile(0);
        let occ = scatter_occupants(&cfg, 10, 3);
        assert_eq!(occ.positions().len(), 10);
        assert!(occ
            .positions()
            .iter()
            .all(|p| (1..24).contains(&p.x) && (1..48).contains(&p.y)));
    }

    #[test]
    fn empty_session_claims_everything() {
        let cfg = reference_profile(1);
        let mut t = Territory::new(cfg.clone()).unwrap();
        let script = cut_script(&cfg, 20, 1);
        let report = play_session(&mut t, &script, &OccupantPositions::default(), &mut NullSink);
        // No occupants: the first cut claims both sides.
        assert_eq!(report.accepted, 1);
        assert!(report.quota_reached);
        assert_eq!(report.fill, 1.0);
    }
}
