//! Occupant counting over a plain list of positions.

use cleave_core::{GridCoord, OccupantLocator};
use cleave_grid::GridTransform;

/// Grid positions of hostile occupants, refreshed by the caller.
///
/// Counts how many positions fall inside a region. Several occupants on
/// the same cell count separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupantPositions {
    positions: Vec<GridCoord>,
}

impl OccupantPositions {
    /// Occupants at `positions`.
    pub fn new(positions: Vec<GridCoord>) -> Self {
        Self { positions }
    }

    /// Occupants given in world units, mapped through `transform`.
    pub fn from_units(transform: &GridTransform, points: &[(f32, f32)]) -> Self {
        Self::new(
            points
                .iter()
                .map(|&(x, y)| transform.unit_to_grid(x, y))
                .collect(),
        )
    }

    /// Replace every position.
    pub fn update(&mut self, positions: impl IntoIterator<Item = GridCoord>) {
        self.positions.clear();
        self.positions.extend(positions);
    }

    /// Current positions.
    pub fn positions(&self) -> &[GridCoord] {
        &self.positions
    }
}

impl OccupantLocator for OccupantPositions {
    fn count_occupants(&self, region: &[GridCoord]) -> usize {
        self.positions
            .iter()
            .filter(|p| region.contains(p))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    #[test]
    fn counts_positions_inside_region() {
        let occ = OccupantPositions::new(vec![c(1, 1), c(1, 1), c(5, 5)]);
        assert_eq!(occ.count_occupants(&[c(1, 1), c(2, 1)]), 2);
        assert_eq!(occ.count_occupants(&[c(5, 5)]), 1);
        assert_eq!(occ.count_occupants(&[]), 0);
    }

    #[test]
    fn update_replaces_positions() {
        let mut occ = OccupantPositions::default();
        occ.update([c(3, 3)]);
        assert_eq!(occ.positions(), &[c(3, 3)]);
        occ.update([]);
        assert!(occ.positions().is_empty());
    }

    #[test]
    fn world_units_map_to_cells() {
        let t = GridTransform::new(24, 48, 1);
        let occ = OccupantPositions::from_units(&t, &[(0.0, 0.0), (-11.6, -23.4)]);
        assert_eq!(occ.positions(), &[c(12, 24), c(0, 1)]);
    }
}
