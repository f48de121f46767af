//! Seams to the engine's external collaborators.
//!
//! The engine never looks at enemies, sprites or colliders directly.
//! It asks an [`OccupantLocator`] how many hostiles sit inside a region
//! and pushes [`RevealEvent`]s into a [`RevealSink`].

use crate::coord::GridCoord;

/// Counts hostile occupants inside an arbitrary region.
///
/// Implemented by whatever tracks enemy positions. Any closure
/// `Fn(&[GridCoord]) -> usize` also works.
pub trait OccupantLocator {
    /// Number of occupants whose cell is contained in `region`.
    fn count_occupants(&self, region: &[GridCoord]) -> usize;
}

impl<F> OccupantLocator for F
where
    F: Fn(&[GridCoord]) -> usize,
{
    fn count_occupants(&self, region: &[GridCoord]) -> usize {
        self(region)
    }
}

/// Notification emitted while a claim is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealEvent {
    /// A cell became `Filled`.
    Cell(GridCoord),
    /// A reveal finished; carries the recomputed fill fraction in `[0, 1]`.
    Fill(f64),
}

/// Consumer of [`RevealEvent`]s (visual layer, hit detection, UI).
pub trait RevealSink {
    /// Receive one event.
    fn emit(&mut self, event: RevealEvent);
}

impl RevealSink for Vec<RevealEvent> {
    fn emit(&mut self, event: RevealEvent) {
        self.push(event);
    }
}

impl<S: RevealSink + ?Sized> RevealSink for &mut S {
    fn emit(&mut self, event: RevealEvent) {
        (**self).emit(event);
    }
}
