//! Per-tick metrics for a territory.
//!
//! [`TickMetrics`] captures what a single [`Territory::tick`] did, for
//! telemetry and pacing diagnostics.
//!
//! [`Territory::tick`]: crate::territory::Territory::tick

/// Reveal progress and timing for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickMetrics {
    /// Cells turned `Filled` this tick.
    pub revealed: usize,
    /// Cells still waiting in the claim queue.
    pub remaining: usize,
    /// Reveal rate used this tick.
    pub rate: f64,
    /// Fill fraction after the tick.
    pub fill: f64,
    /// Wall-clock time for the tick, in microseconds.
    pub duration_us: u64,
}
