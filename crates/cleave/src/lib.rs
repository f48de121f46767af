//! Cleave: a territory-division engine for grid-based line-cutting games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Cleave sub-crates. For most users, adding `cleave` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cleave::prelude::*;
//!
//! // A 4 x 5 open interior ringed by walls.
//! let mut territory = Territory::new(TerritoryConfig {
//!     size_x: 5,
//!     size_y: 6,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! // One hostile above the middle row.
//! let occupants = OccupantPositions::new(vec![GridCoord::new(2, 5)]);
//! let outcome = territory
//!     .cut(GridCoord::new(0, 3), GridCoord::new(5, 3), &occupants)
//!     .unwrap();
//! assert_eq!(outcome.decision, ClaimDecision::FewerOccupants(Side::A));
//!
//! // Reveal the claim a batch at a time.
//! let mut events: Vec<RevealEvent> = Vec::new();
//! while territory.pending() > 0 {
//!     territory.tick(&mut events);
//! }
//! assert!(territory.settled_fill() > 0.5);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cleave-core` | Cell states, coordinates, errors, collaborator traits |
//! | [`grid`] | `cleave-grid` | Grid store, layouts, flood fill, tracing, A* |
//! | [`engine`] | `cleave-engine` | Territory, claim policy, reveal pacing, levels |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`cleave-core`).
///
/// Contains [`types::CellState`], [`types::GridCoord`],
/// [`types::LinePoints`], the error enums, and the collaborator traits
/// ([`types::OccupantLocator`], [`types::RevealSink`]).
pub use cleave_core as types;

/// Grid storage and spatial algorithms (`cleave-grid`).
///
/// [`grid::GridStore`] owns the cells; [`grid::flood_fill`],
/// [`grid::trace_boundaries`] and [`grid::find_path`] read it.
pub use cleave_grid as grid;

/// Playfield orchestration (`cleave-engine`).
///
/// [`engine::Territory`] ties cutting, claim selection and reveal
/// together; [`engine::LevelSet`] sequences levels.
pub use cleave_engine as engine;

/// Common imports for typical Cleave usage.
///
/// ```rust
/// use cleave::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use cleave_core::{
        CellState, GridCoord, LinePoints, OccupantLocator, Orientation, RevealEvent, RevealSink,
    };

    // Errors
    pub use cleave_core::{CutError, LayoutError};
    pub use cleave_engine::{ConfigError, LevelError};

    // Grid
    pub use cleave_grid::{GridStore, GridTransform, Layout};

    // Engine
    pub use cleave_engine::{
        ChannelSink, ClaimDecision, CutOutcome, LevelSet, NullSink, OccupantPositions, Side,
        Territory, TerritoryConfig, TickMetrics,
    };
}
