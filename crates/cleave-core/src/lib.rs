//! Core types and traits for the Cleave territory-division engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other Cleave crate: cell states,
//! grid coordinates, boundary segments, error types, and the traits
//! through which the engine talks to its external collaborators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod traits;

pub use cell::CellState;
pub use coord::{GridCoord, LinePoints, Orientation};
pub use error::{CutError, LayoutError};
pub use traits::{OccupantLocator, RevealEvent, RevealSink};
