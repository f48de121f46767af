//! Grid storage and spatial algorithms for Cleave.
//!
//! [`GridStore`] owns the cell array and enforces the one-directional
//! `Space → Crawl → Filled` rule. Everything else in this crate reads
//! a store by reference:
//!
//! - [`flood_fill`]: open-region discovery on one side of a line
//! - [`trace_boundaries`]: wall cells compressed into straight segments
//! - [`find_path`]: A* search over open cells
//!
//! All neighbourhood queries are 8-connected (cardinal + diagonal).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod flood;
pub mod layout;
pub mod neighbourhood;
pub mod path;
pub mod store;
pub mod units;

pub use boundary::{trace, trace_boundaries, BoundaryTrace};
pub use flood::{find_seed, flood_fill, Region};
pub use layout::Layout;
pub use path::find_path;
pub use store::GridStore;
pub use units::GridTransform;
