//! Cut, claim and reveal orchestration for Cleave playfields.
//!
//! A [`Territory`] owns one grid. Each accepted cut runs through
//! [`LineCutter`] (mark the line, flood both sides), [`RegionSelector`]
//! (decide the claim) and [`RevealScheduler`] (queue it), after which
//! [`Territory::tick`] reveals the claim a batch at a time.
//!
//! The crate never installs a logger; it reports through the `log`
//! facade and leaves the choice of backend to the application.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cutter;
pub mod events;
pub mod levels;
pub mod metrics;
pub mod occupants;
pub mod reveal;
pub mod selector;
pub mod territory;

pub use config::{ConfigError, LevelError, TerritoryConfig};
pub use cutter::{Cut, LineCutter};
pub use events::{ChannelSink, NullSink};
pub use levels::LevelSet;
pub use metrics::TickMetrics;
pub use occupants::OccupantPositions;
pub use reveal::{ClaimQueue, RevealScheduler, RevealTick};
pub use selector::{interleave, Claim, ClaimDecision, RegionSelector, Side};
pub use territory::{CutOutcome, Territory};
