//! Error types shared across Cleave crates.
//!
//! Organized by subsystem: level layout parsing and division lines.

use std::error::Error;
use std::fmt;

use crate::coord::GridCoord;

/// Errors from parsing or constructing a level layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has fewer than two cells along an axis.
    TooSmall {
        /// Requested maximum x (inclusive).
        size_x: u32,
        /// Requested maximum y (inclusive).
        size_y: u32,
    },
    /// An axis exceeds [`MAX_DIM`](LayoutError::MAX_DIM).
    TooLarge {
        /// Requested maximum x (inclusive).
        size_x: u32,
        /// Requested maximum y (inclusive).
        size_y: u32,
    },
    /// A character in the layout text has no cell mapping.
    UnknownCode {
        /// The offending character.
        code: char,
        /// Cell index (newlines excluded) at which it appeared.
        index: usize,
    },
    /// The layout text describes more cells than the grid holds.
    TooManyCells {
        /// Number of cells the grid holds.
        expected: usize,
        /// Number of cells in the text.
        found: usize,
    },
    /// An explicit cell vector does not match the grid dimensions.
    CellCountMismatch {
        /// Number of cells the grid holds.
        expected: usize,
        /// Number of cells supplied.
        found: usize,
    },
}

impl LayoutError {
    /// Largest accepted inclusive bound on either axis.
    pub const MAX_DIM: u32 = 1 << 14;
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { size_x, size_y } => {
                write!(f, "layout bounds [0, {size_x}] x [0, {size_y}] are too small")
            }
            Self::TooLarge { size_x, size_y } => write!(
                f,
                "layout bounds [0, {size_x}] x [0, {size_y}] exceed the maximum of {}",
                Self::MAX_DIM
            ),
            Self::UnknownCode { code, index } => {
                write!(f, "unknown layout code {code:?} at cell {index}")
            }
            Self::TooManyCells { expected, found } => {
                write!(f, "layout text has {found} cells, grid holds {expected}")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, got {found}")
            }
        }
    }
}

impl Error for LayoutError {}

/// Errors from committing a division line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CutError {
    /// An endpoint lies outside the grid.
    OutOfRange {
        /// The offending endpoint.
        coord: GridCoord,
    },
    /// The endpoints share neither an x nor a y value.
    NotAxisAligned {
        /// First endpoint.
        a: GridCoord,
        /// Second endpoint.
        b: GridCoord,
    },
    /// Both endpoints are the same cell.
    ZeroLength {
        /// The repeated endpoint.
        at: GridCoord,
    },
}

impl fmt::Display for CutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { coord } => write!(f, "cut endpoint {coord} is outside the grid"),
            Self::NotAxisAligned { a, b } => {
                write!(f, "cut {a} -> {b} is not axis-aligned")
            }
            Self::ZeroLength { at } => write!(f, "cut at {at} has zero length"),
        }
    }
}

impl Error for CutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = LayoutError::UnknownCode { code: 'x', index: 7 };
        assert_eq!(e.to_string(), "unknown layout code 'x' at cell 7");

        let e = CutError::NotAxisAligned {
            a: GridCoord::new(0, 0),
            b: GridCoord::new(2, 3),
        };
        assert_eq!(e.to_string(), "cut (0, 0) -> (2, 3) is not axis-aligned");
    }
}
