//! Grid coordinates and straight line segments.

use std::fmt;

/// A cell address on the playfield grid.
///
/// Components are signed so that probes stepping off the grid are
/// representable; such coordinates simply read as
/// [`CellState::Void`](crate::CellState::Void).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column, growing rightwards.
    pub x: i32,
    /// Row, growing upwards.
    pub y: i32,
}

impl GridCoord {
    /// Construct a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This coordinate shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev (L-inf) distance: the number of 8-connected unit steps
    /// between two cells on an unobstructed grid.
    pub fn chebyshev(self, other: GridCoord) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Squared Euclidean distance.
    pub fn distance_sq(self, other: GridCoord) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis along which a straight segment runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Endpoints share a `y` value.
    Horizontal,
    /// Endpoints share an `x` value.
    Vertical,
}

impl Orientation {
    /// Orientation of the segment between `a` and `b`.
    ///
    /// Returns `None` when the endpoints share neither axis. A single
    /// cell (`a == b`) reads as horizontal.
    pub fn of(a: GridCoord, b: GridCoord) -> Option<Self> {
        if a.y == b.y {
            Some(Self::Horizontal)
        } else if a.x == b.x {
            Some(Self::Vertical)
        } else {
            None
        }
    }
}

/// An immutable ordered pair of grid coordinates: one straight boundary
/// or cut segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LinePoints {
    a: GridCoord,
    b: GridCoord,
}

impl LinePoints {
    /// Segment from `a` to `b`.
    pub const fn new(a: GridCoord, b: GridCoord) -> Self {
        Self { a, b }
    }

    /// First endpoint.
    pub fn a(&self) -> GridCoord {
        self.a
    }

    /// Second endpoint.
    pub fn b(&self) -> GridCoord {
        self.b
    }

    /// Orientation, or `None` for a diagonal segment.
    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::of(self.a, self.b)
    }

    /// Number of cells covered, endpoints included.
    pub fn cell_len(&self) -> u32 {
        self.a.chebyshev(self.b) + 1
    }

    /// The same segment with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Iterate the cells of an axis-aligned segment from `a` to `b`.
    ///
    /// Diagonal segments step both axes at once.
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> {
        let dx = (self.b.x - self.a.x).signum();
        let dy = (self.b.y - self.a.y).signum();
        let start = self.a;
        (0..self.cell_len() as i32).map(move |i| start.offset(dx * i, dy * i))
    }
}

impl fmt::Display for LinePoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.a, self.b)
    }
}
