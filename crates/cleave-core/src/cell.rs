//! Cell states and the one-directional transition rule.

use std::fmt;

/// State of a single grid cell.
///
/// Normal play only ever moves a cell forward along
/// `Space → Crawl → Filled`. [`Bounds`](Self::Bounds) and
/// [`Void`](Self::Void) are fixed once a level is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Outside the playfield. Also returned for out-of-range reads.
    #[default]
    Void,
    /// Immutable border or wall.
    Bounds,
    /// Open and claimable.
    Space,
    /// Consumed by the current cut or queued for reveal.
    Crawl,
    /// Claimed territory.
    Filled,
}

impl CellState {
    /// All states, in declaration order.
    pub const ALL: [CellState; 5] = [
        CellState::Void,
        CellState::Bounds,
        CellState::Space,
        CellState::Crawl,
        CellState::Filled,
    ];

    /// `true` for the states that count toward the fill fraction:
    /// `Space`, `Crawl` and `Filled`.
    pub fn is_fillable(self) -> bool {
        matches!(self, Self::Space | Self::Crawl | Self::Filled)
    }

    /// Whether a non-forced write may move a cell from `self` to `next`.
    ///
    /// Same-state writes are allowed (they are no-ops).
    pub fn can_transition_to(self, next: CellState) -> bool {
        self == next
            || matches!(
                (self, next),
                (Self::Space, Self::Crawl) | (Self::Crawl, Self::Filled)
            )
    }

    /// Map a layout character to a state.
    ///
    /// `'0'` is a wall, `'1'` is outside the playfield and `'2'` is open.
    pub fn from_layout_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(Self::Bounds),
            '1' => Some(Self::Void),
            '2' => Some(Self::Space),
            _ => None,
        }
    }

    /// Single-character glyph used by grid dumps.
    pub fn glyph(self) -> char {
        match self {
            Self::Void => ' ',
            Self::Bounds => '#',
            Self::Space => '.',
            Self::Crawl => '+',
            Self::Filled => '@',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Void => "void",
            Self::Bounds => "bounds",
            Self::Space => "space",
            Self::Crawl => "crawl",
            Self::Filled => "filled",
        };
        f.write_str(name)
    }
}
