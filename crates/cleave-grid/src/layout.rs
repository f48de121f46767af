//! Level layouts: the initial cell states a [`GridStore`](crate::GridStore)
//! is loaded from.

use cleave_core::{CellState, GridCoord, LayoutError};

/// Initial state of every cell in a level.
///
/// Bounds are inclusive: a layout with `size_x = 24` has columns
/// `0..=24`. Cells are stored row-major with `y = 0` first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    size_x: u32,
    size_y: u32,
    cells: Vec<CellState>,
}

impl Layout {
    /// Default playfield bounds.
    pub const DEFAULT_SIZE_X: u32 = 24;
    /// Default playfield bounds.
    pub const DEFAULT_SIZE_Y: u32 = 48;

    fn check_dims(size_x: u32, size_y: u32) -> Result<usize, LayoutError> {
        if size_x < 2 || size_y < 2 {
            return Err(LayoutError::TooSmall { size_x, size_y });
        }
        if size_x > LayoutError::MAX_DIM || size_y > LayoutError::MAX_DIM {
            return Err(LayoutError::TooLarge { size_x, size_y });
        }
        Ok((size_x as usize + 1) * (size_y as usize + 1))
    }

    /// Open playfield ringed by `Bounds` cells.
    ///
    /// Used when no explicit layout is supplied.
    pub fn bordered(size_x: u32, size_y: u32) -> Result<Self, LayoutError> {
        Self::check_dims(size_x, size_y)?;
        Ok(Self::ring(size_x, size_y))
    }

    fn ring(size_x: u32, size_y: u32) -> Self {
        let width = size_x as usize + 1;
        let cells = (0..width * (size_y as usize + 1))
            .map(|i| {
                let x = (i % width) as u32;
                let y = (i / width) as u32;
                if x == 0 || y == 0 || x == size_x || y == size_y {
                    CellState::Bounds
                } else {
                    CellState::Space
                }
            })
            .collect();
        Self {
            size_x,
            size_y,
            cells,
        }
    }

    /// Parse a character layout.
    ///
    /// `'0'` is `Bounds`, `'1'` is `Void`, `'2'` is `Space`. Line breaks
    /// are ignored, so the text may be wrapped at any width; the `i`-th
    /// code lands on `(i % (size_x + 1), i / (size_x + 1))`. Cells the
    /// text does not reach stay `Void`.
    pub fn parse(text: &str, size_x: u32, size_y: u32) -> Result<Self, LayoutError> {
        let n = Self::check_dims(size_x, size_y)?;
        let mut cells = vec![CellState::Void; n];
        let codes = text.chars().filter(|&ch| ch != '\n' && ch != '\r');
        let mut found = 0usize;
        for (index, code) in codes.enumerate() {
            found = index + 1;
            let state = CellState::from_layout_code(code)
                .ok_or(LayoutError::UnknownCode { code, index })?;
            if index >= n {
                continue;
            }
            cells[index] = state;
        }
        if found > n {
            return Err(LayoutError::TooManyCells { expected: n, found });
        }
        Ok(Self {
            size_x,
            size_y,
            cells,
        })
    }

    /// Build from an explicit row-major cell vector.
    pub fn from_cells(
        size_x: u32,
        size_y: u32,
        cells: Vec<CellState>,
    ) -> Result<Self, LayoutError> {
        let n = Self::check_dims(size_x, size_y)?;
        if cells.len() != n {
            return Err(LayoutError::CellCountMismatch {
                expected: n,
                found: cells.len(),
            });
        }
        Ok(Self {
            size_x,
            size_y,
            cells,
        })
    }

    /// Replace a single cell. Out-of-range coordinates are ignored.
    pub fn with_cell(mut self, coord: GridCoord, state: CellState) -> Self {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state;
        }
        self
    }

    /// Fill an inclusive rectangle with `state`, clipped to the grid.
    pub fn with_rect(mut self, min: GridCoord, max: GridCoord, state: CellState) -> Self {
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if let Some(i) = self.index(GridCoord::new(x, y)) {
                    self.cells[i] = state;
                }
            }
        }
        self
    }

    /// Largest valid x.
    pub fn size_x(&self) -> u32 {
        self.size_x
    }

    /// Largest valid y.
    pub fn size_y(&self) -> u32 {
        self.size_y
    }

    /// Row-major cells, `y = 0` first.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// State at `coord`, `Void` when out of range.
    pub fn get(&self, coord: GridCoord) -> CellState {
        self.index(coord)
            .map_or(CellState::Void, |i| self.cells[i])
    }

    fn index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as u32, coord.y as u32);
        if x > self.size_x || y > self.size_y {
            return None;
        }
        Some(y as usize * (self.size_x as usize + 1) + x as usize)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::ring(Self::DEFAULT_SIZE_X, Self::DEFAULT_SIZE_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    #[test]
    fn bordered_rings_space_with_bounds() {
        let l = Layout::bordered(4, 3).unwrap();
        assert_eq!(l.cells().len(), 20);
        assert_eq!(l.get(c(0, 0)), CellState::Bounds);
        assert_eq!(l.get(c(4, 3)), CellState::Bounds);
        assert_eq!(l.get(c(2, 0)), CellState::Bounds);
        assert_eq!(l.get(c(0, 2)), CellState::Bounds);
        assert_eq!(l.get(c(1, 1)), CellState::Space);
        assert_eq!(l.get(c(3, 2)), CellState::Space);
        let interior = l.cells().iter().filter(|&&s| s == CellState::Space).count();
        assert_eq!(interior, 3 * 2);
    }

    #[test]
    fn default_matches_bordered_default_bounds() {
        let expected =
            Layout::bordered(Layout::DEFAULT_SIZE_X, Layout::DEFAULT_SIZE_Y).unwrap();
        assert_eq!(Layout::default(), expected);
        assert_eq!(expected.cells().len(), 25 * 49);
    }

    #[test]
    fn too_small_rejected() {
        assert_eq!(
            Layout::bordered(1, 5),
            Err(LayoutError::TooSmall { size_x: 1, size_y: 5 })
        );
    }

    #[test]
    fn too_large_rejected() {
        let big = LayoutError::MAX_DIM + 1;
        assert!(matches!(
            Layout::bordered(big, 4),
            Err(LayoutError::TooLarge { .. })
        ));
    }

    #[test]
    fn parse_maps_codes_row_major_from_bottom() {
        // 3 x 3 cells: bottom row walls, middle row void/space/void, top row walls.
        let text = "000\n121\n000\n";
        let l = Layout::parse(text, 2, 2).unwrap();
        assert_eq!(l.get(c(0, 0)), CellState::Bounds);
        assert_eq!(l.get(c(0, 1)), CellState::Void);
        assert_eq!(l.get(c(1, 1)), CellState::Space);
        assert_eq!(l.get(c(2, 1)), CellState::Void);
        assert_eq!(l.get(c(2, 2)), CellState::Bounds);
    }

    #[test]
    fn parse_ignores_carriage_returns_and_wrapping() {
        let a = Layout::parse("000\r\n121\r\n000", 2, 2).unwrap();
        let b = Layout::parse("0001\n21000", 2, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_short_text_leaves_void() {
        let l = Layout::parse("0000", 2, 2).unwrap();
        assert_eq!(l.get(c(0, 1)), CellState::Bounds);
        assert_eq!(l.get(c(1, 1)), CellState::Void);
        assert_eq!(l.get(c(2, 2)), CellState::Void);
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(
            Layout::parse("00x", 2, 2),
            Err(LayoutError::UnknownCode { code: 'x', index: 2 })
        );
    }

    #[test]
    fn parse_rejects_overlong_text() {
        assert_eq!(
            Layout::parse("0000000000", 2, 2),
            Err(LayoutError::TooManyCells {
                expected: 9,
                found: 10
            })
        );
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(matches!(
            Layout::from_cells(2, 2, vec![CellState::Space; 8]),
            Err(LayoutError::CellCountMismatch { expected: 9, found: 8 })
        ));
        assert!(Layout::from_cells(2, 2, vec![CellState::Space; 9]).is_ok());
    }

    #[test]
    fn with_rect_clips_to_grid() {
        let l = Layout::bordered(4, 4)
            .unwrap()
            .with_rect(c(3, 3), c(9, 9), CellState::Void);
        assert_eq!(l.get(c(3, 3)), CellState::Void);
        assert_eq!(l.get(c(4, 4)), CellState::Void);
        assert_eq!(l.get(c(2, 2)), CellState::Space);
    }
}
