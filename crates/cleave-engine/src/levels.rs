//! Ordered level catalogue.
//!
//! Level 0 is an introduction shown once. Advancing past the last level
//! wraps back to level 1.

use cleave_grid::Layout;

use crate::config::LevelError;

/// Layouts played in order, with a cursor on the current one.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelSet {
    levels: Vec<Layout>,
    current: usize,
}

impl LevelSet {
    /// A set starting at level 0. Fails if `levels` is empty.
    pub fn new(levels: Vec<Layout>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }
        Ok(Self { levels, current: 0 })
    }

    /// Parse every level from layout text.
    ///
    /// All levels share the dimensions `size_x × size_y`.
    pub fn parse<'a, I>(texts: I, size_x: u32, size_y: u32) -> Result<Self, LevelError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let levels = texts
            .into_iter()
            .map(|text| Layout::parse(text, size_x, size_y))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(levels)
    }

    /// Layout of the current level.
    pub fn current(&self) -> &Layout {
        &self.levels[self.current]
    }

    /// Index of the current level.
    pub fn index(&self) -> usize {
        self.current
    }

    /// Number of levels, introduction included.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`; a set holds at least one level.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Move to the next level and return it.
    ///
    /// After the last level play resumes at level 1. A single-level set
    /// stays on level 0.
    pub fn advance(&mut self) -> &Layout {
        let next = self.current + 1;
        self.current = if next < self.levels.len() {
            next
        } else if self.levels.len() > 1 {
            1
        } else {
            0
        };
        log::info!("advancing to level {}", self.current);
        self.current()
    }

    /// Jump back to the introduction.
    pub fn rewind(&mut self) {
        self.current = 0;
    }
}

impl Default for LevelSet {
    /// The default bordered playfield as the only level.
    fn default() -> Self {
        Self {
            levels: vec![Layout::default()],
            current: 0,
        }
    }
}
