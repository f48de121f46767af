//! Territory configuration, validation, and error types.
//!
//! [`TerritoryConfig`] is the input for constructing a
//! [`Territory`](crate::territory::Territory).
//! [`validate()`](TerritoryConfig::validate) checks every field before
//! anything is allocated.

use std::error::Error;
use std::fmt;

use cleave_core::LayoutError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`TerritoryConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The playfield is smaller than 2 × 2 or too large to address.
    InvalidSize {
        /// Configured `size_x`.
        size_x: u32,
        /// Configured `size_y`.
        size_y: u32,
    },
    /// `fill_quota` is NaN, infinite, or outside `(0, 1]`.
    InvalidQuota {
        /// The invalid value.
        value: f64,
    },
    /// `reveal_growth` is NaN, infinite, or not above 1.0.
    InvalidGrowth {
        /// The invalid value.
        value: f64,
    },
    /// `interleave` is zero.
    InterleaveZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size_x, size_y } => {
                write!(
                    f,
                    "playfield {size_x}x{size_y} must be at least 2x2 and at most {max}x{max}",
                    max = LayoutError::MAX_DIM
                )
            }
            Self::InvalidQuota { value } => {
                write!(f, "fill_quota must be finite and in (0, 1], got {value}")
            }
            Self::InvalidGrowth { value } => {
                write!(f, "reveal_growth must be finite and above 1.0, got {value}")
            }
            Self::InterleaveZero => write!(f, "interleave must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── LevelError ─────────────────────────────────────────────────────

/// Errors raised while building or loading levels.
#[derive(Debug, PartialEq)]
pub enum LevelError {
    /// A level layout could not be built or parsed.
    Layout(LayoutError),
    /// A level set needs at least one layout.
    Empty,
    /// A layout's dimensions differ from the territory's configuration.
    SizeMismatch {
        /// Configured `(size_x, size_y)`.
        expected: (u32, u32),
        /// The layout's `(size_x, size_y)`.
        found: (u32, u32),
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "layout: {e}"),
            Self::Empty => write!(f, "level set has no layouts"),
            Self::SizeMismatch { expected, found } => write!(
                f,
                "layout is {}x{}, territory expects {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for LevelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for LevelError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

// ── TerritoryConfig ────────────────────────────────────────────────

/// Tunables for one playfield.
#[derive(Clone, Debug, PartialEq)]
pub struct TerritoryConfig {
    /// Largest x coordinate (inclusive). Default: 24.
    pub size_x: u32,
    /// Largest y coordinate (inclusive). Default: 48.
    pub size_y: u32,
    /// Fill fraction at which the level counts as complete. Default: 0.85.
    pub fill_quota: f64,
    /// Multiplier applied to the reveal rate every tick. Default: 1.25.
    pub reveal_growth: f64,
    /// Cells taken from each side in turn when both sides are claimed.
    /// Default: 2.
    pub interleave: usize,
    /// Seed for the tie-break random source. Default: 0.
    pub seed: u64,
}

impl Default for TerritoryConfig {
    fn default() -> Self {
        Self {
            size_x: 24,
            size_y: 48,
            fill_quota: 0.85,
            reveal_growth: 1.25,
            interleave: 2,
            seed: 0,
        }
    }
}

impl TerritoryConfig {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = LayoutError::MAX_DIM;
        if self.size_x < 2 || self.size_y < 2 || self.size_x > max || self.size_y > max {
            return Err(ConfigError::InvalidSize {
                size_x: self.size_x,
                size_y: self.size_y,
            });
        }
        if !self.fill_quota.is_finite() || self.fill_quota <= 0.0 || self.fill_quota > 1.0 {
            return Err(ConfigError::InvalidQuota {
                value: self.fill_quota,
            });
        }
        if !self.reveal_growth.is_finite() || self.reveal_growth <= 1.0 {
            return Err(ConfigError::InvalidGrowth {
                value: self.reveal_growth,
            });
        }
        if self.interleave == 0 {
            return Err(ConfigError::InterleaveZero);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = TerritoryConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!((cfg.size_x, cfg.size_y), (24, 48));
        assert_eq!(cfg.fill_quota, 0.85);
    }

    #[test]
    fn rejects_tiny_playfield() {
        let cfg = TerritoryConfig {
            size_x: 1,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidSize {
                size_x: 1,
                size_y: 48
            })
        );
    }

    #[test]
    fn rejects_huge_playfield() {
        let cfg = TerritoryConfig {
            size_y: LayoutError::MAX_DIM + 1,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidSize { .. })));
    }

    #[test]
    fn rejects_bad_quota() {
        for value in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            let cfg = TerritoryConfig {
                fill_quota: value,
                ..Default::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidQuota { .. })),
                "quota {value} accepted"
            );
        }
        let full = TerritoryConfig {
            fill_quota: 1.0,
            ..Default::default()
        };
        assert_eq!(full.validate(), Ok(()));
    }

    #[test]
    fn rejects_non_growing_rate() {
        for value in [1.0, 0.5, f64::NAN] {
            let cfg = TerritoryConfig {
                reveal_growth: value,
                ..Default::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidGrowth { .. })
            ));
        }
    }

    #[test]
    fn rejects_zero_interleave() {
        let cfg = TerritoryConfig {
            interleave: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InterleaveZero));
        assert_eq!(
            ConfigError::InterleaveZero.to_string(),
            "interleave must be at least 1"
        );
    }

    #[test]
    fn level_error_wraps_layout_error() {
        let inner = LayoutError::TooSmall {
            size_x: 1,
            size_y: 1,
        };
        let err = LevelError::from(inner.clone());
        assert!(err.to_string().starts_with("layout: "));
        assert!(Error::source(&err).is_some());
        assert!(Error::source(&LevelError::Empty).is_none());
    }
}
