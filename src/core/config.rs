//! Session configuration.
//!
//! A `GameConfig` fixes everything that stays constant for a session's
//! lifetime: board dimensions, where the cat starts, the RNG seed, and how
//! many rocks to try scattering before the first turn.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, GridSize};
use super::error::ConfigError;

/// Smallest allowed side length; anything less has no interior cells.
pub const MIN_SIDE: i32 = 3;

/// Scatter attempts used by [`GameConfig::classic`].
pub const CLASSIC_SCATTER_ATTEMPTS: usize = 20;

/// Complete session configuration.
///
/// ## Example
///
/// ```
/// use hex_trap::core::{Coord, GameConfig};
///
/// let config = GameConfig::new(7, 9)
///     .with_cat_start(Coord::new(3, 4))
///     .with_seed(99);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.start(), Coord::new(3, 4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells.
    pub width: i32,

    /// Board height in cells.
    pub height: i32,

    /// Where the cat starts. `None` means the board center.
    pub cat_start: Option<Coord>,

    /// Seed for the session RNG.
    pub seed: u64,

    /// How many random rock placements to attempt at session start.
    ///
    /// Attempts that land on the cat's row or column, or on a cell that is
    /// already blocked, are skipped, so the number of rocks is at most this.
    pub scatter_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 11,
            height: 11,
            cat_start: None,
            seed: 42,
            scatter_attempts: 0,
        }
    }
}

impl GameConfig {
    /// Create a config for a `width` x `height` board with default settings.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Classic setup: 11x11, centered cat, a handful of rocks.
    #[must_use]
    pub fn classic() -> Self {
        Self::default().with_scatter_attempts(CLASSIC_SCATTER_ATTEMPTS)
    }

    /// Set the cat's starting cell.
    #[must_use]
    pub fn with_cat_start(mut self, start: Coord) -> Self {
        self.cat_start = Some(start);
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of rock scatter attempts.
    #[must_use]
    pub fn with_scatter_attempts(mut self, attempts: usize) -> Self {
        self.scatter_attempts = attempts;
        self
    }

    /// Board dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    /// The cat's starting cell, resolving the default.
    #[must_use]
    pub fn start(&self) -> Coord {
        self.cat_start.unwrap_or_else(|| self.size().center())
    }

    /// Check the dimension and start-cell constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        // Search nodes are addressed by u32 with u32::MAX reserved
        let cells = i64::from(self.width) * i64::from(self.height);
        if cells >= i64::from(u32::MAX) {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }

        let start = self.start();
        if !self.size().contains(start) {
            return Err(ConfigError::StartOutOfBounds { coord: start });
        }

        Ok(())
    }
}
