//! Core engine types: coordinates and grid geometry, RNG, configuration, errors.
//!
//! Everything here is independent of game state. The board, pathfinder and
//! turn resolver are all built on top of these pieces.

pub mod coord;
pub mod rng;
pub mod config;
pub mod error;

pub use coord::{Coord, GridSize};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{GameConfig, CLASSIC_SCATTER_ATTEMPTS, MIN_SIDE};
pub use error::{BoardSnapshotError, ConfigError, GameError, InvalidBlockReason};
