//! Error types.
//!
//! Every error here is a caller-input error: it is reported synchronously and
//! never leaves partially mutated state behind. The search itself cannot fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coord;

/// Why a block proposal was structurally invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidBlockReason {
    /// The target is the cell the cat stands on.
    AgentCell,
    /// The cat is already trapped; the game accepts no more moves.
    GameOver,
}

impl std::fmt::Display for InvalidBlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBlockReason::AgentCell => write!(f, "the cat occupies that cell"),
            InvalidBlockReason::GameOver => write!(f, "the game is already over"),
        }
    }
}

/// Errors raised by board and turn operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("coordinate {coord} is outside the board")]
    OutOfBounds { coord: Coord },

    #[error("cell {coord} is already blocked")]
    AlreadyBlocked { coord: Coord },

    #[error("cannot block {coord}: {reason}")]
    InvalidBlock {
        coord: Coord,
        reason: InvalidBlockReason,
    },
}

/// Errors raised while validating a [`GameConfig`](super::config::GameConfig).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {width}x{height} is too small, both sides must be at least 3")]
    BoardTooSmall { width: i32, height: i32 },

    #[error("board {width}x{height} has too many cells")]
    BoardTooLarge { width: i32, height: i32 },

    #[error("starting cell {coord} is outside the board")]
    StartOutOfBounds { coord: Coord },
}

/// Errors raised while restoring a serialized [`Board`](crate::board::Board).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardSnapshotError {
    #[error("board {size} needs {expected} cells, snapshot has {found}")]
    CellCountMismatch {
        size: super::coord::GridSize,
        expected: usize,
        found: usize,
    },

    #[error("snapshot claims {claimed} blocked cells, found {found}")]
    BlockedCountMismatch { claimed: usize, found: usize },
}
