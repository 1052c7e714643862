//! # hex-trap
//!
//! A headless engine for "trap the cat" on an offset hexagonal grid.
//!
//! The player blocks one cell per turn; after every block the cat runs
//! toward the nearest reachable edge of the board. The player wins when the
//! cat has no free neighbor left.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, input or asset handling. Presentation
//!    layers read [`GameState`] snapshots and call
//!    [`GameSession::propose_block`].
//!
//! 2. **Immutable Snapshots**: Boards are persistent values (`im-rs`);
//!    each turn derives a new board and the session swaps it in whole.
//!
//! 3. **Reproducible**: All randomness flows through [`RandomSource`];
//!    sessions are seeded and tests can script the cat's fallback moves.
//!
//! ## Modules
//!
//! - `core`: Coordinates, hex adjacency, RNG, configuration, errors
//! - `board`: Cell occupancy snapshots
//! - `pathfinding`: The cat's escape search
//! - `rules`: Turn resolution and game status
//! - `session`: The owned game session
//! - `sim`: Automated blockers and a headless game loop

pub mod core;
pub mod board;
pub mod pathfinding;
pub mod rules;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Coord, GridSize,
    GameRng, GameRngState, RandomSource,
    GameConfig,
    BoardSnapshotError, ConfigError, GameError, InvalidBlockReason,
};

pub use crate::board::{Board, Cell};

pub use crate::pathfinding::{border_distance, shortest_escape, EscapeSearch, SearchStats};

pub use crate::rules::{resolve_block, AgentMove, GameState, GameStatus, TurnOutcome};

pub use crate::session::{GameSession, TurnRecord};

pub use crate::sim::{
    BlockerPolicy, PathBlocker, RandomBlocker,
    SimulationConfig, SimulationReport, GameSummary,
    play_game, run_many,
};
