//! Headless simulation.
//!
//! Plays whole games with an automated blocker in place of the human player.
//! Useful for:
//! - regression tests over many seeded games
//! - comparing blocker heuristics by trap rate
//! - profiling the engine without any presentation layer

mod policy;
mod runner;

pub use policy::{BlockerPolicy, PathBlocker, RandomBlocker};
pub use runner::{play_game, run_many, GameSummary, SimulationConfig, SimulationReport};
