//! Turn resolution state machine.
//!
//! One player turn is:
//! - validate the proposed block (bounds, occupancy, not the cat's cell)
//! - derive the next board with the cell blocked
//! - search for the cat's escape path on that board
//! - step along it, or wander to a random free neighbor, or stay trapped
//!
//! `InProgress -> AgentTrapped` is the only transition; once trapped the
//! game rejects every further proposal.

pub mod resolver;

pub use resolver::{resolve_block, AgentMove, GameState, GameStatus, TurnOutcome};
