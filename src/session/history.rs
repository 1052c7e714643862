//! Record of accepted turns.

use serde::{Deserialize, Serialize};

use crate::core::Coord;
use crate::rules::{AgentMove, GameStatus};

/// One accepted block and the cat's answer to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// The cell the player blocked.
    pub block: Coord,
    /// Where the cat stood before moving.
    pub from: Coord,
    /// What the cat did.
    pub agent_move: AgentMove,
    /// Status after the turn.
    pub status: GameStatus,
}

impl TurnRecord {
    /// Where the cat stands after this turn.
    #[must_use]
    pub fn cat_after(&self) -> Coord {
        self.agent_move.destination(self.from)
    }
}
