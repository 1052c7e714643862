//! Blocker policies: automated stand-ins for the human player.

use crate::core::{Coord, GameRng};
use crate::session::GameSession;

/// Chooses which cell to block next.
///
/// Policies only read the session; the harness applies the block.
pub trait BlockerPolicy {
    /// Pick a cell to block, or `None` to give up.
    fn choose_block(&mut self, session: &GameSession, rng: &mut GameRng) -> Option<Coord>;

    /// Policy name (for reports).
    fn name(&self) -> &str;
}

/// Blocks a uniformly random legal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBlocker;

impl BlockerPolicy for RandomBlocker {
    fn choose_block(&mut self, session: &GameSession, rng: &mut GameRng) -> Option<Coord> {
        rng.choose(&session.legal_blocks()).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Blocks the cat's next escape step.
///
/// When the cat has no escape path (it is enclosed, or already on the edge)
/// this blocks a random free neighbor of the cat instead, and only falls back
/// to a random legal cell when the cat has no free neighbor at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathBlocker;

impl BlockerPolicy for PathBlocker {
    fn choose_block(&mut self, session: &GameSession, rng: &mut GameRng) -> Option<Coord> {
        if session.status().is_terminal() {
            return None;
        }

        if let Some(&step) = session.escape_path().first() {
            return Some(step);
        }

        let around = session.board().free_neighbors(session.cat());
        if let Some(&cell) = rng.choose(&around) {
            return Some(cell);
        }

        RandomBlocker.choose_block(session, rng)
    }

    fn name(&self) -> &str {
        "path"
    }
}
