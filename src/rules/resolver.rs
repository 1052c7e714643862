//! Turn resolution: validate a block, apply it, move the cat, classify.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{Coord, GameError, InvalidBlockReason, RandomSource};
use crate::pathfinding::EscapeSearch;

/// Game status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The cat can still move; the player keeps blocking.
    #[default]
    InProgress,
    /// The cat had no legal move after the last block. Terminal; the player wins.
    AgentTrapped,
}

impl GameStatus {
    /// Is this a terminal status?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::AgentTrapped)
    }
}

/// How the cat responded to a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentMove {
    /// Took the first step of an escape path of `remaining` cells.
    Escaping { to: Coord, remaining: usize },
    /// No escape path; stepped to a random free neighbor.
    Wandered { to: Coord },
    /// No free neighbor; stayed put and is trapped.
    Stayed,
}

impl AgentMove {
    /// Where the cat ended up, given where it started.
    #[must_use]
    pub fn destination(self, from: Coord) -> Coord {
        match self {
            AgentMove::Escaping { to, .. } | AgentMove::Wandered { to } => to,
            AgentMove::Stayed => from,
        }
    }
}

/// Snapshot of a game: board, cat position, status.
///
/// Cloning is cheap; the board shares storage between snapshots. The cat
/// always stands on a free in-bounds cell, including after deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    board: Board,
    cat: Coord,
    status: GameStatus,
}

#[derive(Deserialize)]
struct GameStateRepr {
    board: Board,
    cat: Coord,
    status: GameStatus,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = GameError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let mut state = GameState::new(repr.board, repr.cat)?;
        state.status = repr.status;
        Ok(state)
    }
}

impl GameState {
    /// Create an in-progress state with the cat on `cat`.
    ///
    /// Fails if `cat` is off the board or on a blocked cell.
    pub fn new(board: Board, cat: Coord) -> Result<Self, GameError> {
        if board.is_blocked(cat)? {
            return Err(GameError::AlreadyBlocked { coord: cat });
        }
        Ok(Self {
            board,
            cat,
            status: GameStatus::InProgress,
        })
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the cat stands.
    #[inline]
    #[must_use]
    pub fn cat(&self) -> Coord {
        self.cat
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check a proposed block without applying it.
    ///
    /// Precedence: game over, out of bounds, already blocked, cat's cell.
    pub fn check_block(&self, coord: Coord) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::InvalidBlock {
                coord,
                reason: InvalidBlockReason::GameOver,
            });
        }
        if self.board.is_blocked(coord)? {
            return Err(GameError::AlreadyBlocked { coord });
        }
        if coord == self.cat {
            return Err(GameError::InvalidBlock {
                coord,
                reason: InvalidBlockReason::AgentCell,
            });
        }
        Ok(())
    }
}

/// Result of an accepted block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The committed next state.
    pub state: GameState,
    /// What the cat did.
    pub agent_move: AgentMove,
}

/// Resolve one player turn.
///
/// Pure with respect to `state`: on error nothing is produced, on success the
/// caller receives a complete new snapshot. `search` is scratch space and
/// `rng` is only consulted when the cat has no escape path.
pub fn resolve_block<R: RandomSource + ?Sized>(
    state: &GameState,
    coord: Coord,
    search: &mut EscapeSearch,
    rng: &mut R,
) -> Result<TurnOutcome, GameError> {
    state.check_block(coord)?;

    let board = state.board.with_blocked(coord)?;
    let path = search.find(&board, state.cat);

    let agent_move = match path.first() {
        Some(&to) => AgentMove::Escaping {
            to,
            remaining: path.len(),
        },
        None => {
            let free = board.free_neighbors(state.cat);
            if free.is_empty() {
                AgentMove::Stayed
            } else {
                // Sources outside our control may return any index
                let idx = rng.pick_index(free.len()) % free.len();
                AgentMove::Wandered { to: free[idx] }
            }
        }
    };

    let cat = agent_move.destination(state.cat);
    let status = if cat == state.cat {
        GameStatus::AgentTrapped
    } else {
        GameStatus::InProgress
    };

    debug!(block = %coord, from = %state.cat, to = %cat, ?agent_move, ?status, "turn resolved");

    Ok(TurnOutcome {
        state: GameState { board, cat, status },
        agent_move,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridSize;

    /// Returns a fixed script of indices.
    struct Scripted(Vec<usize>);

    impl RandomSource for Scripted {
        fn pick_index(&mut self, len: usize) -> usize {
            let idx = self.0.remove(0);
            assert!(idx < len);
            idx
        }
    }

    /// Panics if consulted.
    struct NoRandom;

    impl RandomSource for NoRandom {
        fn pick_index(&mut self, _len: usize) -> usize {
            panic!("randomness should not be needed here");
        }
    }

    fn state_with(size: GridSize, cat: Coord, blocked: &[(i32, i32)]) -> GameState {
        let mut board = Board::new(size);
        for &(x, y) in blocked {
            board = board.with_blocked(Coord::new(x, y)).unwrap();
        }
        GameState::new(board, cat).unwrap()
    }

    #[test]
    fn test_escape_step() {
        let state = state_with(GridSize::new(5, 5), Coord::new(2, 2), &[]);
        let mut search = EscapeSearch::new();

        let outcome = resolve_block(&state, Coord::new(1, 1), &mut search, &mut NoRandom).unwrap();

        // Blocking the preferred first step sends the cat north-east instead
        assert_eq!(
            outcome.agent_move,
            AgentMove::Escaping { to: Coord::new(2, 1), remaining: 2 }
        );
        assert_eq!(outcome.state.cat, Coord::new(2, 1));
        assert_eq!(outcome.state.status, GameStatus::InProgress);
        assert!(outcome.state.board.is_blocked(Coord::new(1, 1)).unwrap());
        // Input snapshot untouched
        assert!(!state.board.is_blocked(Coord::new(1, 1)).unwrap());
    }

    #[test]
    fn test_trap_on_last_neighbor() {
        let state = state_with(
            GridSize::new(5, 5),
            Coord::new(2, 2),
            &[(1, 1), (2, 1), (1, 2), (3, 2), (2, 3)],
        );
        let mut search = EscapeSearch::new();

        let outcome = resolve_block(&state, Coord::new(1, 3), &mut search, &mut NoRandom).unwrap();

        assert_eq!(outcome.agent_move, AgentMove::Stayed);
        assert_eq!(outcome.state.cat, Coord::new(2, 2));
        assert_eq!(outcome.state.status, GameStatus::AgentTrapped);
        assert!(outcome.state.status.is_terminal());
    }

    #[test]
    fn test_wander_when_enclosed() {
        // Pocket {(3,2), (3,3), (2,2)}; blocking closes the last gap to the border
        let state = state_with(
            GridSize::new(7, 7),
            Coord::new(3, 3),
            &[(2, 1), (3, 1), (1, 1), (1, 2), (4, 2), (2, 3), (4, 3), (3, 4), (4, 4)],
        );
        let mut search = EscapeSearch::new();

        // (1,3) is the last exit from the pocket via (2,2)
        let outcome = resolve_block(
            &state,
            Coord::new(1, 3),
            &mut search,
            &mut Scripted(vec![0]),
        )
        .unwrap();

        assert_eq!(outcome.agent_move, AgentMove::Wandered { to: Coord::new(3, 2) });
        assert_eq!(outcome.state.cat, Coord::new(3, 2));
        assert_eq!(outcome.state.status, GameStatus::InProgress);
    }

    #[test]
    fn test_cat_on_border_wanders() {
        let state = state_with(GridSize::new(5, 5), Coord::new(0, 2), &[]);
        let mut search = EscapeSearch::new();

        // (0,2) even row: free neighbors are (0,1), (1,2), (0,3)
        let outcome = resolve_block(
            &state,
            Coord::new(4, 4),
            &mut search,
            &mut Scripted(vec![2]),
        )
        .unwrap();

        assert_eq!(outcome.agent_move, AgentMove::Wandered { to: Coord::new(0, 3) });
    }

    #[test]
    fn test_rejections() {
        let state = state_with(GridSize::new(5, 5), Coord::new(2, 2), &[(0, 0)]);
        let mut search = EscapeSearch::new();

        assert_eq!(
            resolve_block(&state, Coord::new(5, 1), &mut search, &mut NoRandom),
            Err(GameError::OutOfBounds { coord: Coord::new(5, 1) })
        );
        assert_eq!(
            resolve_block(&state, Coord::new(0, 0), &mut search, &mut NoRandom),
            Err(GameError::AlreadyBlocked { coord: Coord::new(0, 0) })
        );
        assert_eq!(
            resolve_block(&state, Coord::new(2, 2), &mut search, &mut NoRandom),
            Err(GameError::InvalidBlock {
                coord: Coord::new(2, 2),
                reason: InvalidBlockReason::AgentCell,
            })
        );
    }

    #[test]
    fn test_no_moves_after_trap() {
        let mut state = state_with(GridSize::new(5, 5), Coord::new(2, 2), &[]);
        state.status = GameStatus::AgentTrapped;
        let mut search = EscapeSearch::new();

        // Game over wins even over an out-of-bounds target
        assert_eq!(
            resolve_block(&state, Coord::new(-1, 0), &mut search, &mut NoRandom),
            Err(GameError::InvalidBlock {
                coord: Coord::new(-1, 0),
                reason: InvalidBlockReason::GameOver,
            })
        );
    }

    #[test]
    fn test_state_rejects_bad_cat() {
        let board = Board::new(GridSize::new(5, 5));
        assert_eq!(
            GameState::new(board.clone(), Coord::new(7, 0)),
            Err(GameError::OutOfBounds { coord: Coord::new(7, 0) })
        );

        let board = board.with_blocked(Coord::new(1, 1)).unwrap();
        assert_eq!(
            GameState::new(board, Coord::new(1, 1)),
            Err(GameError::AlreadyBlocked { coord: Coord::new(1, 1) })
        );
    }

    #[test]
    fn test_wander_index_wraps() {
        struct OutOfRange;

        impl RandomSource for OutOfRange {
            fn pick_index(&mut self, len: usize) -> usize {
                len + 1
            }
        }

        let state = state_with(GridSize::new(5, 5), Coord::new(0, 2), &[]);
        let mut search = EscapeSearch::new();

        // Three free neighbors, index 4 wraps to 1: (1,2)
        let outcome =
            resolve_block(&state, Coord::new(4, 4), &mut search, &mut OutOfRange).unwrap();
        assert_eq!(outcome.agent_move, AgentMove::Wandered { to: Coord::new(1, 2) });
    }

    #[test]
    fn test_serde_restores_valid_state() {
        let state = state_with(GridSize::new(5, 5), Coord::new(2, 2), &[(0, 0)]);
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_serde_rejects_cat_off_board() {
        let state = state_with(GridSize::new(5, 5), Coord::new(2, 2), &[]);
        let mut value = serde_json::to_value(&state).unwrap();
        value["cat"] = serde_json::json!({ "x": -1, "y": -1 });

        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("(-1, -1) is outside the board"), "{}", err);
    }

    #[test]
    fn test_serde_rejects_cat_on_rock() {
        let state = state_with(GridSize::new(5, 5), Coord::new(2, 2), &[(1, 1)]);
        let mut value = serde_json::to_value(&state).unwrap();
        value["cat"] = serde_json::json!({ "x": 1, "y": 1 });

        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("(1, 1) is already blocked"), "{}", err);
    }

    #[test]
    fn test_accessors() {
        let state = state_with(GridSize::new(5, 5), Coord::new(3, 1), &[(0, 4)]);
        assert_eq!(state.cat(), Coord::new(3, 1));
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.board().blocked_count(), 1);
    }

    #[test]
    fn test_destination() {
        let from = Coord::new(1, 1);
        assert_eq!(AgentMove::Stayed.destination(from), from);
        assert_eq!(
            AgentMove::Wandered { to: Coord::new(2, 1) }.destination(from),
            Coord::new(2, 1)
        );
    }
}
