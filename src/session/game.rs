//! The owned, mutable game session.

use im::Vector;
use tracing::{debug, info};

use super::history::TurnRecord;
use crate::board::Board;
use crate::core::{ConfigError, Coord, GameConfig, GameError, GameRng, RandomSource};
use crate::pathfinding::{shortest_escape, EscapeSearch};
use crate::rules::{resolve_block, GameState, GameStatus, TurnOutcome};

/// A single game from setup to trap.
///
/// Owns the current [`GameState`] snapshot, the session RNG and a reusable
/// search arena. Every change goes through [`GameSession::propose_block`];
/// a rejected proposal leaves the session exactly as it was.
///
/// ## Example
///
/// ```
/// use hex_trap::core::{Coord, GameConfig, GameError};
/// use hex_trap::rules::GameStatus;
/// use hex_trap::session::GameSession;
///
/// let mut session = GameSession::new(GameConfig::default()).unwrap();
/// assert_eq!(session.cat(), Coord::new(5, 5));
///
/// let record = session.propose_block(Coord::new(4, 4)).unwrap();
/// assert_eq!(record.turn, 1);
/// assert_eq!(session.status(), GameStatus::InProgress);
///
/// // The same cell cannot be blocked twice
/// assert_eq!(
///     session.propose_block(Coord::new(4, 4)),
///     Err(GameError::AlreadyBlocked { coord: Coord::new(4, 4) })
/// );
/// assert_eq!(session.turn(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    search: EscapeSearch,
    turn: u32,
    history: Vector<TurnRecord>,
}

impl GameSession {
    /// Start a new session.
    ///
    /// Validates the config, then scatters rocks using the session RNG.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let size = config.size();
        let cat = config.start();
        let mut rng = GameRng::new(config.seed);
        let board = scatter_rocks(Board::new(size), cat, config.scatter_attempts, &mut rng);

        debug!(
            size = %size,
            cat = %cat,
            seed = config.seed,
            rocks = board.blocked_count(),
            "session created"
        );

        // The scatter never touches the cat's row or column
        let state = GameState::new(board, cat)
            .map_err(|_| ConfigError::StartOutOfBounds { coord: cat })?;

        Ok(Self {
            search: EscapeSearch::with_size(size),
            config,
            state,
            rng,
            turn: 0,
            history: Vector::new(),
        })
    }

    /// The config this session was created from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current snapshot.
    #[must_use]
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn cat(&self) -> Coord {
        self.state.cat()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Number of accepted proposals so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every accepted turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Block a cell using the session RNG for the cat's fallback move.
    pub fn propose_block(&mut self, coord: Coord) -> Result<TurnRecord, GameError> {
        let outcome = resolve_block(&self.state, coord, &mut self.search, &mut self.rng);
        self.commit(coord, outcome)
    }

    /// Block a cell, drawing the fallback move from `rng` instead.
    pub fn propose_block_with<R: RandomSource + ?Sized>(
        &mut self,
        coord: Coord,
        rng: &mut R,
    ) -> Result<TurnRecord, GameError> {
        let outcome = resolve_block(&self.state, coord, &mut self.search, rng);
        self.commit(coord, outcome)
    }

    fn commit(
        &mut self,
        coord: Coord,
        outcome: Result<TurnOutcome, GameError>,
    ) -> Result<TurnRecord, GameError> {
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(error) => {
                debug!(block = %coord, %error, "block rejected");
                return Err(error);
            }
        };

        self.turn += 1;
        let record = TurnRecord {
            turn: self.turn,
            block: coord,
            from: self.state.cat(),
            agent_move: outcome.agent_move,
            status: outcome.state.status(),
        };

        if outcome.state.status().is_terminal() {
            info!(turn = self.turn, cat = %outcome.state.cat(), "cat trapped");
        }

        self.state = outcome.state;
        self.history.push_back(record);
        Ok(record)
    }

    /// Cells the player may block right now, in row-major order.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_blocks(&self) -> Vec<Coord> {
        if self.state.status().is_terminal() {
            return Vec::new();
        }
        self.state
            .board()
            .cells()
            .filter(|c| !c.blocked && c.coord != self.state.cat())
            .map(|c| c.coord)
            .collect()
    }

    /// Is the cat standing on the outer edge?
    #[must_use]
    pub fn agent_at_border(&self) -> bool {
        self.state.board().is_border(self.state.cat())
    }

    /// The route the cat would follow on the current board.
    ///
    /// Useful for hints and blocker policies; does not touch session state.
    #[must_use]
    pub fn escape_path(&self) -> Vec<Coord> {
        shortest_escape(self.state.board(), self.state.cat())
    }
}

/// Randomly block cells before the first turn.
///
/// Each attempt draws a column then a row. Cells sharing a row or a column
/// with the cat are skipped, as are repeats.
fn scatter_rocks(mut board: Board, cat: Coord, attempts: usize, rng: &mut GameRng) -> Board {
    for _ in 0..attempts {
        let x = rng.gen_range(0..board.width());
        let y = rng.gen_range(0..board.height());
        if x == cat.x || y == cat.y {
            continue;
        }
        // Repeat hits leave the board as it is
        if let Ok(next) = board.with_blocked(Coord::new(x, y)) {
            board = next;
        }
    }
    board
}
