//! Headless game loop for policy evaluation.

use tracing::debug;

use super::policy::BlockerPolicy;
use crate::core::{ConfigError, Coord, GameConfig, GameRng};
use crate::session::GameSession;

/// Configuration for simulated games.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Maximum block attempts per game, including rejected ones.
    pub max_turns: usize,

    /// Added to the game config's seed (combined with game index in `run_many`).
    pub seed_offset: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_turns: 500,
            seed_offset: 0,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum block attempts per game.
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Outcome of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// Seed the session was created with.
    pub seed: u64,
    /// Accepted turns.
    pub turns: u32,
    /// Proposals the session rejected.
    pub rejected: usize,
    /// Did the player trap the cat?
    pub trapped: bool,
    /// Blocked cells at the end, including scattered rocks.
    pub blocks_placed: usize,
    /// Where the cat ended up.
    pub final_cat: Coord,
}

/// Aggregate over many simulated games.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationReport {
    pub games: usize,
    pub trapped: usize,
    pub total_turns: u64,
}

impl SimulationReport {
    /// Fraction of games where the cat was trapped.
    #[must_use]
    pub fn trap_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.trapped as f64 / self.games as f64
        }
    }

    /// Average accepted turns per game.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }

    fn record(&mut self, summary: &GameSummary) {
        self.games += 1;
        self.total_turns += u64::from(summary.turns);
        if summary.trapped {
            self.trapped += 1;
        }
    }
}

/// Play one game to completion with `policy` as the player.
///
/// Stops when the cat is trapped, the policy gives up, or `max_turns`
/// attempts have been made.
pub fn play_game<P: BlockerPolicy + ?Sized>(
    config: &GameConfig,
    policy: &mut P,
    sim: &SimulationConfig,
) -> Result<GameSummary, ConfigError> {
    let seed = config.seed.wrapping_add(sim.seed_offset);
    let mut session = GameSession::new(config.clone().with_seed(seed))?;
    let mut policy_rng = GameRng::new(seed).fork();
    let mut rejected = 0;

    for _ in 0..sim.max_turns {
        if session.status().is_terminal() {
            break;
        }

        let Some(cell) = policy.choose_block(&session, &mut policy_rng) else {
            break;
        };

        if session.propose_block(cell).is_err() {
            rejected += 1;
        }
    }

    let summary = GameSummary {
        seed,
        turns: session.turn(),
        rejected,
        trapped: session.status().is_terminal(),
        blocks_placed: session.board().blocked_count(),
        final_cat: session.cat(),
    };

    debug!(policy = policy.name(), ?summary, "simulated game finished");
    Ok(summary)
}

/// Play `games` games, building a fresh policy for each.
///
/// Game `i` uses seed offset `sim.seed_offset + i`, so runs are reproducible.
pub fn run_many<P, F>(
    config: &GameConfig,
    mut make_policy: F,
    games: usize,
    sim: &SimulationConfig,
) -> Result<SimulationReport, ConfigError>
where
    P: BlockerPolicy,
    F: FnMut(usize) -> P,
{
    let mut report = SimulationReport::default();

    for i in 0..games {
        let game_sim = sim
            .clone()
            .with_seed_offset(sim.seed_offset.wrapping_add(i as u64));
        let mut policy = make_policy(i);
        let summary = play_game(config, &mut policy, &game_sim)?;
        report.record(&summary);
    }

    Ok(report)
}
