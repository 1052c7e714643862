//! Game session: the single owner of mutable game state.
//!
//! A session is created from a [`GameConfig`](crate::core::GameConfig),
//! optionally scatters rocks, and then advances one accepted block at a time.
//! Hosts that share a session across threads should wrap it in one mutex;
//! `propose_block` is the only writer.

mod game;
mod history;

pub use game::GameSession;
pub use history::TurnRecord;
