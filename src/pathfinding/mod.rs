//! Escape pathfinding for the cat.
//!
//! A best-first (A*-style) search over free cells, guided by the distance to
//! the nearest board edge:
//!
//! - `f = g + h` where `g` is hops from the start and `h` is [`border_distance`]
//! - the open set is scanned linearly for the smallest `f`
//! - the search stops the moment a border cell is selected
//!
//! The arena layout mirrors the board: one [`SearchNode`] per cell, parent
//! links stored as [`NodeIdx`] rather than references.

mod node;
mod search;

pub use node::{NodeIdx, SearchNode};
pub use search::{border_distance, shortest_escape, EscapeSearch, SearchStats};
