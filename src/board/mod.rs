//! Board occupancy.
//!
//! A `Board` owns the blocked/free state of every cell on a fixed
//! `width x height` grid. Boards are immutable snapshots; the only way to
//! change one is to derive a new snapshot with an extra blocked cell.

mod grid;

pub use grid::{Board, Cell};
