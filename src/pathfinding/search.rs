//! Best-first search from the cat to the nearest reachable border cell.

use tracing::trace;

use super::node::{NodeIdx, SearchNode};
use crate::board::Board;
use crate::core::{Coord, GridSize};

/// Heuristic distance from `c` to the nearest board edge.
///
/// The smallest of the four orthogonal distances to the edges. Every hop
/// changes each component by at most one, so this never overestimates the
/// hop count on an empty board.
#[inline]
#[must_use]
pub fn border_distance(c: Coord, size: GridSize) -> u32 {
    let d = c
        .x
        .min(c.y)
        .min(size.width - 1 - c.x)
        .min(size.height - 1 - c.y);
    d.max(0) as u32
}

/// Counters from the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the open set and expanded.
    pub expanded: usize,
    /// Nodes ever added to the open set, including the start.
    pub visited: usize,
}

/// Reusable escape search.
///
/// Holds one [`SearchNode`] per cell in a flat arena indexed by row-major
/// cell index. Parent links are arena indices, so reconstructing the path is
/// a walk over the vector. Keep one `EscapeSearch` around and call
/// [`EscapeSearch::find`] every turn; the arena is reset in place.
///
/// ## Tie-breaking
///
/// The open set is kept in insertion order and scanned linearly; among nodes
/// with equal `f_cost` the one inserted first is expanded first.
///
/// ## Example
///
/// ```
/// use hex_trap::board::Board;
/// use hex_trap::core::{Coord, GridSize};
/// use hex_trap::pathfinding::EscapeSearch;
///
/// let board = Board::new(GridSize::new(11, 11));
/// let mut search = EscapeSearch::new();
///
/// let path = search.find(&board, Coord::new(5, 5));
/// assert_eq!(path.len(), 5);
/// assert!(board.is_border(*path.last().unwrap()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EscapeSearch {
    nodes: Vec<SearchNode>,
    open: Vec<NodeIdx>,
    stats: SearchStats,
}

impl EscapeSearch {
    /// Create an empty search; the arena is sized on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search with the arena pre-sized for `size`.
    #[must_use]
    pub fn with_size(size: GridSize) -> Self {
        Self {
            nodes: vec![SearchNode::default(); size.cell_count()],
            open: Vec::with_capacity(size.cell_count()),
            stats: SearchStats::default(),
        }
    }

    /// Counters from the most recent call to [`EscapeSearch::find`].
    #[must_use]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    fn reset(&mut self, size: GridSize) {
        let count = size.cell_count();
        self.nodes.clear();
        self.nodes.resize(count, SearchNode::default());
        self.open.clear();
        self.stats = SearchStats::default();
    }

    /// Find the cat's route to the border.
    ///
    /// Returns the cells from `start` (exclusive) to the first border cell
    /// reached (inclusive). The result is empty when no border cell can be
    /// reached through free cells, and also when `start` is itself a border
    /// cell or off the board.
    pub fn find(&mut self, board: &Board, start: Coord) -> Vec<Coord> {
        let size = board.size();
        self.reset(size);

        let Some(start_idx) = size.index_of(start) else {
            return Vec::new();
        };

        let h = border_distance(start, size);
        self.nodes[start_idx] = SearchNode {
            g_cost: 0,
            h_cost: h,
            f_cost: h,
            visited: true,
            closed: false,
            parent: NodeIdx::NONE,
        };
        self.open.push(NodeIdx::from(start_idx));
        self.stats.visited = 1;

        while !self.open.is_empty() {
            let low = self.lowest_f();
            let current = self.open[low];
            let current_coord = size.coord_at(current.index());

            if size.is_border(current_coord) {
                let path = self.trace_back(current, size);
                trace!(
                    start = %start,
                    expanded = self.stats.expanded,
                    visited = self.stats.visited,
                    length = path.len(),
                    "escape path found"
                );
                return path;
            }

            // Vec::remove keeps insertion order for the tie-break
            self.open.remove(low);
            self.nodes[current.index()].closed = true;
            self.stats.expanded += 1;

            let current_g = self.nodes[current.index()].g_cost;

            for n in size.neighbors(current_coord) {
                let Some(n_idx) = size.index_of(n) else {
                    continue;
                };
                if self.nodes[n_idx].closed || board.blocked_at(n) {
                    continue;
                }

                let candidate_g = current_g + 1;
                let node = &mut self.nodes[n_idx];

                let improves = if !node.visited {
                    node.h_cost = border_distance(n, size);
                    node.visited = true;
                    self.open.push(NodeIdx::from(n_idx));
                    self.stats.visited += 1;
                    true
                } else {
                    candidate_g < node.g_cost
                };

                if improves {
                    node.parent = current;
                    node.g_cost = candidate_g;
                    node.f_cost = candidate_g + node.h_cost;
                }
            }
        }

        trace!(
            start = %start,
            expanded = self.stats.expanded,
            visited = self.stats.visited,
            "no escape path"
        );
        Vec::new()
    }

    /// Position in the open set of the first node with the smallest f_cost.
    fn lowest_f(&self) -> usize {
        let mut low = 0;
        for i in 1..self.open.len() {
            if self.nodes[self.open[i].index()].f_cost < self.nodes[self.open[low].index()].f_cost {
                low = i;
            }
        }
        low
    }

    fn trace_back(&self, end: NodeIdx, size: GridSize) -> Vec<Coord> {
        let mut path = Vec::with_capacity(self.nodes[end.index()].g_cost as usize);
        let mut cursor = end;
        while !self.nodes[cursor.index()].parent.is_none() {
            path.push(size.coord_at(cursor.index()));
            cursor = self.nodes[cursor.index()].parent;
        }
        path.reverse();
        path
    }
}

/// One-shot convenience wrapper around [`EscapeSearch::find`].
#[must_use]
pub fn shortest_escape(board: &Board, start: Coord) -> Vec<Coord> {
    EscapeSearch::with_size(board.size()).find(board, start)
}
