//! Search bookkeeping stored in the arena.

/// Index into the search arena.
///
/// Equal to the row-major cell index, so the arena needs no lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeIdx(pub u32);

impl NodeIdx {
    /// Sentinel value representing no node.
    pub const NONE: NodeIdx = NodeIdx(u32::MAX);

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeIdx {
    fn from(idx: usize) -> Self {
        Self(idx as u32)
    }
}

/// Per-cell search state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    /// Shortest known hop count from the start cell.
    pub g_cost: u32,

    /// Heuristic distance to the nearest edge.
    pub h_cost: u32,

    /// `g_cost + h_cost`.
    pub f_cost: u32,

    /// Has this node ever been added to the open set?
    pub visited: bool,

    /// Has this node been expanded?
    pub closed: bool,

    /// Predecessor on the best known path (NONE for the start).
    pub parent: NodeIdx,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g_cost: 0,
            h_cost: 0,
            f_cost: 0,
            visited: false,
            closed: false,
            parent: NodeIdx::NONE,
        }
    }
}
