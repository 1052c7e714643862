//! Immutable board snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardSnapshotError, Coord, GameError, GridSize};

/// One grid position and its occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub coord: Coord,
    pub blocked: bool,
}

/// A fixed-size board of free and blocked cells.
///
/// Occupancy lives in an `im::Vector`, so a `Board` is a cheap value: cloning
/// is O(1) and [`Board::with_blocked`] produces a new snapshot that shares all
/// untouched storage with the old one. No operation unblocks a cell.
///
/// ## Usage
///
/// ```
/// use hex_trap::board::Board;
/// use hex_trap::core::{Coord, GameError, GridSize};
///
/// let empty = Board::new(GridSize::new(5, 5));
/// let next = empty.with_blocked(Coord::new(1, 2)).unwrap();
///
/// // The old snapshot is untouched
/// assert!(!empty.is_blocked(Coord::new(1, 2)).unwrap());
/// assert!(next.is_blocked(Coord::new(1, 2)).unwrap());
///
/// // Blocking is one-way
/// assert_eq!(
///     next.with_blocked(Coord::new(1, 2)),
///     Err(GameError::AlreadyBlocked { coord: Coord::new(1, 2) })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: GridSize,
    /// Row-major occupancy, `true` = blocked.
    blocked: Vector<bool>,
    blocked_count: usize,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: GridSize,
    blocked: Vector<bool>,
    blocked_count: usize,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardSnapshotError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let expected = repr.size.cell_count();
        if repr.blocked.len() != expected {
            return Err(BoardSnapshotError::CellCountMismatch {
                size: repr.size,
                expected,
                found: repr.blocked.len(),
            });
        }

        let found = repr.blocked.iter().filter(|&&b| b).count();
        if found != repr.blocked_count {
            return Err(BoardSnapshotError::BlockedCountMismatch {
                claimed: repr.blocked_count,
                found,
            });
        }

        Ok(Board {
            size: repr.size,
            blocked: repr.blocked,
            blocked_count: found,
        })
    }
}

impl Board {
    /// Create a board with every cell free.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            blocked: std::iter::repeat(false).take(size.cell_count()).collect(),
            blocked_count: 0,
        }
    }

    /// Board dimensions.
    #[inline]
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Number of blocked cells.
    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.blocked_count
    }

    fn index(&self, coord: Coord) -> Result<usize, GameError> {
        self.size
            .index_of(coord)
            .ok_or(GameError::OutOfBounds { coord })
    }

    /// Look up a cell.
    pub fn cell(&self, coord: Coord) -> Result<Cell, GameError> {
        let idx = self.index(coord)?;
        Ok(Cell {
            coord,
            blocked: self.blocked[idx],
        })
    }

    /// Is the cell at `coord` blocked?
    pub fn is_blocked(&self, coord: Coord) -> Result<bool, GameError> {
        self.cell(coord).map(|c| c.blocked)
    }

    /// Is `coord` on the outer edge of this board?
    #[must_use]
    pub fn is_border(&self, coord: Coord) -> bool {
        self.size.is_border(coord)
    }

    /// Return a new board with `coord` blocked.
    ///
    /// Fails with `AlreadyBlocked` if the cell is blocked in this snapshot.
    pub fn with_blocked(&self, coord: Coord) -> Result<Board, GameError> {
        let idx = self.index(coord)?;
        if self.blocked[idx] {
            return Err(GameError::AlreadyBlocked { coord });
        }

        let mut next = self.clone();
        next.blocked.set(idx, true);
        next.blocked_count += 1;
        Ok(next)
    }

    /// In-bounds neighbors of `coord` that are not blocked.
    ///
    /// Off-board coordinates have no neighbors on this board.
    #[must_use]
    pub fn free_neighbors(&self, coord: Coord) -> SmallVec<[Coord; 6]> {
        if !self.size.contains(coord) {
            return SmallVec::new();
        }
        self.size
            .neighbors(coord)
            .into_iter()
            .filter(|&n| !self.blocked_at(n))
            .collect()
    }

    /// Occupancy of an in-bounds coordinate; off-board reads as blocked.
    #[inline]
    pub(crate) fn blocked_at(&self, coord: Coord) -> bool {
        match self.size.index_of(coord) {
            Some(idx) => self.blocked[idx],
            None => true,
        }
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked.iter().enumerate().map(move |(idx, &blocked)| Cell {
            coord: self.size.coord_at(idx),
            blocked,
        })
    }

    /// Iterate over blocked coordinates in row-major order.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells().filter(|c| c.blocked).map(|c| c.coord)
    }
}
