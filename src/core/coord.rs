//! Grid coordinates and offset-row hex adjacency.
//!
//! The board is a rectangular array where every odd row is shifted half a
//! cell to the right. Each cell therefore touches up to six others:
//!
//! ```text
//!  row 0:  (0,0) (1,0) (2,0)
//!  row 1:     (0,1) (1,1) (2,1)
//!  row 2:  (0,2) (1,2) (2,2)
//! ```
//!
//! ## Usage
//!
//! ```
//! use hex_trap::core::{Coord, GridSize};
//!
//! let size = GridSize::new(5, 5);
//!
//! // Even row: the upper and lower neighbors lean left
//! let n: Vec<_> = size.neighbors(Coord::new(2, 2)).into_iter().collect();
//! assert!(n.contains(&Coord::new(1, 1)));
//! assert!(n.contains(&Coord::new(1, 3)));
//!
//! // Corners lose the candidates that fall off the board
//! assert_eq!(size.neighbors(Coord::new(0, 0)).len(), 2);
//! assert!(size.is_border(Coord::new(0, 3)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Neighbor offsets for cells on even rows, in enumeration order.
const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [
    (-1, -1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (0, 1),
    (-1, 1),
];

/// Neighbor offsets for cells on odd rows, in enumeration order.
const ODD_ROW_OFFSETS: [(i32, i32); 6] = [
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (0, 1),
];

/// A grid-space position.
///
/// Plain value type: two coordinates are the same cell iff both components
/// match. Components are signed so that callers translating pointer events
/// can hand over off-board positions and get a proper `OutOfBounds` back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Does this cell sit on an odd (shifted) row?
    #[inline]
    #[must_use]
    pub const fn is_odd_row(self) -> bool {
        self.y.rem_euclid(2) == 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Board dimensions.
///
/// All geometry questions (bounds, adjacency, border membership) are answered
/// here so that the board and the pathfinder agree on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    /// Create a new grid size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// The conventional starting cell for the cat.
    #[must_use]
    pub const fn center(self) -> Coord {
        Coord::new(self.width / 2, self.height / 2)
    }

    /// Check whether a coordinate lies on the board.
    #[inline]
    #[must_use]
    pub const fn contains(self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Row-major index of an in-bounds coordinate.
    ///
    /// Returns `None` for coordinates off the board.
    #[inline]
    #[must_use]
    pub fn index_of(self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.y as usize * self.width as usize + c.x as usize)
        } else {
            None
        }
    }

    /// Inverse of [`GridSize::index_of`].
    #[inline]
    #[must_use]
    pub fn coord_at(self, index: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((index % w) as i32, (index / w) as i32)
    }

    /// Is this cell on the outer edge of the board?
    #[inline]
    #[must_use]
    pub const fn is_border(self, c: Coord) -> bool {
        c.x == 0 || c.y == 0 || c.x == self.width - 1 || c.y == self.height - 1
    }

    /// In-bounds neighbors of `c` under odd-row offset adjacency.
    ///
    /// Candidates are produced in a fixed order and filtered by
    /// [`GridSize::contains`], so the result holds 0 to 6 distinct cells.
    #[must_use]
    pub fn neighbors(self, c: Coord) -> SmallVec<[Coord; 6]> {
        let offsets = if c.is_odd_row() {
            &ODD_ROW_OFFSETS
        } else {
            &EVEN_ROW_OFFSETS
        };

        offsets
            .iter()
            .map(|&(dx, dy)| Coord::new(c.x + dx, c.y + dy))
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_even_row_neighbors() {
        let size = GridSize::new(5, 5);
        let n: Vec<_> = size.neighbors(Coord::new(2, 2)).into_iter().collect();

        assert_eq!(
            n,
            vec![
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(1, 2),
                Coord::new(3, 2),
                Coord::new(2, 3),
                Coord::new(1, 3),
            ]
        );
    }

    #[test]
    fn test_odd_row_neighbors() {
        let size = GridSize::new(5, 5);
        let n: Vec<_> = size.neighbors(Coord::new(2, 1)).into_iter().collect();

        assert_eq!(
            n,
            vec![
                Coord::new(2, 0),
                Coord::new(3, 0),
                Coord::new(1, 1),
                Coord::new(3, 1),
                Coord::new(3, 2),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_corner_neighbors_are_clipped() {
        let size = GridSize::new(5, 5);

        // (0,0) is on an even row: only right and below remain
        let top_left: Vec<_> = size.neighbors(Coord::new(0, 0)).into_iter().collect();
        assert_eq!(top_left, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        // (4,3) is on an odd row at the right edge
        let right: Vec<_> = size.neighbors(Coord::new(4, 3)).into_iter().collect();
        assert_eq!(
            right,
            vec![Coord::new(4, 2), Coord::new(3, 3), Coord::new(4, 4)]
        );
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let size = GridSize::new(7, 6);
        for c in size.coords() {
            for n in size.neighbors(c) {
                assert!(
                    size.neighbors(n).contains(&c),
                    "{} lists {} but not the reverse",
                    c,
                    n
                );
            }
        }
    }

    #[test]
    fn test_border() {
        let size = GridSize::new(11, 11);
        assert!(size.is_border(Coord::new(0, 5)));
        assert!(size.is_border(Coord::new(10, 5)));
        assert!(size.is_border(Coord::new(5, 0)));
        assert!(size.is_border(Coord::new(5, 10)));
        assert!(!size.is_border(Coord::new(5, 5)));
        assert!(!size.is_border(Coord::new(1, 9)));
    }

    #[test]
    fn test_index_round_trip() {
        let size = GridSize::new(4, 3);
        assert_eq!(size.cell_count(), 12);
        assert_eq!(size.index_of(Coord::new(3, 2)), Some(11));
        assert_eq!(size.coord_at(11), Coord::new(3, 2));
        assert_eq!(size.index_of(Coord::new(4, 0)), None);
        assert_eq!(size.index_of(Coord::new(-1, 0)), None);
    }

    #[test]
    fn test_center_and_display() {
        let size = GridSize::new(11, 11);
        assert_eq!(size.center(), Coord::new(5, 5));
        assert_eq!(format!("{}", size), "11x11");
        assert_eq!(format!("{}", Coord::new(3, -1)), "(3, -1)");
    }

    proptest! {
        #[test]
        fn prop_neighbor_bound(w in 3i32..20, h in 3i32..20, x in 0i32..20, y in 0i32..20) {
            let size = GridSize::new(w, h);
            let c = Coord::new(x % w, y % h);
            let n = size.neighbors(c);

            prop_assert!(n.len() <= 6);
            prop_assert!(!n.contains(&c));
            for (i, a) in n.iter().enumerate() {
                prop_assert!(size.contains(*a));
                prop_assert!(!n[i + 1..].contains(a));
            }
        }

        #[test]
        fn prop_border_detection(w in 3i32..20, h in 3i32..20, x in 0i32..20, y in 0i32..20) {
            let size = GridSize::new(w, h);
            let c = Coord::new(x % w, y % h);
            let expected = c.x == 0 || c.x == w - 1 || c.y == 0 || c.y == h - 1;
            prop_assert_eq!(size.is_border(c), expected);
        }

        #[test]
        fn prop_interior_cells_have_six_neighbors(w in 3i32..20, h in 3i32..20, x in 0i32..20, y in 0i32..20) {
            let size = GridSize::new(w, h);
            let c = Coord::new(x % w, y % h);
            if !size.is_border(c) {
                prop_assert_eq!(size.neighbors(c).len(), 6);
            }
        }
    }
}
