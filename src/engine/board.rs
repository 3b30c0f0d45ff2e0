//! Board state: visit counts plus the knight's position.
//!
//! The board is the single mutable artifact of a run. Only the
//! `TourController` writes it; renderers receive `BoardSnapshot` values
//! and must treat them as read-only.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::engine::rng::TourRng;

/// A square on the board. `(0, 0)` is the top-left corner; `x` grows to
/// the right, `y` grows downward, matching the row-major grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Coord {
    /// Column index.
    pub x: u8,
    /// Row index.
    pub y: u8,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Apply a signed offset, returning `None` when the result leaves
    /// the `size` × `size` board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8, size: u8) -> Option<Self> {
        let x = i16::from(self.x) + i16::from(dx);
        let y = i16::from(self.y) + i16::from(dy);
        if x >= 0 && x < i16::from(size) && y >= 0 && y < i16::from(size) {
            Some(Self::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// N×N grid of visit counts plus the knight's current square.
///
/// A count of 0 means unvisited; ≥1 means visited that many times. The
/// move generator excludes visited squares, so under normal operation
/// counts stay in {0, 1}; the board does not assume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    counts: Vec<u32>,
    knight: Coord,
}

impl Board {
    /// Create an all-zero board with the knight parked at the origin,
    /// unvisited. Placement happens at [`Board::reset`].
    #[must_use]
    pub fn new(size: u8) -> Self {
        Self {
            size,
            counts: vec![0; usize::from(size) * usize::from(size)],
            knight: Coord::default(),
        }
    }

    /// Create a board with the knight already placed and its square
    /// marked visited. Used for fixed-start runs and tests.
    ///
    /// # Panics
    ///
    /// Panics if `start` is out of bounds.
    #[must_use]
    pub fn starting_at(size: u8, start: Coord) -> Self {
        let mut board = Self::new(size);
        board.place_knight(start);
        board
    }

    /// Zero the grid and place the knight uniformly at random via the
    /// injected RNG, marking that square visited.
    pub fn reset(&mut self, rng: &mut TourRng) {
        self.counts.fill(0);
        let start = rng.gen_coord(self.size);
        self.place_knight(start);
    }

    fn place_knight(&mut self, start: Coord) {
        self.knight = start;
        self.mark_visited(start);
    }

    /// Board side length.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// The knight's current square.
    #[must_use]
    pub const fn knight(&self) -> Coord {
        self.knight
    }

    /// Move the knight. The previous square keeps its visit marker.
    ///
    /// # Panics
    ///
    /// Panics if `to` is out of bounds.
    pub fn move_knight(&mut self, to: Coord) {
        self.mark_visited(to);
        self.knight = to;
    }

    /// Visit count at a square.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    #[must_use]
    pub fn visit_count(&self, coord: Coord) -> u32 {
        self.counts[self.index(coord)]
    }

    /// Whether a square has never been visited.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    #[must_use]
    pub fn is_unvisited(&self, coord: Coord) -> bool {
        self.visit_count(coord) == 0
    }

    /// Increment the visit count at a square.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    pub fn mark_visited(&mut self, coord: Coord) {
        let idx = self.index(coord);
        self.counts[idx] += 1;
    }

    /// Number of squares with a non-zero visit count.
    #[must_use]
    pub fn visited_cells(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total number of squares.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.counts.len()
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            coord.x < self.size && coord.y < self.size,
            "coordinate {coord} out of bounds for a {0}x{0} board",
            self.size
        );
        usize::from(coord.y) * usize::from(self.size) + usize::from(coord.x)
    }

    /// Take a serializable snapshot of the current position.
    #[must_use]
    pub fn snapshot(&self, step_count: u64) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size,
            counts: self.counts.clone(),
            knight: self.knight,
            step_count,
        }
    }
}

/// Read-only snapshot of board state.
///
/// This is the state that gets compared for renderer parity: two
/// identically-seeded runs must produce identical snapshot sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Board side length.
    pub size: u8,
    /// Row-major visit counts.
    pub counts: Vec<u32>,
    /// The knight's square.
    pub knight: Coord,
    /// Steps taken since reset.
    pub step_count: u64,
}

impl BoardSnapshot {
    /// Visit count at a square, or `None` out of bounds.
    #[must_use]
    pub fn visit_count(&self, coord: Coord) -> Option<u32> {
        if coord.x < self.size && coord.y < self.size {
            let idx = usize::from(coord.y) * usize::from(self.size) + usize::from(coord.x);
            self.counts.get(idx).copied()
        } else {
            None
        }
    }

    /// Compute a hash for quick comparison.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.size.hash(&mut hasher);
        self.counts.hash(&mut hasher);
        self.knight.hash(&mut hasher);
        self.step_count.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_offset_in_bounds() {
        let c = Coord::new(3, 3);
        assert_eq!(c.offset(1, 2, 8), Some(Coord::new(4, 5)));
        assert_eq!(c.offset(-2, -1, 8), Some(Coord::new(1, 2)));
    }

    #[test]
    fn test_coord_offset_out_of_bounds() {
        let c = Coord::new(0, 0);
        assert_eq!(c.offset(-1, 2, 8), None);
        assert_eq!(c.offset(1, -2, 8), None);
        assert_eq!(Coord::new(7, 7).offset(2, 1, 8), None);
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(2, 5).to_string(), "(2, 5)");
    }

    #[test]
    fn test_new_board_empty() {
        let board = Board::new(8);
        assert_eq!(board.size(), 8);
        assert_eq!(board.total_cells(), 64);
        assert_eq!(board.visited_cells(), 0);
    }

    #[test]
    fn test_starting_at_marks_visited() {
        let board = Board::starting_at(8, Coord::new(3, 4));
        assert_eq!(board.knight(), Coord::new(3, 4));
        assert_eq!(board.visit_count(Coord::new(3, 4)), 1);
        assert_eq!(board.visited_cells(), 1);
    }

    #[test]
    fn test_reset_places_knight_in_bounds() {
        let mut board = Board::new(8);
        let mut rng = TourRng::new(42);
        board.reset(&mut rng);
        let knight = board.knight();
        assert!(knight.x < 8 && knight.y < 8);
        assert_eq!(board.visit_count(knight), 1);
        assert_eq!(board.visited_cells(), 1);
    }

    #[test]
    fn test_reset_is_reproducible() {
        let mut b1 = Board::new(8);
        let mut b2 = Board::new(8);
        b1.reset(&mut TourRng::new(7));
        b2.reset(&mut TourRng::new(7));
        assert_eq!(b1.knight(), b2.knight());
    }

    #[test]
    fn test_reset_clears_previous_run() {
        let mut board = Board::starting_at(8, Coord::new(0, 0));
        board.move_knight(Coord::new(1, 2));
        board.move_knight(Coord::new(2, 4));
        assert_eq!(board.visited_cells(), 3);

        board.reset(&mut TourRng::new(42));
        assert_eq!(board.visited_cells(), 1);
    }

    #[test]
    fn test_move_knight_keeps_old_marker() {
        let mut board = Board::starting_at(8, Coord::new(0, 0));
        board.move_knight(Coord::new(1, 2));
        assert_eq!(board.knight(), Coord::new(1, 2));
        assert_eq!(board.visit_count(Coord::new(0, 0)), 1);
        assert_eq!(board.visit_count(Coord::new(1, 2)), 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_visit_count_out_of_bounds_panics() {
        let board = Board::new(8);
        let _ = board.visit_count(Coord::new(8, 0));
    }

    #[test]
    fn test_snapshot_equality() {
        let board = Board::starting_at(8, Coord::new(2, 2));
        let s1 = board.snapshot(0);
        let s2 = board.snapshot(0);
        assert_eq!(s1, s2);
        assert_eq!(s1.compute_hash(), s2.compute_hash());
    }

    #[test]
    fn test_snapshot_diverges_after_move() {
        let mut board = Board::starting_at(8, Coord::new(2, 2));
        let before = board.snapshot(0);
        board.move_knight(Coord::new(3, 4));
        let after = board.snapshot(1);
        assert_ne!(before, after);
        assert_ne!(before.compute_hash(), after.compute_hash());
    }

    #[test]
    fn test_snapshot_visit_count() {
        let board = Board::starting_at(8, Coord::new(1, 1));
        let snap = board.snapshot(0);
        assert_eq!(snap.visit_count(Coord::new(1, 1)), Some(1));
        assert_eq!(snap.visit_count(Coord::new(0, 0)), Some(0));
        assert_eq!(snap.visit_count(Coord::new(8, 8)), None);
    }

    #[test]
    fn test_snapshot_serialization_roundtrip() {
        let board = Board::starting_at(8, Coord::new(5, 6));
        let snap = board.snapshot(3);
        let json = serde_json::to_string(&snap).expect("serialize");
        let restored: BoardSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(snap, restored);
    }
}
