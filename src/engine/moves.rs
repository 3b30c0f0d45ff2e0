//! Legal-move enumeration.
//!
//! The offset table is enumerated in a fixed canonical order; the
//! heuristic's tie-breaking depends on it, so the order must never be
//! randomized or sorted.

use crate::engine::board::{Board, Coord};

/// The 8 knight offsets in canonical order, as `(dx, dy)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Enumerate the legal onward moves from `from`: the knight offsets that
/// land in bounds on an unvisited square, in canonical offset order.
///
/// Returns at most 8 coordinates. No side effects.
#[must_use]
pub fn legal_moves(board: &Board, from: Coord) -> Vec<Coord> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| from.offset(dx, dy, board.size()))
        .filter(|&c| board.is_unvisited(c))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::engine::rng::TourRng;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: legal moves are always in bounds, unvisited,
        /// and at most 8.
        #[test]
        fn prop_legal_moves_contract(seed in 0u64..u64::MAX, size in 4u8..32) {
            let mut board = Board::new(size);
            board.reset(&mut TourRng::new(seed));
            let from = board.knight();

            let moves = legal_moves(&board, from);
            prop_assert!(moves.len() <= 8);
            for m in moves {
                prop_assert!(m.x < size && m.y < size);
                prop_assert_eq!(board.visit_count(m), 0);
                prop_assert_ne!(m, from);
            }
        }

        /// Falsification: marking a square visited removes exactly that
        /// square from the candidate set.
        #[test]
        fn prop_marking_shrinks_candidates(x in 0u8..8, y in 0u8..8) {
            let from = Coord::new(x, y);
            let mut board = Board::starting_at(8, from);
            let before = legal_moves(&board, from);
            prop_assume!(!before.is_empty());

            let target = before[0];
            board.mark_visited(target);
            let after = legal_moves(&board, from);

            prop_assert_eq!(after.len(), before.len() - 1);
            prop_assert!(!after.contains(&target));
        }
    }
}
