//! Warnsdorff's rule.
//!
//! One-ply lookahead: rank each candidate square by the number of legal
//! moves available *from* it, and take the minimum. The scan uses a
//! strict `<`, so ties resolve to the earliest candidate in the move
//! generator's canonical order. The heuristic does not guarantee tour
//! completion; running out of candidates is the normal terminal
//! condition, not an error.

use crate::engine::board::{Board, Coord};
use crate::engine::moves::legal_moves;

/// Number of legal moves available from `candidate`, evaluated against
/// the board as it currently stands. Used purely as a ranking key.
#[must_use]
pub fn onward_count(board: &Board, candidate: Coord) -> usize {
    legal_moves(board, candidate).len()
}

/// Pick the next square under Warnsdorff's rule, or `None` when the
/// knight has no legal onward move.
#[must_use]
pub fn select_next(board: &Board, from: Coord) -> Option<Coord> {
    let candidates = legal_moves(board, from);

    let mut best: Option<Coord> = None;
    let mut min_onward = usize::MAX;
    for candidate in candidates {
        let onward = onward_count(board, candidate);
        if onward < min_onward {
            min_onward = onward;
            best = Some(candidate);
        }
    }
    best
}
