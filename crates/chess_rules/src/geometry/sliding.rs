//! Line walking shared by bishops, rooks, queens and the castling king
//!
//! ## Algorithm
//!
//! A line move advances one unit step at a time, the step being the sign of
//! the file and rank deltas. Every square visited before the destination is
//! part of the path.

use crate::types::Square;

/// True when `from` and `to` share a file, a rank or a diagonal
pub fn is_aligned(from: Square, to: Square) -> bool {
    let (dx, dy) = from.delta(to);
    dx == 0 || dy == 0 || dx.abs() == dy.abs()
}

/// Squares strictly between `from` and `to` along their common line
///
/// Returns an empty path when the squares are not aligned or adjacent.
pub fn line_between(from: Square, to: Square) -> Vec<Square> {
    if !is_aligned(from, to) {
        return Vec::new();
    }

    let (dx, dy) = from.delta(to);
    let (step_x, step_y) = (dx.signum(), dy.signum());

    let mut squares = Vec::new();
    let mut current = from;
    while let Some(next) = current.offset(step_x, step_y) {
        if next == to {
            break;
        }
        squares.push(next);
        current = next;
    }
    squares
}
