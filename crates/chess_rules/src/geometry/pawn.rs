//! Pawn geometry
//!
//! ## Pawn Movement Rules
//!
//! - **Forward step**: one square toward the opponent (+y for White, -y for
//!   Black)
//! - **Double step**: two squares straight ahead, only from the starting rank
//! - **Diagonal step**: one square diagonally forward; the game only accepts
//!   it as a capture
//!
//! Promotion and en passant are not part of this engine. A diagonal step
//! onto an empty square is always rejected by the game, including the square
//! an en passant capture would use.

use crate::types::{Color, Square};

pub fn can_move(color: Color, from: Square, to: Square) -> bool {
    let (dx, dy) = from.delta(to);
    let forward = color.forward();

    if dy == forward {
        return dx.abs() <= 1;
    }

    dy == 2 * forward && dx == 0 && from.y() == color.pawn_rank()
}

/// The skipped square of a double step; empty for every other pawn move
pub fn path(color: Color, from: Square, to: Square) -> Vec<Square> {
    let (_, dy) = from.delta(to);
    if dy.abs() == 2 {
        from.offset(0, color.forward()).into_iter().collect()
    } else {
        Vec::new()
    }
}

/// True for the diagonal (capturing) shape
pub fn is_diagonal(from: Square, to: Square) -> bool {
    from.x() != to.x()
}

/// True when a pawn of `color` on `from` attacks `target`
pub fn attacks(color: Color, from: Square, target: Square) -> bool {
    let (dx, dy) = from.delta(target);
    dy == color.forward() && dx.abs() == 1
}
