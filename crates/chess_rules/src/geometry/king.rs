//! King geometry
//!
//! ## King Movement Rules
//!
//! - One square in any direction (up to 8 destinations)
//! - A two-file jump along the rank from the king's starting file (4) to file
//!   2 or 6 is the castling shape
//!
//! Whether a castling jump is actually allowed (flags, blockers, attacked
//! squares) is decided by the game; geometry only recognises the shape.

use super::sliding::line_between;
use crate::types::Square;

/// File the king starts on
pub const KING_FILE: u8 = 4;

pub fn can_move(from: Square, to: Square) -> bool {
    is_step(from, to) || is_castling_jump(from, to)
}

/// One square in any direction
pub fn is_step(from: Square, to: Square) -> bool {
    let (dx, dy) = from.delta(to);
    dx.abs().max(dy.abs()) == 1
}

/// Two files along the rank from file 4 to file 2 or 6
pub fn is_castling_jump(from: Square, to: Square) -> bool {
    from.y() == to.y() && from.x() == KING_FILE && (to.x() == 2 || to.x() == 6)
}

/// Empty for a step; the square the king passes over for a castling jump
pub fn path(from: Square, to: Square) -> Vec<Square> {
    if is_castling_jump(from, to) {
        line_between(from, to)
    } else {
        Vec::new()
    }
}
