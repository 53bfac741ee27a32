//! Queen geometry
//!
//! The queen combines the rook and bishop shapes; its path is whichever
//! line the move follows.

use super::{bishop, rook};
use crate::types::Square;

pub fn can_move(from: Square, to: Square) -> bool {
    rook::can_move(from, to) || bishop::can_move(from, to)
}

pub fn path(from: Square, to: Square) -> Vec<Square> {
    if rook::can_move(from, to) {
        rook::path(from, to)
    } else {
        bishop::path(from, to)
    }
}
