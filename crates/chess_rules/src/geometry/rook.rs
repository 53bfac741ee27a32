//! Rook geometry: any distance along a file or a rank

use super::sliding::line_between;
use crate::types::Square;

pub fn can_move(from: Square, to: Square) -> bool {
    let (dx, dy) = from.delta(to);
    (dx == 0) != (dy == 0)
}

pub fn path(from: Square, to: Square) -> Vec<Square> {
    line_between(from, to)
}
