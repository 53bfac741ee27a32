//! Knight geometry
//!
//! Knights jump in an L: two squares along one axis and one along the other.
//! They never need an empty path.

use crate::types::Square;

pub fn can_move(from: Square, to: Square) -> bool {
    let (dx, dy) = from.delta(to);
    matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1))
}
