//! Piece geometry
//!
//! Pure per-piece movement shapes. Each piece module answers two questions:
//!
//! - `can_move`: could this piece make a move of this shape at all? Board
//!   occupancy and check are ignored.
//! - `path`: which squares strictly between origin and destination must be
//!   empty for the move to go through?
//!
//! Legality against a real board (captures, blockers, check) lives in
//! [`crate::game`]. Attack detection in [`crate::attack`] reuses `path` for
//! sliding pieces.

mod bishop;
pub mod king;
mod knight;
pub mod pawn;
mod queen;
mod rook;
mod sliding;


use crate::types::{Piece, PieceKind, Square};

pub use sliding::line_between;

/// Geometric plausibility of moving `piece` from `from` to `to`
pub fn can_move(piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn::can_move(piece.color, from, to),
        PieceKind::Knight => knight::can_move(from, to),
        PieceKind::Bishop => bishop::can_move(from, to),
        PieceKind::Rook => rook::can_move(from, to),
        PieceKind::Queen => queen::can_move(from, to),
        PieceKind::King => king::can_move(from, to),
    }
}

/// Squares that must be empty for `piece` to complete the move
///
/// Precondition: [`can_move`] holds for the same arguments. The destination
/// is never part of the path.
pub fn path(piece: Piece, from: Square, to: Square) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn::path(piece.color, from, to),
        PieceKind::Knight => Vec::new(),
        PieceKind::Bishop => bishop::path(from, to),
        PieceKind::Rook => rook::path(from, to),
        PieceKind::Queen => queen::path(from, to),
        PieceKind::King => king::path(from, to),
    }
}
