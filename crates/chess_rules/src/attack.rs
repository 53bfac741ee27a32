//! Attack detection
//!
//! Answers "which pieces of a color could capture on this square right now".
//! The same routine feeds a player's checking pieces, the check-safety test
//! of a proposed move and the attacked-square test of castling.
//!
//! Differences from plain move geometry:
//! - pawns attack only their two forward diagonals, never straight ahead
//! - kings attack only adjacent squares (the castling jump is not an attack)
//! - sliding pieces need an empty path, the target itself may be occupied

use crate::board::Board;
use crate::geometry::{self, pawn};
use crate::types::{Color, Piece, PieceKind, Square};
use std::collections::BTreeSet;

/// True when `piece` standing on `from` attacks `target`
pub fn attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    if from == target {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn::attacks(piece.color, from, target),
        PieceKind::King => geometry::king::is_step(from, target),
        PieceKind::Knight => geometry::can_move(piece, from, target),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            geometry::can_move(piece, from, target)
                && board.is_path_clear(&geometry::path(piece, from, target))
        }
    }
}

/// Squares of all `by` pieces attacking `target`
pub fn attackers(board: &Board, target: Square, by: Color) -> BTreeSet<Square> {
    board
        .pieces(by)
        .filter(|(from, piece)| attacks(board, *piece, *from, target))
        .map(|(from, _)| from)
        .collect()
}

/// True when at least one `by` piece attacks `target`
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|(from, piece)| attacks(board, piece, from, target))
}
