//! Move legality
//!
//! Pure checks against a board plus the one place where the board is
//! mutated hypothetically: [`simulate`], which relocates a single piece,
//! runs a probe and puts both touched squares back exactly as they were.
//!
//! Validation order for a proposed move:
//! 1. origin holds a piece of the mover's color
//! 2. shape, blockers and pawn capture rules ([`check_shape`])
//! 3. the mover's king is not attacked after the move ([`exposes_king`])
//! 4. castling prerequisites when the king jumps two files ([`check_castle`])

use super::Game;
use crate::attack;
use crate::board::Board;
use crate::error::{CastleBlock, IllegalMove};
use crate::geometry::{self, king, line_between, pawn};
use crate::player::Player;
use crate::types::*;

/// Snapshot of the two squares touched by a tentative relocation
struct Trial {
    from: Square,
    to: Square,
    from_occupant: Option<Piece>,
    to_occupant: Option<Piece>,
}

impl Trial {
    fn apply(board: &mut Board, from: Square, to: Square) -> Self {
        let trial = Trial {
            from,
            to,
            from_occupant: board.at(from),
            to_occupant: board.at(to),
        };
        board.set(from, None);
        board.set(to, trial.from_occupant);
        trial
    }

    fn restore(self, board: &mut Board) {
        board.set(self.to, self.to_occupant);
        board.set(self.from, self.from_occupant);
    }
}

/// Run `probe` with the piece on `from` moved to `to`, then undo the move
pub(crate) fn simulate<R>(
    board: &mut Board,
    from: Square,
    to: Square,
    probe: impl FnOnce(&Board) -> R,
) -> R {
    let trial = Trial::apply(board, from, to);
    let result = probe(board);
    trial.restore(board);
    result
}

/// Shape, blocker and capture rules for the piece on `from`
///
/// Returns the moving piece. Turn, ownership and check are not considered.
pub(crate) fn check_shape(board: &Board, from: Square, to: Square) -> Result<Piece, IllegalMove> {
    if from == to {
        return Err(IllegalMove::SameSquare { square: from });
    }

    let piece = board
        .at(from)
        .ok_or(IllegalMove::EmptyOrigin { square: from })?;

    if let Some(target) = board.at(to) {
        if target.color == piece.color {
            return Err(IllegalMove::OwnPieceAtDestination { square: to });
        }
    }

    if !geometry::can_move(piece, from, to) {
        return Err(IllegalMove::InvalidShape {
            kind: piece.kind,
            from,
            to,
        });
    }

    let path = geometry::path(piece, from, to);
    match piece.kind {
        PieceKind::Knight => {}
        PieceKind::Pawn if pawn::is_diagonal(from, to) => {
            if board.is_empty(to) {
                return Err(IllegalMove::PawnCaptureMismatch { from, to });
            }
        }
        PieceKind::Pawn => {
            if let Some(square) = board.first_blocker(&path) {
                return Err(IllegalMove::PathBlocked { square });
            }
            if !board.is_empty(to) {
                return Err(IllegalMove::PawnCaptureMismatch { from, to });
            }
        }
        _ => {
            if let Some(square) = board.first_blocker(&path) {
                return Err(IllegalMove::PathBlocked { square });
            }
        }
    }

    Ok(piece)
}

/// True when moving `from` -> `to` leaves `player`'s king attacked
pub(crate) fn exposes_king(board: &mut Board, player: &Player, from: Square, to: Square) -> bool {
    let king = if from == player.king_position {
        to
    } else {
        player.king_position
    };
    simulate(board, from, to, |trial| {
        attack::is_attacked(trial, king, player.color.opponent())
    })
}

/// Castling prerequisites for `player`'s king landing on `destination`
pub(crate) fn check_castle(
    board: &Board,
    player: &Player,
    destination: Square,
) -> Result<CastleSide, IllegalMove> {
    let blocked = |reason| IllegalMove::CastlingNotAllowed { reason };
    let rank = player.home_rank();

    let side = CastleSide::from_destination_file(destination.x())
        .filter(|_| destination.y() == rank)
        .ok_or(blocked(CastleBlock::BadDestination))?;

    let home = Square::new_unchecked(king::KING_FILE, rank);
    if player.has_king_moved || player.king_position != home {
        return Err(blocked(CastleBlock::KingMoved));
    }
    if player.is_in_check() {
        return Err(blocked(CastleBlock::KingInCheck));
    }

    let rook_square = Square::new_unchecked(side.rook_file(), rank);
    if player.has_rook_moved(side)
        || board.at(rook_square) != Some(Piece::new(PieceKind::Rook, player.color))
    {
        return Err(blocked(CastleBlock::RookMoved));
    }

    if let Some(square) = board.first_blocker(&line_between(home, rook_square)) {
        return Err(blocked(CastleBlock::Occupied { square }));
    }

    // The king is lifted so it cannot shield the squares it is leaving
    let mut lifted = board.clone();
    lifted.set(home, None);
    for file in side.king_transit_files() {
        let square = Square::new_unchecked(file, rank);
        if attack::is_attacked(&lifted, square, player.color.opponent()) {
            return Err(blocked(CastleBlock::Attacked { square }));
        }
    }

    Ok(side)
}

/// Full validation of a move by `player`
///
/// Returns the castling side when the move is a castling jump. The board is
/// left unchanged whatever the outcome.
pub(crate) fn validate(
    board: &mut Board,
    player: &Player,
    from: Square,
    to: Square,
    is_castling: bool,
) -> Result<Option<CastleSide>, IllegalMove> {
    let piece = board
        .at(from)
        .ok_or(IllegalMove::EmptyOrigin { square: from })?;
    if piece.color != player.color {
        return Err(IllegalMove::NotOwnPiece {
            square: from,
            color: player.color,
        });
    }

    // A two-file king jump is castling whether or not the proposal said so
    let castling = piece.kind == PieceKind::King && king::is_castling_jump(from, to);
    if is_castling && !castling {
        return Err(IllegalMove::InvalidShape {
            kind: piece.kind,
            from,
            to,
        });
    }

    check_shape(board, from, to)?;

    if exposes_king(board, player, from, to) {
        return Err(IllegalMove::LeavesKingInCheck {
            color: player.color,
        });
    }

    if castling {
        check_castle(board, player, to).map(Some)
    } else {
        Ok(None)
    }
}

impl Game {
    /// Shape, blocker and capture legality of a move by `color`
    ///
    /// Does not consider turn order or whether the move exposes the king;
    /// [`Game::play_turn`] does.
    pub fn can_move(&self, from: Square, to: Square, color: Color) -> bool {
        self.check_move(from, to, color).is_ok()
    }

    /// [`Game::can_move`] with the reason for a refusal
    pub fn check_move(&self, from: Square, to: Square, color: Color) -> Result<(), IllegalMove> {
        let piece = check_shape(&self.board, from, to)?;
        if piece.color != color {
            return Err(IllegalMove::NotOwnPiece {
                square: from,
                color,
            });
        }
        Ok(())
    }

    /// Could `color` castle with the king landing on `destination` right now?
    pub fn can_castle(&self, color: Color, destination: Square) -> bool {
        self.check_castling(color, destination).is_ok()
    }

    /// [`Game::can_castle`] with the castling side, or why it is refused
    pub fn check_castling(&self, color: Color, destination: Square) -> Result<CastleSide, IllegalMove> {
        check_castle(&self.board, self.player(color), destination)
    }
}
