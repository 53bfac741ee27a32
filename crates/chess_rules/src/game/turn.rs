//! Turn execution

use super::{legality, Game};
use crate::error::IllegalMove;
use crate::types::*;
use tracing::{debug, info};

impl Game {
    /// Validate and, if legal, commit `mv`
    ///
    /// Returns whether the move was applied. On `false` nothing changed.
    pub fn play_turn(&mut self, mv: Move) -> bool {
        self.try_play_turn(mv).is_ok()
    }

    /// Like [`Game::play_turn`] but reports why a move was refused
    pub fn try_play_turn(&mut self, mv: Move) -> Result<(), IllegalMove> {
        let castle = match self.validate_turn(&mv) {
            Ok(castle) => castle,
            Err(reason) => {
                debug!("[RULES] Rejected {} {}: {}", mv.color, mv, reason);
                return Err(reason);
            }
        };

        self.commit(mv, castle);
        Ok(())
    }

    fn validate_turn(&mut self, mv: &Move) -> Result<Option<CastleSide>, IllegalMove> {
        if self.state.is_terminal() {
            return Err(IllegalMove::GameOver);
        }
        if self.config.enforce_turn_order && mv.color != self.side_to_move {
            return Err(IllegalMove::WrongTurn { color: mv.color });
        }

        // Field access keeps the board and the mover borrowable side by side
        let player = match mv.color {
            Color::White => &self.white,
            Color::Black => &self.black,
        };
        legality::validate(&mut self.board, player, mv.from, mv.to, mv.is_castling)
    }

    fn commit(&mut self, mv: Move, castle: Option<CastleSide>) {
        let color = mv.color;

        match castle {
            Some(side) => self.commit_castle(color, mv.from, mv.to, side),
            None => self.commit_relocation(color, mv.from, mv.to),
        }
        self.refresh_checks();

        if color == Color::White {
            self.move_number += 1;
        }
        self.side_to_move = color.opponent();

        let committed = Move {
            is_castling: castle.is_some(),
            sequence: self.history.len() as u32 + 1,
            ..mv
        };
        debug!(
            "[RULES] {} played {} (move {}, ply {})",
            color, committed, self.move_number, committed.sequence
        );
        self.history.push(committed);

        self.state = self.evaluate_board();
        if self.state.is_terminal() {
            info!(
                "[GAME] Game {} finished after {} plies: {:?}",
                self.id,
                self.history.len(),
                self.state
            );
        }
    }

    fn commit_castle(&mut self, color: Color, from: Square, to: Square, side: CastleSide) {
        let rank = color.home_rank();
        let rook_from = Square::new_unchecked(side.rook_file(), rank);
        let rook_to = Square::new_unchecked(side.rook_destination_file(), rank);

        let king = self.board.take(from);
        self.board.set(to, king);
        let rook = self.board.take(rook_from);
        self.board.set(rook_to, rook);

        let player = self.player_mut(color);
        player.king_position = to;
        player.has_king_moved = true;
        player.mark_rook_moved(side);
    }

    fn commit_relocation(&mut self, color: Color, from: Square, to: Square) {
        let moving = self.board.take(from);
        let captured = self.board.take(to);
        self.board.set(to, moving);

        if let Some(captured) = captured {
            let opponent = self.player_mut(color.opponent());
            opponent.material_count = opponent.material_count.saturating_sub(1);
            // A rook taken on its corner can never castle
            if captured.kind == PieceKind::Rook {
                if let Some(side) = home_corner(captured.color, to) {
                    opponent.mark_rook_moved(side);
                }
            }
        }

        let Some(moving) = moving else { return };
        let player = self.player_mut(color);
        match moving.kind {
            PieceKind::King => {
                player.king_position = to;
                player.has_king_moved = true;
            }
            PieceKind::Rook => {
                if let Some(side) = home_corner(color, from) {
                    player.mark_rook_moved(side);
                }
            }
            _ => {}
        }
    }
}

/// Castling side whose rook starts on `square`, if it is one of `color`'s corners
fn home_corner(color: Color, square: Square) -> Option<CastleSide> {
    if square.y() != color.home_rank() {
        return None;
    }
    [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .find(|side| side.rook_file() == square.x())
}
