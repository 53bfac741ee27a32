//! Per-side player state
//!
//! A [`Player`] records everything about one side that the board alone
//! cannot answer: whether the king and each rook have moved (castling
//! rights), which enemy pieces currently give check, and how much material is
//! left. The king's location is kept as a [`Square`], never as a reference
//! into the board, so it stays valid across board copies.
//!
//! Only the [`Game`] mutates a player, and only while committing a move.

use crate::game::Game;
use crate::geometry::king;
use crate::types::*;
use std::collections::BTreeSet;

/// Pieces per side at the start of a game
pub const STARTING_MATERIAL: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub(crate) color: Color,
    pub(crate) king_position: Square,
    pub(crate) has_king_moved: bool,
    pub(crate) has_kingside_rook_moved: bool,
    pub(crate) has_queenside_rook_moved: bool,
    pub(crate) checking_pieces: BTreeSet<Square>,
    pub(crate) material_count: u32,
}

impl Player {
    /// A player at the start of a standard game
    pub fn new(color: Color) -> Self {
        Player {
            color,
            king_position: Square::new_unchecked(king::KING_FILE, color.home_rank()),
            has_king_moved: false,
            has_kingside_rook_moved: false,
            has_queenside_rook_moved: false,
            checking_pieces: BTreeSet::new(),
            material_count: STARTING_MATERIAL,
        }
    }

    /// Propose moving the piece on `from` to `to`
    ///
    /// Only a syntactic pass: a two-file king jump along the rank is tagged as
    /// a castling attempt and the move gets the ply number it would have once
    /// committed. Nothing about the game changes; legality is decided by
    /// [`Game::play_turn`].
    pub fn propose_move(&self, from: Square, to: Square, game: &Game) -> Move {
        let is_castling = game.board().at(from) == Some(Piece::new(PieceKind::King, self.color))
            && king::is_castling_jump(from, to);

        Move {
            color: self.color,
            from,
            to,
            is_castling,
            sequence: game.history().len() as u32 + 1,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn king_position(&self) -> Square {
        self.king_position
    }

    pub fn has_king_moved(&self) -> bool {
        self.has_king_moved
    }

    pub fn has_kingside_rook_moved(&self) -> bool {
        self.has_kingside_rook_moved
    }

    pub fn has_queenside_rook_moved(&self) -> bool {
        self.has_queenside_rook_moved
    }

    /// Has the rook on `side` moved (or been captured on its corner)?
    pub fn has_rook_moved(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Kingside => self.has_kingside_rook_moved,
            CastleSide::Queenside => self.has_queenside_rook_moved,
        }
    }

    /// Squares of the enemy pieces attacking this player's king
    pub fn checking_pieces(&self) -> &BTreeSet<Square> {
        &self.checking_pieces
    }

    pub fn is_in_check(&self) -> bool {
        !self.checking_pieces.is_empty()
    }

    /// Pieces this side still has on the board, king included
    pub fn material_count(&self) -> u32 {
        self.material_count
    }

    pub fn home_rank(&self) -> u8 {
        self.color.home_rank()
    }

    pub(crate) fn mark_rook_moved(&mut self, side: CastleSide) {
        match side {
            CastleSide::Kingside => self.has_kingside_rook_moved = true,
            CastleSide::Queenside => self.has_queenside_rook_moved = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn test_new_player_state() {
        let black = Player::new(Color::Black);
        assert_eq!(black.king_position(), sq(4, 7));
        assert_eq!(black.material_count(), 16);
        assert!(!black.is_in_check());
        assert!(!black.has_king_moved());
        assert!(!black.has_rook_moved(CastleSide::Kingside));
        assert!(!black.has_rook_moved(CastleSide::Queenside));
    }

    #[test]
    fn test_propose_tags_king_jump_as_castling() {
        let game = Game::new();
        let mv = game.white().propose_move(sq(4, 0), sq(6, 0), &game);
        assert!(mv.is_castling);
        assert_eq!(mv.color, Color::White);
        assert_eq!(mv.sequence, 1);
    }

    #[test]
    fn test_propose_does_not_tag_other_pieces() {
        let game = Game::new();
        // Queen on d1 "jumping" two files is not castling
        let mv = game.white().propose_move(sq(3, 0), sq(5, 0), &game);
        assert!(!mv.is_castling);
        // Black proposing from White's king square is not castling either
        let mv = game.black().propose_move(sq(4, 0), sq(6, 0), &game);
        assert!(!mv.is_castling);
    }

    #[test]
    fn test_propose_leaves_game_untouched() {
        let game = Game::new();
        let before = game.clone();
        let _ = game.white().propose_move(sq(4, 1), sq(4, 3), &game);
        assert_eq!(game.board(), before.board());
        assert!(game.history().is_empty());
        assert_eq!(game.move_number(), 0);
    }
}
