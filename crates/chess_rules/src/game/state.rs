//! Game outcome evaluation and legal move enumeration

use super::{legality, Game};
use crate::board::Board;
use crate::config::EvaluationRule;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    InProgress,
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// The win for `color`
    pub fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteWin,
            Color::Black => GameState::BlackWin,
        }
    }
}

impl Game {
    /// Evaluate the position for the side to move
    ///
    /// Pure: works on a scratch copy of the board. With
    /// [`EvaluationRule::FullSearch`] a side without a legal move is
    /// checkmated when in check and stalemated otherwise. With
    /// [`EvaluationRule::KingEscapes`] only king steps are considered.
    pub fn evaluate_board(&self) -> GameState {
        let color = self.side_to_move;
        let in_check = self.is_in_check(color);

        match self.config.evaluation {
            EvaluationRule::FullSearch => {
                if self.has_legal_move(color) {
                    GameState::InProgress
                } else if in_check {
                    GameState::win_for(color.opponent())
                } else {
                    GameState::Draw
                }
            }
            EvaluationRule::KingEscapes => {
                if !self.king_escapes(color).is_empty() {
                    GameState::InProgress
                } else if in_check {
                    GameState::win_for(color.opponent())
                } else if self.material_count(color) <= 1 {
                    GameState::Draw
                } else {
                    GameState::InProgress
                }
            }
        }
    }

    /// Every legal `(from, to)` pair for `color`, castling included
    ///
    /// Ignores whose turn it is.
    pub fn legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        let mut scratch = self.board.clone();
        let origins: Vec<Square> = self.board.pieces(color).map(|(square, _)| square).collect();

        origins
            .into_iter()
            .flat_map(|from| Square::all().map(move |to| (from, to)))
            .filter(|&(from, to)| self.is_legal_on(&mut scratch, color, from, to))
            .collect()
    }

    /// Legal destinations for the piece on `from`; empty when the square is empty
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.board.at(from) else {
            return Vec::new();
        };
        let mut scratch = self.board.clone();
        Square::all()
            .filter(|&to| self.is_legal_on(&mut scratch, piece.color, from, to))
            .collect()
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut scratch = self.board.clone();
        let origins: Vec<Square> = self.board.pieces(color).map(|(square, _)| square).collect();

        origins.into_iter().any(|from| {
            Square::all().any(|to| self.is_legal_on(&mut scratch, color, from, to))
        })
    }

    /// Squares adjacent to `color`'s king it could step to without being attacked
    pub fn king_escapes(&self, color: Color) -> Vec<Square> {
        let king = self.player(color).king_position();
        let mut scratch = self.board.clone();
        king.neighbors()
            .filter(|&to| self.is_legal_on(&mut scratch, color, king, to))
            .collect()
    }

    fn is_legal_on(&self, scratch: &mut Board, color: Color, from: Square, to: Square) -> bool {
        legality::validate(scratch, self.player(color), from, to, false).is_ok()
    }
}
