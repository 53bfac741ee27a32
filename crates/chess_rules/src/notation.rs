//! Move text encoding and move records
//!
//! ## Coordinate encoding
//!
//! A move is four ASCII digits `x1 y1 x2 y2`, each `0`-`7`, with no
//! separators: `4143` is the pawn push from `(4, 1)` to `(4, 3)` (e2-e4).
//! This is the only notation the engine reads or writes.
//!
//! ## Move records
//!
//! [`MoveRecord`] is what the engine hands to network and persistence
//! collaborators after a move: the game id, the encoded move, the full-move
//! number and the mover's color. Move numbers pair half-moves, so White's
//! first move and Black's reply both carry number 1.

use crate::error::NotationError;
use crate::types::{Color, Square};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of an encoded move
pub const MOVE_TEXT_LEN: usize = 4;

/// Decode `"x1y1x2y2"` into origin and destination squares
pub fn parse_squares(text: &str) -> Result<(Square, Square), NotationError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != MOVE_TEXT_LEN {
        return Err(NotationError::WrongLength { len: chars.len() });
    }

    let mut coords = [0u8; MOVE_TEXT_LEN];
    for (position, (slot, found)) in coords.iter_mut().zip(chars).enumerate() {
        *slot = found
            .to_digit(8)
            .ok_or(NotationError::InvalidDigit { position, found })? as u8;
    }

    // Octal digits are 0-7, so both squares are on the board
    Ok((
        Square::new_unchecked(coords[0], coords[1]),
        Square::new_unchecked(coords[2], coords[3]),
    ))
}

/// Encode origin and destination as four digits
pub fn format_squares(from: Square, to: Square) -> String {
    format!("{}{}{}{}", from.x(), from.y(), to.x(), to.y())
}

/// Textual record of one committed move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub game_id: Uuid,
    /// Four-digit coordinate encoding
    #[serde(rename = "move")]
    pub text: String,
    /// Full-move number (White's move and Black's reply share it)
    pub number: u32,
    pub color: Color,
}

impl MoveRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
