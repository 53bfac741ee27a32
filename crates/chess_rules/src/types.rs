//! # Core value types
//!
//! Colors, piece kinds, pieces, board squares and the move proposal that
//! flows from a [`Player`](crate::player::Player) into the
//! [`Game`](crate::game::Game).
//!
//! ## Coordinates
//!
//! Squares use Cartesian coordinates with the origin on White's queenside
//! corner:
//! - `x` is the file, 0 (`a`) to 7 (`h`)
//! - `y` is the rank, 0 (White's back rank) to 7 (Black's back rank)
//!
//! The board stores its slots at index `x + 8 * y`. A [`Square`] can only be
//! built through checked constructors, so every `Square` value is on the
//! board.
//!
//! ## Pieces
//!
//! [`Piece`] is a plain `Copy` value. Moving a piece moves the value from one
//! board slot to another; a captured piece is simply overwritten.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of files (and ranks) on the board
pub const BOARD_SIZE: u8 = 8;

/// Total number of squares
pub const SQUARE_COUNT: usize = 64;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank holding this side's king and rooks at the start of the game
    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Rank holding this side's pawns at the start of the game
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => BOARD_SIZE - 2,
        }
    }

    /// Rank delta of a forward pawn step
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// The six kinds of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Single-letter symbol used in board diagrams
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A piece of a given kind and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }
}

/// One of the 64 board positions
///
/// Equality is positional. Use [`Square::new`] to build one from raw
/// coordinates; it returns `None` when either coordinate is off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Square at file `x`, rank `y`, if both are in `0..8`
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Square { x, y })
        } else {
            None
        }
    }

    /// Square for a coordinate pair the caller has already range-checked
    pub(crate) fn new_unchecked(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE, "square ({x}, {y}) off board");
        Square { x, y }
    }

    /// Square for a linear board index (`x + 8 * y`)
    pub fn from_index(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Some(Square::new_unchecked(
                (index % BOARD_SIZE as usize) as u8,
                (index / BOARD_SIZE as usize) as u8,
            ))
        } else {
            None
        }
    }

    /// File, 0-7
    pub fn x(self) -> u8 {
        self.x
    }

    /// Rank, 0-7
    pub fn y(self) -> u8 {
        self.y
    }

    /// Linear board index (`x + 8 * y`)
    pub fn index(self) -> usize {
        self.x as usize + BOARD_SIZE as usize * self.y as usize
    }

    /// Signed file and rank distance from `self` to `to`
    pub fn delta(self, to: Square) -> (i8, i8) {
        (to.x as i8 - self.x as i8, to.y as i8 - self.y as i8)
    }

    /// Square shifted by `(dx, dy)`, or `None` when that leaves the board
    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Square::new(x as u8, y as u8)
    }

    /// All squares, rank by rank starting from `(0, 0)`
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }

    /// The (up to) eight squares touching this one
    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        const STEPS: [(i8, i8); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        STEPS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl fmt::Display for Square {
    /// Algebraic name, e.g. `e2` for `(4, 1)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

/// Which rook takes part in a castling move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Side matching a king destination file (6 or 2)
    pub fn from_destination_file(file: u8) -> Option<Self> {
        match file {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// File the rook starts on
    pub fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook ends on, next to the king's destination
    pub fn rook_destination_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Files the king crosses or lands on; none of them may be attacked
    pub fn king_transit_files(self) -> [u8; 2] {
        match self {
            CastleSide::Kingside => [5, 6],
            CastleSide::Queenside => [3, 2],
        }
    }
}

/// A proposed move
///
/// Produced by [`Player::propose_move`](crate::player::Player::propose_move)
/// or [`Game::parse_move`](crate::game::Game::parse_move) and consumed by
/// [`Game::play_turn`](crate::game::Game::play_turn). Building one never
/// touches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Side making the move
    pub color: Color,
    pub from: Square,
    pub to: Square,
    /// Set when the king jumps two files along its rank
    pub is_castling: bool,
    /// Ply number this move would have once committed (1 = first move)
    pub sequence: u32,
}

impl fmt::Display for Move {
    /// The 4-digit coordinate encoding, e.g. `4143` for e2-e4
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.from.x, self.from.y, self.to.x, self.to.y
        )
    }
}
