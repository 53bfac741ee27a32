//! Board storage
//!
//! An 8x8 grid of optional pieces addressed by [`Square`]. The board only
//! stores occupants: it knows nothing about legality, turns or check.
//!
//! - Squares are always in range because [`Square`] values are
//! - [`Board::set`] replaces whatever was on the square
//! - `Clone` yields an independent copy (pieces are plain values)

use crate::types::*;
use std::fmt;

/// Back rank order from file 0 to file 7
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Board {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// The standard starting position
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let file = file as u8;
                board.set(
                    Square::new_unchecked(file, color.home_rank()),
                    Some(Piece::new(*kind, color)),
                );
                board.set(
                    Square::new_unchecked(file, color.pawn_rank()),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Occupant of a square
    #[inline]
    pub fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Occupant at raw coordinates; `None` when empty or off the board
    pub fn piece_at(&self, x: u8, y: u8) -> Option<Piece> {
        Square::new(x, y).and_then(|square| self.at(square))
    }

    /// Replace the occupant of a square
    #[inline]
    pub fn set(&mut self, square: Square, occupant: Option<Piece>) {
        self.squares[square.index()] = occupant;
    }

    /// Remove and return the occupant of a square
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.at(square).is_none()
    }

    /// First occupied square along `path`, if any
    pub fn first_blocker(&self, path: &[Square]) -> Option<Square> {
        path.iter().copied().find(|square| !self.is_empty(*square))
    }

    /// True when every square of `path` is empty
    pub fn is_path_clear(&self, path: &[Square]) -> bool {
        self.first_blocker(path).is_none()
    }

    /// All pieces of one color with their squares
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.at(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    /// Square of a color's king, if it is on the board
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Number of pieces of one color
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Display for Board {
    /// Diagram with rank 7 on top: `WK` for a white king, `.` for empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", y)?;
            for x in 0..BOARD_SIZE {
                match self.at(Square::new_unchecked(x, y)) {
                    Some(piece) => {
                        let side = match piece.color {
                            Color::White => 'W',
                            Color::Black => 'B',
                        };
                        write!(f, " {}{}", side, piece.kind.symbol())?;
                    }
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, "  {}", x)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn test_standard_setup_piece_counts() {
        let board = Board::standard();
        assert_eq!(board.count(Color::White), 16);
        assert_eq!(board.count(Color::Black), 16);
        assert_eq!(board.king_square(Color::White), Some(sq(4, 0)));
        assert_eq!(board.king_square(Color::Black), Some(sq(4, 7)));
    }

    #[test]
    fn test_set_replaces_occupant() {
        let mut board = Board::standard();
        board.set(sq(0, 0), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(
            board.at(sq(0, 0)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        board.set(sq(0, 0), None);
        assert!(board.is_empty(sq(0, 0)));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::standard();
        let mut copy = original.clone();
        copy.take(sq(4, 1));
        assert!(copy.is_empty(sq(4, 1)));
        assert!(!original.is_empty(sq(4, 1)), "Original must not see the copy's edit");
    }

    #[test]
    fn test_piece_at_out_of_range_is_none() {
        let board = Board::standard();
        assert_eq!(board.piece_at(8, 0), None);
        assert_eq!(
            board.piece_at(3, 7),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn test_first_blocker() {
        let board = Board::standard();
        let path = [sq(0, 1), sq(0, 2)];
        assert_eq!(board.first_blocker(&path), Some(sq(0, 1)));
        assert!(board.is_path_clear(&[sq(0, 2), sq(0, 3)]));
    }

    #[test]
    fn test_display_marks_pieces() {
        let text = Board::standard().to_string();
        let top = text.lines().next().unwrap();
        assert!(top.starts_with("7 "));
        assert!(top.contains("BK"));
        assert!(text.contains("WQ"));
    }
}
