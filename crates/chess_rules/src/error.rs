//! Error types for the rules engine
//!
//! Rule violations are reported as [`IllegalMove`]; every variant leaves the
//! game exactly as it was. Malformed move text is a [`NotationError`], which
//! is a caller-side input problem rather than a chess rule. Configuration
//! loading has its own [`ConfigError`]. [`ChessError`] wraps all of them for
//! callers that mix the three.

use crate::types::{Color, PieceKind, Square};
use thiserror::Error;

/// Why a proposed move was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The game already reached a terminal state
    #[error("The game is over")]
    GameOver,

    /// The mover is not the side to move
    #[error("It is not {color}'s turn")]
    WrongTurn { color: Color },

    /// Nothing stands on the origin square
    #[error("No piece on {square}")]
    EmptyOrigin { square: Square },

    /// The origin piece belongs to the other side
    #[error("Piece on {square} does not belong to {color}")]
    NotOwnPiece { square: Square, color: Color },

    /// Origin and destination are the same square
    #[error("Origin and destination are both {square}")]
    SameSquare { square: Square },

    /// The destination holds a piece of the mover's own color
    #[error("Cannot capture own piece on {square}")]
    OwnPieceAtDestination { square: Square },

    /// The piece cannot move in this shape
    #[error("A {kind} cannot move from {from} to {to}")]
    InvalidShape {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    /// A square between origin and destination is occupied
    #[error("Path blocked at {square}")]
    PathBlocked { square: Square },

    /// Pawn moved diagonally without capturing, or straight into a piece
    #[error("Pawn cannot move from {from} to {to}")]
    PawnCaptureMismatch { from: Square, to: Square },

    /// The move leaves (or keeps) the mover's king under attack
    #[error("Move leaves the {color} king in check")]
    LeavesKingInCheck { color: Color },

    /// Castling prerequisites are not met
    #[error("Castling not allowed: {reason}")]
    CastlingNotAllowed { reason: CastleBlock },
}

/// The castling prerequisite that failed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleBlock {
    #[error("king must land on file 2 or 6 of its home rank")]
    BadDestination,

    #[error("king has already moved")]
    KingMoved,

    #[error("king is in check")]
    KingInCheck,

    #[error("rook has already moved")]
    RookMoved,

    #[error("square {square} between king and rook is occupied")]
    Occupied { square: Square },

    #[error("king would cross attacked square {square}")]
    Attacked { square: Square },
}

/// Malformed 4-digit move text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Move text must be exactly 4 characters, got {len}")]
    WrongLength { len: usize },

    #[error("Invalid coordinate '{found}' at position {position} (expected 0-7)")]
    InvalidDigit { position: usize, found: char },
}

/// Failure loading a [`GameConfig`](crate::config::GameConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur when driving a game from external input
#[derive(Error, Debug)]
pub enum ChessError {
    #[error(transparent)]
    Illegal(#[from] IllegalMove),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A move record does not fit this game's id or move numbering
    #[error("Move record rejected: {message}")]
    RecordMismatch { message: String },

    /// A custom starting position is unusable
    #[error("Invalid position: {message}")]
    InvalidPosition { message: String },
}

/// Result type alias for engine operations
pub type ChessResult<T> = Result<T, ChessError>;
