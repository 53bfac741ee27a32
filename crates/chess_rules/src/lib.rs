//! # Chess Rules
//!
//! A two-player chess rules engine: board, pieces, move validation, check
//! tracking, castling and game outcome.
//!
//! ## Architecture
//!
//! ```text
//! types      Color, PieceKind, Piece, Square, Move, CastleSide
//! board      64-slot occupancy grid
//! geometry   per-piece movement shapes and paths (pure)
//! attack     "who attacks this square" queries
//! player     per-side castling rights, checking pieces, material
//! game       the state machine: validation, commit, evaluation
//! notation   4-digit move text and move records
//! config     serde options for a game
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chess_rules::{Color, Game, GameState};
//!
//! let mut game = Game::new();
//! let mv = game.parse_move("4143", Color::White)?; // e2-e4
//! assert!(game.play_turn(mv));
//! assert_eq!(game.state(), GameState::InProgress);
//! ```

pub mod attack;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod notation;
pub mod player;
pub mod types;

pub use board::Board;
pub use config::{EvaluationRule, GameConfig};
pub use error::{CastleBlock, ChessError, ChessResult, ConfigError, IllegalMove, NotationError};
pub use game::{Game, GameState};
pub use notation::MoveRecord;
pub use player::Player;
pub use types::{CastleSide, Color, Move, Piece, PieceKind, Square};
