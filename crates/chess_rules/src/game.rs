//! # Game - the rules state machine
//!
//! A [`Game`] owns the [`Board`], both [`Player`]s and the move history, and
//! is the only thing that mutates them.
//!
//! ## Move lifecycle
//!
//! 1. A player proposes a move ([`Player::propose_move`], [`Game::propose_move`]
//!    or [`Game::parse_move`]). Proposing never changes the game.
//! 2. [`Game::play_turn`] validates it: turn and ownership, piece shape,
//!    blockers, pawn capture rules, king safety (by simulating the move on
//!    the board and undoing it) and, for castling, the castling
//!    prerequisites.
//! 3. An accepted move relocates the piece (and the rook when castling),
//!    updates material and castling flags, refreshes both players' checking
//!    pieces, advances the move counter and appends to the history.
//!
//! A rejected move leaves the board, both players, the move counter and the
//! history exactly as they were.
//!
//! ## Module Organization
//!
//! - `legality` - shape/path/capture checks, king-safety simulation, castling
//! - `turn` - committing a validated move
//! - `state` - outcome evaluation and legal move enumeration

mod legality;
mod state;
mod turn;


pub use state::GameState;

use crate::attack;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ChessError, ChessResult, NotationError};
use crate::geometry::king::KING_FILE;
use crate::notation::{self, MoveRecord};
use crate::player::Player;
use crate::types::*;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Game {
    id: Uuid,
    board: Board,
    white: Player,
    black: Player,
    history: Vec<Move>,
    /// Number of White moves committed; pairs half-moves into full moves
    move_number: u32,
    side_to_move: Color,
    state: GameState,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A new game from the standard starting position with default options
    pub fn new() -> Self {
        Game::with_config(GameConfig::default())
    }

    /// A new game from the standard starting position
    pub fn with_config(config: GameConfig) -> Self {
        let game = Game {
            id: Uuid::new_v4(),
            board: Board::standard(),
            white: Player::new(Color::White),
            black: Player::new(Color::Black),
            history: Vec::new(),
            move_number: 0,
            side_to_move: Color::White,
            state: GameState::InProgress,
            config,
        };
        debug!("[GAME] Created game {}", game.id);
        game
    }

    /// Replace the generated id, e.g. with one assigned by a server
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// A game starting from an arbitrary position
    ///
    /// Castling flags are derived from the board: a king off its home square
    /// counts as moved, and so does a rook missing from its corner. Both
    /// sides need exactly one king, and the side that is not to move must
    /// not be in check.
    pub fn from_board(board: Board, side_to_move: Color, config: GameConfig) -> ChessResult<Self> {
        let white = player_from_board(&board, Color::White)?;
        let black = player_from_board(&board, Color::Black)?;

        let mut game = Game {
            id: Uuid::new_v4(),
            board,
            white,
            black,
            history: Vec::new(),
            move_number: 0,
            side_to_move,
            state: GameState::InProgress,
            config,
        };
        game.refresh_checks();

        if game.player(side_to_move.opponent()).is_in_check() {
            return Err(ChessError::InvalidPosition {
                message: format!(
                    "{} is in check but it is {}'s turn",
                    side_to_move.opponent(),
                    side_to_move
                ),
            });
        }

        game.state = game.evaluate_board();
        Ok(game)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn white(&self) -> &Player {
        &self.white
    }

    pub fn black(&self) -> &Player {
        &self.black
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Committed moves, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of White moves committed so far
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Outcome as of the last committed move
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Occupant at raw coordinates; `None` when empty or off the board
    pub fn piece_at(&self, x: u8, y: u8) -> Option<Piece> {
        self.board.piece_at(x, y)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.player(color).is_in_check()
    }

    pub fn material_count(&self, color: Color) -> u32 {
        self.player(color).material_count()
    }

    /// Proposal by the side to move
    pub fn propose_move(&self, from: Square, to: Square) -> Move {
        self.player(self.side_to_move).propose_move(from, to, self)
    }

    /// Decode `"x1y1x2y2"` into a proposal by `color`
    pub fn parse_move(&self, text: &str, color: Color) -> Result<Move, NotationError> {
        let (from, to) = notation::parse_squares(text)?;
        Ok(self.player(color).propose_move(from, to, self))
    }

    /// Encode a move as four digits
    pub fn format_move(mv: &Move) -> String {
        notation::format_squares(mv.from, mv.to)
    }

    /// Textual record of `mv` for network and persistence collaborators
    ///
    /// Works for committed moves and for a proposal about to be committed:
    /// the number counts White moves up to and including `mv`.
    pub fn record(&self, mv: &Move) -> MoveRecord {
        let earlier = mv.sequence.saturating_sub(1) as usize;
        let white_moves = self
            .history
            .iter()
            .take(earlier)
            .filter(|m| m.color == Color::White)
            .count() as u32;
        let number = white_moves + u32::from(mv.color == Color::White);

        MoveRecord {
            game_id: self.id,
            text: Game::format_move(mv),
            number,
            color: mv.color,
        }
    }

    /// Record of the most recent committed move
    pub fn last_record(&self) -> Option<MoveRecord> {
        self.history.last().map(|mv| self.record(mv))
    }

    /// Validate and commit a record received from a collaborator
    ///
    /// The record must carry this game's id and the move number the pairing
    /// rule expects for its color.
    pub fn apply_record(&mut self, record: &MoveRecord) -> ChessResult<()> {
        if record.game_id != self.id {
            return Err(ChessError::RecordMismatch {
                message: format!("record is for game {}, not {}", record.game_id, self.id),
            });
        }

        let mv = self.parse_move(&record.text, record.color)?;
        let expected = self.record(&mv).number;
        if record.number != expected {
            return Err(ChessError::RecordMismatch {
                message: format!(
                    "{} move numbered {}, expected {}",
                    record.color, record.number, expected
                ),
            });
        }

        self.try_play_turn(mv)?;
        Ok(())
    }

    /// Recompute both players' checking pieces from the current board
    fn refresh_checks(&mut self) {
        for color in [Color::White, Color::Black] {
            let king = self.player(color).king_position;
            let checkers = attack::attackers(&self.board, king, color.opponent());
            self.player_mut(color).checking_pieces = checkers;
        }
    }
}

fn player_from_board(board: &Board, color: Color) -> ChessResult<Player> {
    let kings: Vec<Square> = board
        .pieces(color)
        .filter(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
        .collect();

    let king_position = match kings.as_slice() {
        [square] => *square,
        _ => {
            return Err(ChessError::InvalidPosition {
                message: format!("{} needs exactly one king, found {}", color, kings.len()),
            })
        }
    };

    let rank = color.home_rank();
    let rook = Some(Piece::new(PieceKind::Rook, color));
    let mut player = Player::new(color);
    player.king_position = king_position;
    player.has_king_moved = king_position != Square::new_unchecked(KING_FILE, rank);
    player.has_kingside_rook_moved =
        board.at(Square::new_unchecked(CastleSide::Kingside.rook_file(), rank)) != rook;
    player.has_queenside_rook_moved =
        board.at(Square::new_unchecked(CastleSide::Queenside.rook_file(), rank)) != rook;
    player.material_count = board.count(color) as u32;
    Ok(player)
}
