//! Game Flow Integration Tests
//!
//! Whole games driven through the public API only:
//! - Turn alternation and move numbering
//! - Scripted games ending in checkmate
//! - Keeping two copies of a game in sync through JSON move records
//! - Engine options loaded from JSON

use chess_rules::{
    Board, ChessError, Color, EvaluationRule, Game, GameConfig, GameState, IllegalMove,
    MoveRecord, Piece, PieceKind, Square,
};

fn sq(x: u8, y: u8) -> Square {
    Square::new(x, y).unwrap()
}

/// Play `text` for the side to move
fn play(game: &mut Game, text: &str) -> bool {
    let mv = game.parse_move(text, game.side_to_move()).unwrap();
    game.play_turn(mv)
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_moves_first_and_sides_alternate() {
    let mut game = Game::new();
    assert_eq!(game.side_to_move(), Color::White);

    assert!(play(&mut game, "4143"));
    assert_eq!(game.side_to_move(), Color::Black);

    // White may not move twice in a row
    let again = game.parse_move("3133", Color::White).unwrap();
    assert!(!game.play_turn(again));

    assert!(play(&mut game, "4644"));
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_committed_moves_format_back_to_input() {
    let mut game = Game::new();
    let script = ["4143", "4644", "6052", "1725"];
    for text in script {
        assert!(play(&mut game, text), "{} should be legal", text);
    }

    let replayed: Vec<String> = game.history().iter().map(Game::format_move).collect();
    assert_eq!(replayed, script);
    assert_eq!(game.move_number(), 2);
}

// ============================================================================
// Scripted Game Tests
// ============================================================================

#[test]
fn test_scholars_mate() {
    //! e4 e5 Bc4 Nc6 Qh5 Nf6 Qxf7#
    let mut game = Game::new();
    for text in ["4143", "4644", "5023", "1725", "3074", "6755", "7456"] {
        assert!(play(&mut game, text), "{} should be legal", text);
    }

    assert_eq!(game.state(), GameState::WhiteWin);
    assert!(game.is_in_check(Color::Black));
    assert_eq!(game.material_count(Color::Black), 15);
    assert_eq!(game.piece_at(5, 6), Some(Piece::new(PieceKind::Queen, Color::White)));

    let mv = game.parse_move("4645", Color::Black).unwrap();
    assert_eq!(game.try_play_turn(mv), Err(IllegalMove::GameOver));
}

#[test]
fn test_back_rank_mate_from_custom_position() {
    let mut board = Board::empty();
    let pieces = [
        (PieceKind::King, Color::White, sq(6, 0)),
        (PieceKind::Rook, Color::White, sq(0, 0)),
        (PieceKind::King, Color::Black, sq(6, 7)),
        (PieceKind::Pawn, Color::Black, sq(5, 6)),
        (PieceKind::Pawn, Color::Black, sq(6, 6)),
        (PieceKind::Pawn, Color::Black, sq(7, 6)),
    ];
    for (kind, color, square) in pieces {
        board.set(square, Some(Piece::new(kind, color)));
    }

    let mut game = Game::from_board(board, Color::White, GameConfig::default()).unwrap();
    assert_eq!(game.state(), GameState::InProgress);

    assert!(play(&mut game, "0007"));
    assert_eq!(game.state(), GameState::WhiteWin);
    assert_eq!(
        game.black().checking_pieces().iter().copied().collect::<Vec<_>>(),
        vec![sq(0, 7)]
    );
}

// ============================================================================
// Record Sync Tests
// ============================================================================

#[test]
fn test_json_records_keep_two_copies_in_sync() {
    let mut host = Game::new();
    let mut guest = host.clone();

    for text in ["3133", "3634", "2123", "6755"] {
        assert!(play(&mut host, text));
        let wire = host.last_record().unwrap().to_json().unwrap();

        let received = MoveRecord::from_json(&wire).unwrap();
        guest.apply_record(&received).unwrap();
    }

    assert_eq!(host.board(), guest.board());
    assert_eq!(host.move_number(), guest.move_number());
    assert_eq!(host.side_to_move(), guest.side_to_move());
}

#[test]
fn test_record_wire_format() {
    let mut game = Game::new();
    assert!(play(&mut game, "6163"));
    let record = game.last_record().unwrap();

    let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert_eq!(value["move"], "6163");
    assert_eq!(value["number"], 1);
    assert_eq!(value["color"], "white");
    assert_eq!(value["game_id"], game.id().to_string());
}

#[test]
fn test_replayed_record_is_rejected() {
    let mut host = Game::new();
    let mut guest = host.clone();
    assert!(play(&mut host, "4143"));
    let record = host.last_record().unwrap();

    guest.apply_record(&record).unwrap();
    // Same record again: White's next move would be number 2
    assert!(matches!(
        guest.apply_record(&record),
        Err(ChessError::RecordMismatch { .. })
    ));
    assert_eq!(guest.history().len(), 1);
}

#[test]
fn test_record_for_unknown_game_is_rejected() {
    let mut game = Game::new().with_id(uuid::Uuid::nil());
    let record = MoveRecord {
        game_id: uuid::Uuid::new_v4(),
        text: "4143".to_string(),
        number: 1,
        color: Color::White,
    };
    assert!(matches!(
        game.apply_record(&record),
        Err(ChessError::RecordMismatch { .. })
    ));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_from_json_changes_rules() {
    let config = GameConfig::from_json_str(
        r#"{ "evaluation": "king_escapes", "enforce_turn_order": false }"#,
    )
    .unwrap();
    assert_eq!(config.evaluation, EvaluationRule::KingEscapes);

    let mut game = Game::with_config(config);
    // Black first is fine with turn order relaxed
    assert!(play_as(&mut game, "4644", Color::Black));
    assert!(play_as(&mut game, "4143", Color::White));
    assert_eq!(game.config().evaluation, EvaluationRule::KingEscapes);
}

fn play_as(game: &mut Game, text: &str, color: Color) -> bool {
    let mv = game.parse_move(text, color).unwrap();
    game.play_turn(mv)
}
