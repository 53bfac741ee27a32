//! Terminal driver for the chess rules engine
//!
//! Reads one move per line in 4-digit coordinate form (`4143` is e2-e4),
//! commits it and prints the board. Blank lines are skipped and `quit` ends
//! the session. Set `RUST_LOG=chess_rules=debug` to see every rule decision.

use anyhow::{Context, Result};
use chess_rules::notation::format_squares;
use chess_rules::{ChessResult, Game, GameConfig, GameState, MoveRecord};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chess", version, about = "Two-player chess with coordinate moves")]
struct Args {
    /// JSON engine config; defaults are used when it is missing or invalid
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the legal moves of the side to move before each prompt
    #[arg(long)]
    show_legal: bool,

    /// Print each committed move as a JSON move record
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };

    let mut game = Game::with_config(config);
    info!("Starting game {}", game.id());

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_position(&mut out, &game, args.show_legal)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read move from stdin")?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "quit" {
            break;
        }

        match play_line(&mut game, text) {
            Ok(record) if args.json => writeln!(out, "{}", record.to_json()?)?,
            Ok(record) => writeln!(out, "{}. {} {}", record.number, record.color, record.text)?,
            Err(e) => writeln!(out, "illegal: {}", e)?,
        }

        if game.state().is_terminal() {
            break;
        }
        print_position(&mut out, &game, args.show_legal)?;
    }

    writeln!(out, "{}", describe(game.state()))?;
    info!(
        "Game {} ended after {} plies: {:?}",
        game.id(),
        game.history().len(),
        game.state()
    );
    Ok(())
}

/// Parse, validate and commit one line of input
fn play_line(game: &mut Game, text: &str) -> ChessResult<MoveRecord> {
    let mv = game.parse_move(text, game.side_to_move())?;
    let record = game.record(&mv);
    game.try_play_turn(mv)?;
    Ok(record)
}

fn print_position(out: &mut impl Write, game: &Game, show_legal: bool) -> io::Result<()> {
    let color = game.side_to_move();
    writeln!(out, "{}", game.board())?;
    if game.is_in_check(color) {
        writeln!(out, "{} is in check", color)?;
    }
    if show_legal {
        let moves: Vec<String> = game
            .legal_moves(color)
            .into_iter()
            .map(|(from, to)| format_squares(from, to))
            .collect();
        writeln!(out, "legal: {}", moves.join(" "))?;
    }
    write!(out, "{} to move> ", color)?;
    out.flush()
}

fn describe(state: GameState) -> &'static str {
    match state {
        GameState::InProgress => "Game abandoned",
        GameState::WhiteWin => "White wins",
        GameState::BlackWin => "Black wins",
        GameState::Draw => "Draw",
    }
}
