//! Chess Rules Benchmarks
//!
//! Performance benchmarks for the hot rules paths using Criterion.

use chess_rules::{Color, Game};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(Game::new())));
}

fn bench_legal_moves_starting(c: &mut Criterion) {
    let game = Game::new();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(game.legal_moves(Color::White)))
    });
}

fn bench_legal_moves_both_colors(c: &mut Criterion) {
    let game = Game::new();

    c.bench_function("legal_moves_both_colors", |b| {
        b.iter(|| {
            let white = game.legal_moves(Color::White);
            let black = game.legal_moves(Color::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_evaluate_board_starting(c: &mut Criterion) {
    let game = Game::new();

    c.bench_function("evaluate_board_starting", |b| {
        b.iter(|| black_box(game.evaluate_board()))
    });
}

fn bench_play_opening(c: &mut Criterion) {
    let script = ["4143", "4644", "6052", "1725", "5023", "5724"];

    c.bench_function("play_opening", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for text in script {
                if let Ok(mv) = game.parse_move(text, game.side_to_move()) {
                    game.play_turn(mv);
                }
            }
            black_box(game.state())
        })
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves_starting,
    bench_legal_moves_both_colors,
    bench_evaluate_board_starting,
    bench_play_opening,
);
criterion_main!(benches);
