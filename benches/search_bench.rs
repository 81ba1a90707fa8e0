use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use omok::eval::evaluate;
use omok::search::candidate_moves;
use omok::{AIEngine, Board, EngineConfig, Pos, Stone};

/// Middle-game position with a few threats on both sides
fn midgame_board() -> Board {
    let mut board = Board::new(15);
    let black = [(7, 7), (7, 8), (8, 6), (6, 8), (9, 5), (8, 8)];
    let white = [(6, 7), (8, 7), (7, 6), (9, 7), (7, 9), (5, 9)];
    for &(r, c) in &black {
        board.place_stone(Pos::new(r, c), Stone::Black).expect("valid position");
    }
    for &(r, c) in &white {
        board.place_stone(Pos::new(r, c), Stone::White).expect("valid position");
    }
    board
}

fn engine(depth: u8, alpha_beta: bool) -> AIEngine {
    let config = EngineConfig {
        max_depth: depth,
        alpha_beta,
        seed: Some(42),
        ..EngineConfig::default()
    };
    AIEngine::with_config(Stone::Black, Stone::White, config).expect("valid engine")
}

/// Alpha-beta search time by depth
fn bench_search_depth(c: &mut Criterion) {
    let board = midgame_board();
    let mut group = c.benchmark_group("search_midgame");
    group.sample_size(10);

    for depth in 1..=3u8 {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let mut ai = engine(depth, true);
            b.iter(|| {
                let result = ai.choose_move_with_stats(black_box(&board));
                black_box(result.expect("search failed"))
            });
        });
    }

    group.finish();
}

/// Pruned against plain minimax at the same depth
fn bench_pruning(c: &mut Criterion) {
    let board = midgame_board();
    let mut group = c.benchmark_group("pruning_depth2");
    group.sample_size(10);

    for (name, alpha_beta) in [("alpha_beta", true), ("minimax", false)] {
        group.bench_function(name, |b| {
            let mut ai = engine(2, alpha_beta);
            b.iter(|| {
                let result = ai.choose_move_with_stats(black_box(&board));
                black_box(result.expect("search failed"))
            });
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("evaluate_15x15", |b| {
        b.iter(|| black_box(evaluate(black_box(&board), Stone::Black, Stone::White)))
    });
}

fn bench_candidates(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("candidate_moves_15x15", |b| {
        b.iter(|| black_box(candidate_moves(black_box(&board))))
    });
}

criterion_group!(benches, bench_search_depth, bench_pruning, bench_evaluate, bench_candidates);
criterion_main!(benches);
