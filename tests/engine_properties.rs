//! Behavioral properties of the board, win detection and engine,
//! checked on seeded random positions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use omok::rules::run_of_length;
use omok::search::Searcher;
use omok::{is_won_by, AIEngine, Board, EngineConfig, MoveSource, Pos, Stone};

const STONES: [Stone; 3] = [Stone::Empty, Stone::Black, Stone::White];

fn random_board(rng: &mut StdRng, size: usize, fill: f64) -> Board {
    let mut board = Board::new(size);
    for idx in 0..size * size {
        if rng.gen_bool(fill) {
            let stone = if rng.gen_bool(0.5) { Stone::Black } else { Stone::White };
            board.place_stone(Pos::from_index(idx, size), stone).unwrap();
        }
    }
    board
}

/// Straightforward five-in-a-row check used as an oracle
fn has_five(board: &Board, stone: Stone) -> bool {
    let n = board.size() as i64;
    let dirs = [(0, 1), (1, 0), (1, 1), (-1, 1)];
    for r in 0..n {
        for c in 0..n {
            for (dr, dc) in dirs {
                let all = (0..5).all(|i| {
                    let (rr, cc) = (r + dr * i, c + dc * i);
                    rr >= 0
                        && rr < n
                        && cc >= 0
                        && cc < n
                        && board.get(Pos::new(rr as usize, cc as usize)) == Ok(stone)
                });
                if all {
                    return true;
                }
            }
        }
    }
    false
}

fn engine(stone: Stone, depth: u8, alpha_beta: bool) -> AIEngine {
    let config = EngineConfig {
        max_depth: depth,
        alpha_beta,
        seed: Some(2024),
        ..EngineConfig::default()
    };
    AIEngine::with_config(stone, stone.opponent(), config).unwrap()
}

#[test]
fn win_detection_matches_oracle() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let size = rng.gen_range(5..=11);
        let board = random_board(&mut rng, size, 0.55);
        for stone in [Stone::Black, Stone::White] {
            assert_eq!(is_won_by(&board, stone), has_five(&board, stone), "\n{board}");
        }
    }
}

#[test]
fn runs_are_contiguous_and_owned() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..100 {
        let board = random_board(&mut rng, 8, 0.5);
        for k in 1..=5 {
            for stone in [Stone::Black, Stone::White] {
                let run = run_of_length(&board, k, stone);
                if run.is_empty() {
                    continue;
                }
                assert_eq!(run.len(), k);
                assert!(run.iter().all(|p| board.get(*p) == Ok(stone)));
                if k > 1 {
                    let dr = run[1].row as i64 - run[0].row as i64;
                    let dc = run[1].col as i64 - run[0].col as i64;
                    for pair in run.windows(2) {
                        assert_eq!(pair[1].row as i64 - pair[0].row as i64, dr);
                        assert_eq!(pair[1].col as i64 - pair[0].col as i64, dc);
                    }
                }
            }
        }
    }
}

#[test]
fn occupied_set_matches_cells_after_random_edits() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut board = Board::new(9);
    for _ in 0..2_000 {
        let pos = Pos::new(rng.gen_range(0..9), rng.gen_range(0..9));
        let stone = STONES[rng.gen_range(0..3)];
        board.place_stone(pos, stone).unwrap();
        assert_eq!(board.occupied().contains(&pos), stone != Stone::Empty);
    }

    let non_empty: Vec<Pos> = (0..81)
        .map(|i| Pos::from_index(i, 9))
        .filter(|p| board.get(*p) != Ok(Stone::Empty))
        .collect();
    assert_eq!(non_empty.len(), board.stone_count());
    assert!(non_empty.iter().all(|p| board.occupied().contains(p)));
}

#[test]
fn clone_does_not_share_state() {
    let mut rng = StdRng::seed_from_u64(4);
    let board = random_board(&mut rng, 15, 0.2);
    let snapshot: Vec<Pos> = board.occupied().iter().copied().collect();

    let mut copy = board.clone();
    copy.clear();
    copy.place_stone(Pos::new(0, 0), Stone::Black).unwrap();

    let after: Vec<Pos> = board.occupied().iter().copied().collect();
    assert_eq!(snapshot, after);
}

#[test]
fn empty_board_opens_in_center() {
    let mut ai = engine(Stone::Black, 3, true);
    let result = ai.choose_move_with_stats(&Board::new(15)).unwrap();
    assert_eq!(result.best_move, Pos::new(7, 7));
    assert_eq!(result.source, MoveSource::Opening);
}

#[test]
fn open_four_end_is_completed() {
    // Four in a row with one open end, everything else empty
    let mut board = Board::new(15);
    for col in 11..15 {
        board.place_stone(Pos::new(0, col), Stone::White).unwrap();
    }
    let mut ai = engine(Stone::White, 3, true);
    assert_eq!(ai.choose_move(&board).unwrap(), Pos::new(0, 10));

    let mut board = Board::new(15);
    for i in 0..4 {
        board.place_stone(Pos::new(11 + i, 3 - i), Stone::Black).unwrap();
    }
    let mut ai = engine(Stone::Black, 2, true);
    assert_eq!(ai.choose_move(&board).unwrap(), Pos::new(10, 4));
}

#[test]
fn pruning_never_changes_the_outcome() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut checked = 0;
    while checked < 12 {
        let size = rng.gen_range(4..=5);
        let board = random_board(&mut rng, size, 0.25);
        if board.is_board_empty() || board.is_full() {
            continue;
        }
        for depth in 1..=3 {
            let mut pruned = Searcher::new(Stone::Black, Stone::White);
            let mut plain = Searcher::new(Stone::Black, Stone::White).with_pruning(false);
            let a = pruned.search(&board, depth, &mut StdRng::seed_from_u64(9)).unwrap();
            let b = plain.search(&board, depth, &mut StdRng::seed_from_u64(9)).unwrap();
            assert_eq!(a.score, b.score, "depth {depth}\n{board}");
            assert_eq!(a.best_moves, b.best_moves, "depth {depth}\n{board}");
            // Same tie set and same seed give the same pick
            assert_eq!(a.best_move, b.best_move);
        }
        checked += 1;
    }
}

#[test]
fn engines_with_and_without_pruning_agree() {
    let mut board = Board::new(5);
    board.place_stone(Pos::new(2, 2), Stone::Black).unwrap();
    board.place_stone(Pos::new(1, 2), Stone::White).unwrap();
    board.place_stone(Pos::new(2, 1), Stone::Black).unwrap();

    let a = engine(Stone::White, 3, true).choose_move_with_stats(&board).unwrap();
    let b = engine(Stone::White, 3, false).choose_move_with_stats(&board).unwrap();
    assert_eq!(a.score, b.score);
    assert_eq!(a.best_move, b.best_move);
    assert!(a.nodes <= b.nodes);
}

#[test]
fn self_play_on_small_board_finishes() {
    let mut board = Board::new(7);
    let mut black = engine(Stone::Black, 2, true);
    let mut white = engine(Stone::White, 1, true);
    let mut to_move = Stone::Black;

    while omok::game_status(&board) == omok::GameStatus::InProgress {
        let ai = if to_move == Stone::Black { &mut black } else { &mut white };
        let pos = ai.choose_move(&board).unwrap();
        assert_eq!(board.get(pos), Ok(Stone::Empty));
        board.place_stone(pos, to_move).unwrap();
        to_move = to_move.opponent();
    }
    assert!(board.stone_count() <= 49);
}
