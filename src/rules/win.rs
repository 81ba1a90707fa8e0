//! Win detection for five-in-a-row
//!
//! Lines are scanned in a fixed order so the first matching run is
//! deterministic: rows (top to bottom, left to right), then columns,
//! then top-left to bottom-right diagonals, then bottom-left to
//! top-right diagonals.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i64, i64); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (-1, 1), // Diagonal NE
];

/// Outcome of a game as seen from the board alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    Draw,
}

/// Longest run of one owner with its open ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRun {
    /// Stones in the run
    pub length: usize,
    /// Empty in-range cells touching either end (0-2)
    pub open_ends: u8,
}

/// Check that the `k` cells from `start` along `dir` are equal and accepted by `accept`.
#[inline]
fn run_at(
    board: &Board,
    start: Pos,
    dir: (i64, i64),
    k: usize,
    accept: &impl Fn(Stone) -> bool,
) -> bool {
    let first = board.at(start.row, start.col);
    if !accept(first) {
        return false;
    }
    (1..k as i64).all(|i| {
        let r = (start.row as i64 + dir.0 * i) as usize;
        let c = (start.col as i64 + dir.1 * i) as usize;
        board.at(r, c) == first
    })
}

/// Every run start for length `k`, in scan order, paired with its direction.
fn run_starts(size: usize, k: usize) -> impl Iterator<Item = (Pos, (i64, i64))> {
    let span = size + 1 - k;
    let rows =
        (0..size).flat_map(move |r| (0..span).map(move |c| (Pos::new(r, c), DIRECTIONS[0])));
    let cols =
        (0..size).flat_map(move |c| (0..span).map(move |r| (Pos::new(r, c), DIRECTIONS[1])));
    let diag_se =
        (0..span).flat_map(move |r| (0..span).map(move |c| (Pos::new(r, c), DIRECTIONS[2])));
    let diag_ne =
        (k - 1..size).flat_map(move |r| (0..span).map(move |c| (Pos::new(r, c), DIRECTIONS[3])));
    rows.chain(cols).chain(diag_se).chain(diag_ne)
}

/// First run of `k` equal cells whose owner is accepted, in scan order.
fn first_run(board: &Board, k: usize, accept: impl Fn(Stone) -> bool) -> Vec<Pos> {
    let size = board.size();
    if k == 0 || k > size {
        return Vec::new();
    }

    run_starts(size, k)
        .find(|&(start, dir)| run_at(board, start, dir, k, &accept))
        .map(|(start, (dr, dc))| {
            (0..k as i64)
                .map(|i| {
                    Pos::new(
                        (start.row as i64 + dr * i) as usize,
                        (start.col as i64 + dc * i) as usize,
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

/// First run of exactly `k` consecutive cells owned by `stone`.
///
/// Returns the `k` positions in line order, or an empty list. For
/// `k == 1` the row scan yields the first cell owned by `stone` in
/// row-major order.
#[must_use]
pub fn run_of_length(board: &Board, k: usize, stone: Stone) -> Vec<Pos> {
    first_run(board, k, |s| s == stone)
}

/// Check if `stone` has five consecutive stones on any line.
///
/// A longer run also contains five consecutive stones and counts.
#[must_use]
pub fn is_won_by(board: &Board, stone: Stone) -> bool {
    if stone == Stone::Empty || board.size() < WIN_LENGTH || board.stone_count() < WIN_LENGTH {
        return false;
    }
    run_starts(board.size(), WIN_LENGTH)
        .any(|(start, dir)| run_at(board, start, dir, WIN_LENGTH, &|s| s == stone))
}

/// The first five-in-a-row on the board, for highlighting the win line
#[must_use]
pub fn winning_run(board: &Board) -> Option<(Stone, Vec<Pos>)> {
    let run = first_run(board, WIN_LENGTH, |s| s != Stone::Empty);
    let first = *run.first()?;
    Some((board.at(first.row, first.col), run))
}

/// Get the winner, if any
#[must_use]
pub fn check_winner(board: &Board) -> Option<Stone> {
    winning_run(board).map(|(stone, _)| stone)
}

/// Game status after the last move
#[must_use]
pub fn game_status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(stone) => GameStatus::Won(stone),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

/// Longest run of `stone` on any line, ranked by length then open ends.
///
/// Each run is measured once, from the stone with no same-color
/// neighbor behind it.
#[must_use]
pub fn longest_run(board: &Board, stone: Stone) -> LineRun {
    let size = board.size();
    let mut best = LineRun::default();
    if stone == Stone::Empty {
        return best;
    }

    let is_open = |pos: Option<Pos>| pos.is_some_and(|p| board.at(p.row, p.col) == Stone::Empty);

    for &pos in board.occupied() {
        if board.at(pos.row, pos.col) != stone {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            let before = pos.offset(-dr, -dc, size);
            if before.is_some_and(|p| board.at(p.row, p.col) == stone) {
                continue;
            }

            let mut length = 1;
            let mut cur = pos;
            while let Some(next) = cur.offset(dr, dc, size) {
                if board.at(next.row, next.col) != stone {
                    break;
                }
                length += 1;
                cur = next;
            }
            let after = cur.offset(dr, dc, size);
            let open_ends = u8::from(is_open(before)) + u8::from(is_open(after));

            let run = LineRun { length, open_ends };
            if (run.length, run.open_ends) > (best.length, best.open_ends) {
                best = run;
            }
        }
    }

    best
}
