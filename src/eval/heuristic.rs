//! Heuristic evaluation function for Omok board positions
//!
//! Every maximal line of the board (rows, columns and both diagonal
//! families) is encoded as a sequence of cell codes from one player's
//! point of view, with an edge cell at both ends so the border blocks a
//! shape the way an enemy stone does. Each 5- and 6-cell window of the
//! padded line is looked up in the pattern table and the matches are
//! summed.

use crate::board::{Board, Pos, Stone};
use crate::rules::is_won_by;

use super::patterns::{
    window_code, window_score, EDGE_CELL, EMPTY_CELL, MAX_PATTERN_LEN, MIN_PATTERN_LEN,
    OPPONENT_CELL, OWN_CELL,
};

/// Boards up to this size are scored as won / lost / undecided only
pub const SMALL_BOARD_SIZE: usize = 3;

/// Evaluate the board from the perspective of `me`.
///
/// Positive values favor `me`, negative values favor `opponent`. On
/// boards of size 3 or less the result is `1`, `-1` or `0`.
#[must_use]
pub fn evaluate(board: &Board, me: Stone, opponent: Stone) -> i64 {
    if board.size() <= SMALL_BOARD_SIZE {
        return if is_won_by(board, me) {
            1
        } else if is_won_by(board, opponent) {
            -1
        } else {
            0
        };
    }

    let mut codes = Vec::with_capacity(board.size() + 2);
    let mut total = 0;

    for (start, (dr, dc), len) in lines(board.size()) {
        codes.clear();
        codes.push(EDGE_CELL);
        codes.extend((0..len as i64).map(|i| {
            let r = (start.row as i64 + dr * i) as usize;
            let c = (start.col as i64 + dc * i) as usize;
            match board.at(r, c) {
                Stone::Empty => EMPTY_CELL,
                s if s == me => OWN_CELL,
                s if s == opponent => OPPONENT_CELL,
                _ => EMPTY_CELL,
            }
        }));
        codes.push(EDGE_CELL);
        total += score_line(&codes);
    }

    total
}

/// Sum of pattern scores over every 5- and 6-cell window of a line
#[inline]
fn score_line(codes: &[u8]) -> i64 {
    (MIN_PATTERN_LEN..=MAX_PATTERN_LEN)
        .filter(|&len| codes.len() >= len)
        .map(|len| {
            codes
                .windows(len)
                .map(|w| window_score(len, window_code(w)))
                .sum::<i64>()
        })
        .sum()
}

/// Every maximal line long enough to hold a pattern, as (start, direction, length).
fn lines(size: usize) -> impl Iterator<Item = (Pos, (i64, i64), usize)> {
    let rows = (0..size).map(move |r| (Pos::new(r, 0), (0, 1), size));
    let cols = (0..size).map(move |c| (Pos::new(0, c), (1, 0), size));
    // Top-left to bottom-right, starting on the top row then the left column
    let diag_se = (0..size)
        .map(move |c| (Pos::new(0, c), (1, 1), size - c))
        .chain((1..size).map(move |r| (Pos::new(r, 0), (1, 1), size - r)));
    // Bottom-left to top-right, starting on the left column then the bottom row
    let diag_ne = (0..size)
        .map(move |r| (Pos::new(r, 0), (-1, 1), r + 1))
        .chain((1..size).map(move |c| (Pos::new(size - 1, c), (-1, 1), size - c)));

    rows.chain(cols)
        .chain(diag_se)
        .chain(diag_ne)
        .filter(|&(_, _, len)| len >= MIN_PATTERN_LEN)
}
