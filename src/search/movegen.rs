//! Candidate move generation
//!
//! Search only considers empty cells touching an existing stone. Tiny
//! boards are enumerated exhaustively, and near-empty boards are
//! answered by a short opening policy instead of a search.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::eval::SMALL_BOARD_SIZE;

/// The 8 neighbor offsets
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Boards with at most this many stones get an opening move
pub const OPENING_STONE_LIMIT: usize = 2;

/// Empty in-range cells around `pos`
fn empty_neighbors(board: &Board, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    NEIGHBORS
        .iter()
        .filter_map(move |&(dr, dc)| pos.offset(dr, dc, board.size()))
        .filter(move |&p| board.at(p.row, p.col) == Stone::Empty)
}

/// Unique empty cells adjacent (8-neighborhood) to at least one stone, row-major.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let moves: BTreeSet<Pos> = board
        .occupied()
        .iter()
        .flat_map(|&pos| empty_neighbors(board, pos))
        .collect();
    moves.into_iter().collect()
}

/// Every empty cell, row-major
#[must_use]
pub fn all_empty_cells(board: &Board) -> Vec<Pos> {
    let size = board.size();
    (0..size * size)
        .map(|idx| Pos::from_index(idx, size))
        .filter(|p| board.at(p.row, p.col) == Stone::Empty)
        .collect()
}

/// Moves the search expands at a node: every empty cell on tiny boards,
/// adjacent cells otherwise.
#[must_use]
pub fn search_moves(board: &Board) -> Vec<Pos> {
    if board.size() <= SMALL_BOARD_SIZE {
        all_empty_cells(board)
    } else {
        candidate_moves(board)
    }
}

/// Opening policy for near-empty boards.
///
/// - Empty board: the center cell.
/// - One or two stones: the center if still free, else a uniformly random
///   empty neighbor of the center.
///
/// Returns `None` when the policy does not apply and a search is needed.
pub fn opening_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    if board.size() <= SMALL_BOARD_SIZE || board.stone_count() > OPENING_STONE_LIMIT {
        return None;
    }

    let center = board.center();
    if board.at(center.row, center.col) == Stone::Empty {
        return Some(center);
    }

    let around: Vec<Pos> = empty_neighbors(board, center).collect();
    around.choose(rng).copied()
}
