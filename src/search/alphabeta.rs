//! Minimax search with alpha-beta pruning
//!
//! The searcher works on a private copy of the caller's board and
//! mutates it in place (place, recurse, undo). Nothing else reads or
//! writes that copy while a search runs.
//!
//! # Features
//!
//! - Depth-limited minimax from the engine's point of view
//! - Alpha-beta pruning (can be switched off to get plain minimax)
//! - Candidate moves restricted to cells next to existing stones
//! - Every root move tied at the best score is reported, so the caller
//!   can break ties at random
//! - Optional iterative deepening under a deadline, with a shared stop flag
//!
//! # Example
//!
//! ```
//! use omok::board::{Board, Pos, Stone};
//! use omok::search::Searcher;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut board = Board::new(15);
//! board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let mut searcher = Searcher::new(Stone::White, Stone::Black);
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = searcher.search(&board, 2, &mut rng).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{trace, warn};

use crate::board::{Board, Pos, Stone};
use crate::error::{EngineError, EngineResult};
use crate::eval::{evaluate, PatternScore, SMALL_BOARD_SIZE};
use crate::rules::is_won_by;

use super::movegen::search_moves;

/// Infinity score for alpha-beta bounds
pub const INF: i64 = i64::MAX / 4;

/// How often (in nodes) the deadline is checked
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Shared flag that asks a running search to stop.
///
/// Clones share the same flag, so one can be handed to another thread
/// while the engine searches.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the search to stop at the next node
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Search result: the chosen move together with its score.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Move picked uniformly among `best_moves`
    pub best_move: Option<Pos>,
    /// Minimax value of the root from the engine's point of view
    pub score: i64,
    /// Every root move whose value equals `score`, row-major
    pub best_moves: Vec<Pos>,
    /// Depth of the last completed iteration
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
}

/// Depth-limited minimax searcher for one side.
pub struct Searcher {
    me: Stone,
    opponent: Stone,
    alpha_beta: bool,
    stop: StopHandle,
    deadline: Option<Instant>,
    /// Deadline only applies once the first iteration has finished
    deadline_armed: bool,
    /// Set once the deadline has passed; kept apart from the shared stop flag
    timed_out: bool,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher playing `me` against `opponent`.
    #[must_use]
    pub fn new(me: Stone, opponent: Stone) -> Self {
        Self {
            me,
            opponent,
            alpha_beta: true,
            stop: StopHandle::new(),
            deadline: None,
            deadline_armed: false,
            timed_out: false,
            nodes: 0,
        }
    }

    /// Enable or disable alpha-beta pruning
    #[must_use]
    pub fn with_pruning(mut self, alpha_beta: bool) -> Self {
        self.alpha_beta = alpha_beta;
        self
    }

    /// Use an externally owned stop flag
    #[must_use]
    pub fn with_stop(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    /// Search iteratively and return the deepest result finished before `deadline`
    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `board` to `max_depth` plies and pick a move.
    ///
    /// Without a deadline this is a single pass at `max_depth`. With a
    /// deadline it deepens from 1 ply and keeps the deepest finished
    /// iteration; the first iteration always runs to completion.
    pub fn search<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        max_depth: u8,
        rng: &mut R,
    ) -> EngineResult<SearchResult> {
        if max_depth == 0 {
            return Err(EngineError::InvalidDepth);
        }
        self.nodes = 0;
        self.deadline_armed = false;
        self.timed_out = false;
        let mut work_board = board.clone();

        let mut result = if self.deadline.is_none() {
            self.search_root(&mut work_board, max_depth)?
        } else {
            self.search_iterative(&mut work_board, max_depth)?
        };

        result.best_move = result.best_moves.choose(rng).copied();
        result.nodes = self.nodes;
        Ok(result)
    }

    fn search_iterative(&mut self, board: &mut Board, max_depth: u8) -> EngineResult<SearchResult> {
        let mut best: Option<SearchResult> = None;

        for depth in 1..=max_depth {
            self.deadline_armed = depth > 1;
            match self.search_root(board, depth) {
                Ok(result) => {
                    trace!(depth, score = result.score, nodes = self.nodes, "iteration complete");
                    let decided = result.score.abs() >= PatternScore::DECIDED;
                    best = Some(result);
                    if decided {
                        break;
                    }
                }
                Err(EngineError::Cancelled) => {
                    warn!(depth, nodes = self.nodes, "search stopped, keeping previous depth");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        best.ok_or(EngineError::Cancelled)
    }

    /// Root node: the engine moves, every candidate is searched and all
    /// moves tied at the best value are collected.
    fn search_root(&mut self, board: &mut Board, depth: u8) -> EngineResult<SearchResult> {
        let moves = search_moves(board);
        if moves.is_empty() {
            return Err(EngineError::NoCandidateMoves);
        }

        let mut best_score = -INF;
        let mut best_moves = Vec::new();

        for mov in moves {
            // One point below the best keeps tied child values exact
            let alpha = if self.alpha_beta { best_score - 1 } else { -INF };

            board.place_stone(mov, self.me)?;
            let score = self.minimax(board, false, depth - 1, alpha, INF);
            board.remove_stone(mov)?;
            let score = score?;

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(mov);
            } else if score == best_score {
                best_moves.push(mov);
            }
        }

        Ok(SearchResult {
            best_move: None,
            score: best_score,
            best_moves,
            depth,
            nodes: self.nodes,
        })
    }

    /// Check stop conditions; the deadline is polled every few nodes.
    #[inline]
    fn should_stop(&mut self) -> bool {
        if self.timed_out || self.stop.is_stopped() {
            return true;
        }
        if let (true, Some(deadline)) = (self.deadline_armed, self.deadline) {
            if self.nodes % TIME_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                self.timed_out = true;
            }
        }
        self.timed_out
    }

    /// Static score when the node is terminal, `None` otherwise.
    fn terminal_score(&self, board: &Board, depth: u8) -> Option<i64> {
        let score = evaluate(board, self.me, self.opponent);
        let decided = board.size() > SMALL_BOARD_SIZE && score.abs() >= PatternScore::DECIDED;
        if depth == 0
            || board.is_full()
            || is_won_by(board, self.me)
            || is_won_by(board, self.opponent)
            || decided
        {
            Some(score)
        } else {
            None
        }
    }

    /// Minimax with fail-soft alpha-beta. On a cutoff the best value seen
    /// so far is returned; it already lies outside the parent's window.
    fn minimax(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
    ) -> EngineResult<i64> {
        self.nodes += 1;
        if self.should_stop() {
            return Err(EngineError::Cancelled);
        }

        if let Some(score) = self.terminal_score(board, depth) {
            return Ok(score);
        }

        let moves = search_moves(board);
        if moves.is_empty() {
            return Err(EngineError::NoCandidateMoves);
        }

        let stone = if maximizing { self.me } else { self.opponent };
        let mut best = if maximizing { -INF } else { INF };

        for mov in moves {
            board.place_stone(mov, stone)?;
            let score = self.minimax(board, !maximizing, depth - 1, alpha, beta);
            board.remove_stone(mov)?;
            let score = score?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.alpha_beta && beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}
