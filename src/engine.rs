//! Main AI engine
//!
//! `AIEngine` is the computer player. It knows its own stone, its
//! opponent's stone and a fixed search depth. Each call to
//! [`AIEngine::choose_move`] works on a private copy of the caller's
//! board and returns a single position; applying it is up to the caller.
//!
//! Move selection:
//!
//! 1. **Opening**: empty or near-empty boards are answered without search
//! 2. **Search**: depth-limited minimax with alpha-beta pruning, ties at
//!    the root broken uniformly at random
//!
//! # Example
//!
//! ```
//! use omok::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let config = EngineConfig { max_depth: 2, seed: Some(1), ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(Stone::White, Stone::Black, config).unwrap();
//!
//! let mut board = Board::default();
//! board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let pos = engine.choose_move(&board).unwrap();
//! board.place_stone(pos, Stone::White).unwrap();
//! ```

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::{EngineError, EngineResult};
use crate::search::{opening_move, Searcher, StopHandle};

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies (at least 1)
    pub max_depth: u8,
    /// Prune with alpha-beta; off runs plain minimax with the same result
    pub alpha_beta: bool,
    /// Answer empty and near-empty boards without searching
    pub opening_book: bool,
    /// Deepen iteratively and stop once this much time has passed
    pub time_limit: Option<Duration>,
    /// Seed for tie-breaking; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            alpha_beta: true,
            opening_book: true,
            time_limit: None,
            seed: None,
        }
    }
}

/// Which stage produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Opening policy, no search
    Opening,
    /// Minimax search
    Search,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move
    pub best_move: Pos,
    /// Search value of the move (0 for opening moves)
    pub score: i64,
    pub source: MoveSource,
    /// Depth of the search that produced the move
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Computer player for Omok.
pub struct AIEngine {
    stone: Stone,
    opponent: Stone,
    config: EngineConfig,
    rng: StdRng,
    stop: StopHandle,
}

impl AIEngine {
    /// Create an engine for `stone` against the other color, default settings.
    pub fn new(stone: Stone) -> EngineResult<Self> {
        Self::with_config(stone, stone.opponent(), EngineConfig::default())
    }

    /// Create an engine with explicit opponent and settings.
    pub fn with_config(stone: Stone, opponent: Stone, config: EngineConfig) -> EngineResult<Self> {
        if stone == Stone::Empty || opponent == Stone::Empty {
            return Err(EngineError::EmptyStone);
        }
        if stone == opponent {
            return Err(EngineError::SameStone(stone));
        }
        if config.max_depth == 0 {
            return Err(EngineError::InvalidDepth);
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            stone,
            opponent,
            config,
            rng,
            stop: StopHandle::new(),
        })
    }

    /// Replace the tie-breaking random source
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[inline]
    pub fn stone(&self) -> Stone {
        self.stone
    }

    #[inline]
    pub fn opponent(&self) -> Stone {
        self.opponent
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handle that stops the running (or next) search.
    ///
    /// A stop request is consumed when `choose_move` returns.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Change the search depth
    pub fn set_depth(&mut self, depth: u8) -> EngineResult<()> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth);
        }
        self.config.max_depth = depth;
        Ok(())
    }

    /// Change the time budget (`None` searches to full depth)
    pub fn set_time_limit(&mut self, limit: Option<Duration>) {
        self.config.time_limit = limit;
    }

    /// Choose a move for the current position.
    pub fn choose_move(&mut self, board: &Board) -> EngineResult<Pos> {
        self.choose_move_with_stats(board).map(|result| result.best_move)
    }

    /// Choose a move and report how it was found.
    pub fn choose_move_with_stats(&mut self, board: &Board) -> EngineResult<MoveResult> {
        let result = self.select(board);
        self.stop.reset();
        result
    }

    fn select(&mut self, board: &Board) -> EngineResult<MoveResult> {
        let start = Instant::now();

        if board.is_full() {
            return Err(EngineError::BoardFull);
        }

        if self.config.opening_book {
            if let Some(pos) = opening_move(board, &mut self.rng) {
                debug!(stone = ?self.stone, %pos, "opening move");
                return Ok(MoveResult {
                    best_move: pos,
                    score: 0,
                    source: MoveSource::Opening,
                    depth: 0,
                    nodes: 0,
                    time_ms: start.elapsed().as_millis() as u64,
                });
            }
        }

        let deadline = self.config.time_limit.map(|limit| start + limit);
        let mut searcher = Searcher::new(self.stone, self.opponent)
            .with_pruning(self.config.alpha_beta)
            .with_stop(self.stop.clone())
            .with_deadline(deadline);

        let result = searcher.search(board, self.config.max_depth, &mut self.rng)?;
        let best_move = result.best_move.ok_or(EngineError::NoCandidateMoves)?;
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            stone = ?self.stone,
            pos = %best_move,
            score = result.score,
            ties = result.best_moves.len(),
            depth = result.depth,
            nodes = result.nodes,
            time_ms,
            "search move"
        );

        Ok(MoveResult {
            best_move,
            score: result.score,
            source: MoveSource::Search,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        })
    }
}
