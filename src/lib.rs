//! Omok (five-in-a-row) AI engine
//!
//! An engine that picks moves for Omok played on an n×n board:
//! - Default 15x15 board, any size supported
//! - Five consecutive stones in a row, column or diagonal win
//! - Boards of size 3 or less are searched exhaustively
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with occupied-cell tracking
//! - [`rules`]: Win detection and move legality
//! - [`eval`]: Pattern-table position evaluation
//! - [`search`]: Candidate generation and minimax with alpha-beta pruning
//! - [`engine`]: The computer player tying the pieces together
//!
//! # Quick Start
//!
//! ```
//! use omok::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::default();
//! let config = EngineConfig { max_depth: 2, seed: Some(7), ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(Stone::White, Stone::Black, config).unwrap();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! // AI responds as White
//! let pos = engine.choose_move(&board).unwrap();
//! board.place_stone(pos, Stone::White).unwrap();
//! println!("AI plays at {pos}");
//! ```
//!
//! # Search
//!
//! 1. Opening policy: center on an empty board, a random neighbor of the
//!    center on a board with one or two stones
//! 2. Minimax with alpha-beta pruning over cells next to existing stones,
//!    scored by the pattern evaluator at the leaves

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, MoveResult, MoveSource};
pub use error::{BoardError, EngineError};
pub use rules::{check_winner, game_status, is_won_by, GameStatus};
