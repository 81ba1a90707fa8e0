//! Evaluation module for Omok positions
//!
//! This module provides pattern recognition and scoring for board positions.
//! The evaluation considers line shapes (fives, fours, threes, twos) for
//! both players, scored symmetrically.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, SMALL_BOARD_SIZE};
pub use patterns::{pattern_score, pattern_table, PatternScore};
