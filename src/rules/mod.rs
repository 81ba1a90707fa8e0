//! Game rules for Omok
//!
//! This module implements the rule set:
//! - Win conditions (five in a row on any line)
//! - Move legality (in range and empty)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::is_valid_move;
pub use win::{
    check_winner, game_status, is_won_by, longest_run, run_of_length, winning_run, GameStatus,
    LineRun, WIN_LENGTH,
};
