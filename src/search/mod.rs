//! Search module for the Omok AI
//!
//! Contains:
//! - Candidate move generation and the opening policy
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher, StopHandle, INF};
pub use movegen::{all_empty_cells, candidate_moves, opening_move, search_moves};
