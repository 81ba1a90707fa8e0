//! Error types for the board and the AI engine
//!
//! Board access outside the grid and search invariant violations are
//! reported as errors instead of being turned into a default move.

use crate::board::Stone;

/// Errors raised by board access
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Coordinate outside `[0, size)` on either axis
    #[error("position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },
}

/// Errors raised while choosing a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Board access failed
    #[error(transparent)]
    Board(#[from] BoardError),

    /// A non-terminal node produced no candidate moves
    #[error("no candidate moves on a non-terminal board")]
    NoCandidateMoves,

    /// Asked for a move on a board with no empty cell
    #[error("board is full")]
    BoardFull,

    /// Engine and opponent were given the same stone
    #[error("engine and opponent cannot both play {0:?}")]
    SameStone(Stone),

    /// `Stone::Empty` used as a player identity
    #[error("Empty is not a player stone")]
    EmptyStone,

    /// Search depth must be at least one ply
    #[error("search depth must be at least 1")]
    InvalidDepth,

    /// Stop was requested before the first iteration finished
    #[error("search cancelled before any depth completed")]
    Cancelled,
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
