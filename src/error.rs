//! Error types for the m,n,k engine
//!
//! Every variant is a caller contract violation: the engine never retries or
//! recovers on its own, it hands the problem back to the shell that called it.

use thiserror::Error;

/// Errors reported by board mutation and move selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate lies outside the grid
    #[error("coordinate ({row}, {col}) is outside the {rows}x{cols} board")]
    InvalidCoordinate {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Attempted write to a cell that already holds a mark
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// Move selection was asked for on a full board
    #[error("no legal move: the board is full")]
    NoLegalMove,

    /// Board must have at least one row and one column
    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Run length must satisfy 1 <= k <= max(rows, cols)
    #[error("invalid run length {k} (must be between 1 and {max})")]
    InvalidRunLength { k: usize, max: usize },

    /// Evaluation was stopped through a cancel token
    #[error("move evaluation was cancelled")]
    Cancelled,
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, EngineError>;
