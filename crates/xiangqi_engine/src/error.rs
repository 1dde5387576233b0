//! Error types for the xiangqi engine
//!
//! Provides custom error types for board construction, move notation and
//! game record replay. Routine move rejections (illegal or suicidal moves)
//! are reported through [`crate::moves::MoveStatus`], not through this type.

use crate::types::Alliance;
use thiserror::Error;

/// Errors that can occur in the xiangqi engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XiangqiError {
    /// Coordinate outside the 10x9 grid
    #[error("Invalid coordinate: row {row}, column {col} (must be 0-9, 0-8)")]
    InvalidCoordinate { row: i8, col: i8 },

    /// FEN string could not be parsed
    #[error("Malformed FEN: {message}")]
    MalformedFen { message: String },

    /// A side has no General on the board
    #[error("Board has no {alliance} General")]
    MissingGeneral { alliance: Alliance },

    /// Compact notation token could not be parsed
    #[error("Malformed move notation '{notation}': {message}")]
    MalformedNotation { notation: String, message: String },

    /// Notation parsed but does not match exactly one legal move
    #[error("Move notation '{notation}' does not resolve to a legal move")]
    UnresolvedMove { notation: String },

    /// Notation matches more than one legal move
    #[error("Move notation '{notation}' is ambiguous ({candidates} candidates)")]
    AmbiguousMove { notation: String, candidates: usize },

    /// Game record replay failed at a given line
    #[error("Game record rejected at line {line}: {source}")]
    RecordLine {
        line: usize,
        #[source]
        source: Box<XiangqiError>,
    },

    /// A resolved move was rejected when committed to the board
    #[error("Move '{notation}' was rejected: {status}")]
    RejectedMove { notation: String, status: String },

    /// Search error - no legal move available at the root
    #[error("Search error: {message}")]
    SearchError { message: String },
}

/// Result type alias for xiangqi engine operations
pub type XiangqiResult<T> = Result<T, XiangqiError>;
