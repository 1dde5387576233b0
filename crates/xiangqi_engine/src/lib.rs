//! Xiangqi (Chinese chess) rules and search engine
//!
//! Board representation, move generation and legality, game outcome, evaluation and an
//! alpha-beta search with iterative deepening, plus compact move notation, game records and an
//! opening book built from them.
//!
//! ## Module Organization
//!
//! - `types` - Alliances, piece types, coordinates and pieces
//! - `constants` - Board geometry and scoring constants
//! - `board` - Immutable-by-default board with cached per-placement snapshots and FEN
//! - `move_gen` - Per-piece movement rules and attack queries
//! - `moves` - Move values and move outcomes
//! - `player` - One side's view of a board
//! - `hash` - Zobrist keys and the transposition table
//! - `evaluation` - Static evaluation
//! - `search` - Negamax search and the [`Engine`] facade
//! - `notation` - Four-character move notation
//! - `record` - Game records
//! - `book` - Opening book
//! - `api` - Game session helpers for front ends
//! - `error` - Error types

pub mod api;
pub mod board;
pub mod book;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod hash;
pub mod move_gen;
pub mod moves;
pub mod notation;
pub mod player;
pub mod record;
pub mod search;
pub mod types;

pub use board::{Board, Outcome, Squares};
pub use book::OpeningBook;
pub use error::{XiangqiError, XiangqiResult};
pub use evaluation::{EvalBreakdown, Evaluator};
pub use moves::{Move, MoveStatus, MoveTransition};
pub use player::Player;
pub use record::GameRecord;
pub use search::{Engine, SearchConfig, SearchMode, SearchOutcome, SearchStats};
pub use types::{Alliance, Coordinate, GamePhase, Piece, PieceType};
