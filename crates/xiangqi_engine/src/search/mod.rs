//! Alpha-beta search with iterative deepening
//!
//! This module implements the engine's search using:
//! - Negamax variant of alpha-beta pruning over a single board mutated in place
//! - Null-move pruning for non-check positions with enough attacking material
//! - Capture-only quiescence search to soften the horizon effect
//! - Transposition table for caching
//! - Move ordering (capture value, piece priority, shallower-pass values)
//! - Iterative deepening under a wall-clock budget
//!
//! Every make in the tree is paired with its unmake by a scoped [`MoveGuard`]: the guard
//! applies the move on creation and reverts it when dropped, so no exit path (cutoff, early
//! return, deadline) can leave the board modified.
//!
//! ## Module Organization
//!
//! - `config` - Serializable search settings
//! - `alphabeta` - Core negamax and the root pass
//! - `quiescence` - Quiescence search to avoid horizon effect
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Scoped move guards
//! - `iterative` - Iterative deepening wrapper
//! - `engine` - The [`Engine`] facade tying evaluator, orderer, book and table together

mod alphabeta;
mod config;
mod engine;
mod iterative;
mod make_unmake;
mod ordering;
mod quiescence;

pub use config::{SearchConfig, SearchMode};
pub use engine::{Engine, SearchOutcome, SearchStats};
pub use make_unmake::{MoveGuard, NullMoveGuard};
pub use ordering::MoveOrderer;
