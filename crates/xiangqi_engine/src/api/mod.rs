//! Game session API
//!
//! A [`Game`] is what a front end holds on to: the current board, the record of moves played
//! and enough history to take moves back. The engine itself only ever sees boards.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game, game_from_fen)
//! - `moves` - Move execution and validation (do_move, do_notation, undo_move, is_legal_move)
//! - `state` - Game state queries and AI (get_game_state, reply)

mod game;
mod moves;
mod state;

pub use game::{game_from_fen, new_game, reset_game, Game};
pub use moves::{do_move, do_notation, is_legal_move, undo_move};
pub use state::{get_game_state, reply};
