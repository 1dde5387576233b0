//! Game state queries and AI move generation
//!
//! Functions for querying game state and generating AI moves.

use super::game::Game;
use super::moves::do_move;
use crate::board::Outcome;
use crate::moves::MoveStatus;
use crate::search::{Engine, SearchOutcome};
use tracing::info;

/// Get current game state (ongoing, won, drawn)
pub fn get_game_state(game: &Game) -> Outcome {
    game.board.outcome()
}

/// Let the engine choose and play a move for the side to move
///
/// Returns the search result for the move played, or `None` when the game is over and there
/// is nothing to play.
pub async fn reply(engine: &mut Engine, game: &mut Game) -> Option<SearchOutcome> {
    if get_game_state(game) != Outcome::Ongoing {
        return None;
    }
    let outcome = engine.best_move(&game.board).await?;
    let mv = outcome.best_move;
    match do_move(game, mv.origin(), mv.destination()) {
        MoveStatus::Done => {
            info!(
                mv = %mv,
                score = outcome.score,
                depth = outcome.depth,
                book = outcome.from_book,
                "engine reply"
            );
            Some(outcome)
        }
        _ => None,
    }
}
