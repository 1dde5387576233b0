//! Move execution and validation
//!
//! Functions for executing moves, taking them back and checking move legality.

use super::game::Game;
use crate::moves::{Move, MoveStatus, MoveTransition};
use crate::notation::decode;
use crate::types::Coordinate;
use crate::XiangqiResult;
use tracing::debug;

fn apply(game: &mut Game, mv: Move) -> MoveStatus {
    match game.board.current_player().make_move(&mv) {
        MoveTransition::Done(next) => {
            game.record.push(&game.board, mv);
            let before = std::mem::replace(&mut game.board, next);
            game.previous.push(before);
            debug!(ply = game.record.len(), mv = %mv, "move played");
            MoveStatus::Done
        }
        rejected => rejected.status(),
    }
}

/// Play the side to move's piece on `from` to `to`
///
/// # Returns
///
/// [`MoveStatus::Done`] when the move was played. [`MoveStatus::Illegal`] when no candidate
/// move connects the two squares, and [`MoveStatus::Suicidal`] when the move would leave the
/// mover's General attacked. The game is unchanged unless the move was played.
///
/// # Examples
///
/// ```rust
/// use xiangqi_engine::api::{do_move, new_game};
/// use xiangqi_engine::{Coordinate, MoveStatus};
///
/// let mut game = new_game();
/// let status = do_move(&mut game, Coordinate::at(7, 7), Coordinate::at(7, 4));
/// assert_eq!(status, MoveStatus::Done);
/// ```
pub fn do_move(game: &mut Game, from: Coordinate, to: Coordinate) -> MoveStatus {
    match game.board.current_player().find_move(from, to) {
        Some(mv) => apply(game, mv),
        None => MoveStatus::Illegal,
    }
}

/// Play a move given in compact notation, e.g. `C2.5`
///
/// # Errors
///
/// Notation that does not parse or does not resolve to exactly one candidate move.
pub fn do_notation(game: &mut Game, notation: &str) -> XiangqiResult<MoveStatus> {
    let mv = decode(&game.board, notation)?;
    Ok(apply(game, mv))
}

/// Take back the last move
pub fn undo_move(game: &mut Game) -> Option<Move> {
    let before = game.previous.pop()?;
    game.board = before;
    game.record.pop()
}

/// Whether moving from `from` to `to` would be played
pub fn is_legal_move(game: &Game, from: Coordinate, to: Coordinate) -> bool {
    game.board
        .current_player()
        .find_move(from, to)
        .is_some_and(|mv| game.board.leaves_general_safe(&mv))
}
