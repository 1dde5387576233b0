//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::board::Board;
use crate::record::GameRecord;
use crate::XiangqiResult;

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) start: Board,
    pub(super) board: Board,
    pub(super) record: GameRecord,
    pub(super) previous: Vec<Board>,
}

impl Game {
    fn starting_from(start: Board) -> Self {
        Self {
            board: start.clone(),
            start,
            record: GameRecord::new(),
            previous: Vec::new(),
        }
    }

    /// Current position
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position the game started from
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Moves played so far, in notation
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Number of half-moves played
    pub fn ply(&self) -> usize {
        self.record.len()
    }
}

impl Default for Game {
    fn default() -> Self {
        new_game()
    }
}

/// Create a new game with the standard opening position
pub fn new_game() -> Game {
    Game::starting_from(Board::standard())
}

/// Create a game starting from a FEN position
pub fn game_from_fen(fen: &str) -> XiangqiResult<Game> {
    Ok(Game::starting_from(Board::from_fen(fen)?))
}

/// Reset to the position the game started from
pub fn reset_game(game: &mut Game) {
    *game = Game::starting_from(game.start.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Alliance;

    #[test]
    fn test_new_game() {
        let game = new_game();
        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.ply(), 0);
        assert_eq!(game.board().turn(), Alliance::Red);
    }

    #[test]
    fn test_game_from_fen_keeps_start() {
        let fen = "3k5/9/9/9/9/9/9/9/R8/4K4 b";
        let game = game_from_fen(fen).unwrap();
        assert_eq!(game.start().to_fen(), game.board().to_fen());
        assert_eq!(game.board().turn(), Alliance::Black);
        assert!(game_from_fen("9/9 w").is_err());
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut game = game_from_fen("3k5/9/9/9/9/9/9/9/R8/4K4 w").unwrap();
        crate::api::do_notation(&mut game, "R9+1").unwrap();
        assert_eq!(game.ply(), 1);

        reset_game(&mut game);
        assert_eq!(game.ply(), 0);
        assert_eq!(game.board(), game.start());
        assert_eq!(game.board().turn(), Alliance::Red);
    }
}
