//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize alpha-beta pruning efficiency by trying the most promising moves
//! first:
//! - Captures before quiet moves, the most valuable victim taken by the least valuable
//!   attacker first
//! - Quiet moves by piece priority (chariot, cannon, horse, soldier, then the defenders)
//! - A hinted move (from the transposition table) ahead of everything else
//!
//! Iterative deepening additionally re-ranks root moves by the values the previous, shallower
//! pass assigned to them.

use crate::constants::CAPTURE_ORDER_BASE;
use crate::moves::Move;
use crate::types::GamePhase;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveOrderer;

impl MoveOrderer {
    pub fn new() -> Self {
        Self
    }

    /// Ordering key, higher first
    ///
    /// Capture values use middle-game material so the key does not depend on the board.
    pub fn score(&self, mv: &Move) -> i32 {
        let mover = mv.moved_piece().piece_type();
        match mv.captured_piece() {
            Some(victim) => {
                CAPTURE_ORDER_BASE + victim.material_value(GamePhase::Middle)
                    - mover.material_value(GamePhase::Middle)
            }
            None => mover.move_priority(),
        }
    }

    /// Order moves for better alpha-beta pruning
    pub fn order(&self, moves: &mut [Move], hint: Option<Move>) {
        moves.sort_by_cached_key(|mv| Reverse(self.score(mv)));

        if let Some(hint) = hint {
            if let Some(index) = moves.iter().position(|mv| *mv == hint) {
                moves[..=index].rotate_right(1);
            }
        }
    }

    /// Moves ranked by values from a shallower pass, best first
    ///
    /// Ties keep their previous relative order.
    pub fn order_by_values(&self, values: &[(Move, i32)]) -> Vec<Move> {
        let mut ranked = values.to_vec();
        ranked.sort_by_key(|&(_, value)| Reverse(value));
        ranked.into_iter().map(|(mv, _)| mv).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Coordinate;

    #[test]
    fn test_order_moves_prioritizes_captures() {
        let board = Board::standard();
        let mut moves = board.current_player().legal_moves().to_vec();
        MoveOrderer::new().order(&mut moves, None);

        // the two cannon captures of the black horses come first
        assert!(moves[0].is_capture());
        assert!(moves[1].is_capture());
        assert!(!moves[2].is_capture());
    }

    #[test]
    fn test_order_moves_mvv_lva() {
        // red soldier and red chariot can both take the black chariot on (3,4)
        let board = Board::from_fen("3k5/9/9/R3r4/4P4/9/9/9/9/4K4 w").unwrap();
        let mut moves: Vec<_> = board
            .current_player()
            .legal_moves()
            .iter()
            .copied()
            .filter(|m| m.is_capture())
            .collect();
        assert_eq!(moves.len(), 2);
        MoveOrderer::new().order(&mut moves, None);
        assert_eq!(moves[0].origin(), Coordinate::at(4, 4), "soldier takes first");
    }

    #[test]
    fn test_quiet_moves_by_priority() {
        let board = Board::standard();
        let mut moves: Vec<_> = board
            .current_player()
            .legal_moves()
            .iter()
            .copied()
            .filter(|m| !m.is_capture())
            .collect();
        MoveOrderer::new().order(&mut moves, None);
        assert_eq!(
            moves[0].moved_piece().piece_type(),
            crate::types::PieceType::Chariot
        );
        assert_eq!(
            moves.last().unwrap().moved_piece().piece_type(),
            crate::types::PieceType::General
        );
    }

    #[test]
    fn test_hint_goes_first() {
        let board = Board::standard();
        let mut moves = board.current_player().legal_moves().to_vec();
        let hint = *moves.last().unwrap();
        MoveOrderer::new().order(&mut moves, Some(hint));
        assert_eq!(moves[0], hint);
    }

    #[test]
    fn test_order_by_values() {
        let board = Board::standard();
        let moves = board.current_player().legal_moves();
        let values = vec![(moves[0], -5), (moves[1], 30), (moves[2], 30), (moves[3], 10)];
        let ranked = MoveOrderer::new().order_by_values(&values);
        assert_eq!(ranked, vec![moves[1], moves[2], moves[3], moves[0]]);
    }
}
