//! Scoped move making for search
//!
//! A guard holds the mutable borrow of the board for as long as the move is on it. Dropping
//! the guard unmakes the move, so make and unmake are always paired in LIFO order: the borrow
//! checker rejects any attempt to touch the parent position while a child guard is alive.

use crate::board::Board;
use crate::moves::{Move, MoveStatus};
use std::ops::Deref;

/// A move applied to a board until the guard is dropped
pub struct MoveGuard<'b> {
    board: &'b mut Board,
    mv: Move,
}

impl<'b> MoveGuard<'b> {
    /// Apply a candidate move of the side to move
    ///
    /// Returns `None` (with the board untouched) when the move leaves the mover's General
    /// attacked. `mv` must come from the current player's candidate list.
    pub(crate) fn enter(board: &'b mut Board, mv: Move) -> Option<Self> {
        debug_assert!(board.current_player().legal_moves().contains(&mv));
        board.make_move(&mv);
        if board.is_state_allowed() {
            Some(Self { board, mv })
        } else {
            board.unmake_move(&mv);
            None
        }
    }

    /// Checked variant of [`MoveGuard::enter`] for moves from outside the search
    pub fn try_enter(board: &'b mut Board, mv: Move) -> Result<Self, MoveStatus> {
        if !board.current_player().legal_moves().contains(&mv) {
            return Err(MoveStatus::Illegal);
        }
        Self::enter(board, mv).ok_or(MoveStatus::Suicidal)
    }

    /// The board with the move on it, for searching below this node
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.unmake_move(&self.mv);
    }
}

/// The side to move passes until the guard is dropped
pub struct NullMoveGuard<'b> {
    board: &'b mut Board,
}

impl<'b> NullMoveGuard<'b> {
    pub fn new(board: &'b mut Board) -> Self {
        board.make_null_move();
        Self { board }
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Deref for NullMoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for NullMoveGuard<'_> {
    fn drop(&mut self) {
        self.board.unmake_null_move();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alliance, Coordinate};

    #[test]
    fn test_guard_restores_on_drop() {
        let mut board = Board::standard();
        let original = board.clone();
        let mv = board
            .current_player()
            .find_move(Coordinate::at(9, 1), Coordinate::at(7, 2))
            .unwrap();
        {
            let child = MoveGuard::try_enter(&mut board, mv).unwrap();
            assert_eq!(child.turn(), Alliance::Black);
            assert_ne!(child.zobrist_key(), original.zobrist_key());
        }
        assert_eq!(board, original);
    }

    #[test]
    fn test_nested_guards_unwind_in_order() {
        let mut board = Board::standard();
        let original = board.clone();
        let red = board.current_player().legal_moves()[0];
        {
            let mut child = MoveGuard::try_enter(&mut board, red).unwrap();
            let black = child.current_player().legal_moves()[0];
            let grandchild = MoveGuard::try_enter(child.board_mut(), black).unwrap();
            assert_eq!(grandchild.turn(), Alliance::Red);
        }
        assert_eq!(board, original);
    }

    #[test]
    fn test_suicidal_move_is_rejected_without_change() {
        let mut board = Board::from_fen("4k4/9/9/9/9/4R4/9/9/9/4K4 w").unwrap();
        let original = board.clone();
        let mv = board
            .current_player()
            .find_move(Coordinate::at(5, 4), Coordinate::at(5, 0))
            .unwrap();
        assert!(matches!(
            MoveGuard::try_enter(&mut board, mv),
            Err(MoveStatus::Suicidal)
        ));
        assert_eq!(board, original);
    }

    #[test]
    fn test_null_guard() {
        let mut board = Board::standard();
        let original = board.clone();
        {
            let passed = NullMoveGuard::new(&mut board);
            assert_eq!(passed.turn(), Alliance::Black);
        }
        assert_eq!(board, original);
    }
}
