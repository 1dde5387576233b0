//! Moves and move outcomes
//!
//! A [`Move`] is a plain value: the piece that moves (as it stood before the move), the
//! destination, and the piece captured there if any. Because pieces are immutable values, a
//! move stays meaningful after the board it was generated on has changed, which is what the
//! game record and opening book rely on.

use crate::board::Board;
use crate::types::{Coordinate, Piece};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    moved_piece: Piece,
    destination: Coordinate,
    captured_piece: Option<Piece>,
}

impl Move {
    pub fn new(moved_piece: Piece, destination: Coordinate, captured_piece: Option<Piece>) -> Self {
        Self {
            moved_piece,
            destination,
            captured_piece,
        }
    }

    #[inline]
    pub fn moved_piece(&self) -> Piece {
        self.moved_piece
    }

    #[inline]
    pub fn origin(&self) -> Coordinate {
        self.moved_piece.position()
    }

    #[inline]
    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    #[inline]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured_piece
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// The piece as it stands after the move
    pub fn placed_piece(&self) -> Piece {
        self.moved_piece.move_to(self.destination)
    }

    /// Apply the move to a copy of `board`
    ///
    /// No legality check is made; use [`crate::player::Player::make_move`] for that.
    pub fn execute(&self, board: &Board) -> Board {
        let mut next = board.clone();
        next.make_move(self);
        next.forget_history();
        next
    }

    /// The same move on the left-right mirrored board
    pub fn mirror(&self) -> Move {
        Move {
            moved_piece: self.moved_piece.mirror(),
            destination: self.destination.mirror(),
            captured_piece: self.captured_piece.map(|p| p.mirror()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin(), self.destination)
    }
}

/// Outcome of attempting a move
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// Applied; the mover's General is safe
    Done,
    /// Not among the mover's legal moves, or not the mover's turn
    Illegal,
    /// Legal by movement rules but leaves the mover's own General attacked
    Suicidal,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::Illegal => write!(f, "illegal"),
            MoveStatus::Suicidal => write!(f, "leaves the General in check"),
        }
    }
}

/// Result of [`crate::player::Player::make_move`]
///
/// Only a completed move carries a board; the board the move was attempted on is untouched in
/// every case.
#[derive(Clone, Debug)]
pub enum MoveTransition {
    Done(Board),
    Illegal,
    Suicidal,
}

impl MoveTransition {
    pub fn status(&self) -> MoveStatus {
        match self {
            MoveTransition::Done(_) => MoveStatus::Done,
            MoveTransition::Illegal => MoveStatus::Illegal,
            MoveTransition::Suicidal => MoveStatus::Suicidal,
        }
    }

    pub fn into_board(self) -> Option<Board> {
        match self {
            MoveTransition::Done(board) => Some(board),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alliance, PieceType};

    fn horse_move() -> Move {
        let horse = Piece::new(PieceType::Horse, Alliance::Red, Coordinate::at(9, 1));
        Move::new(horse, Coordinate::at(7, 2), None)
    }

    #[test]
    fn test_move_mirror() {
        let mirrored = horse_move().mirror();
        assert_eq!(mirrored.origin(), Coordinate::at(9, 7));
        assert_eq!(mirrored.destination(), Coordinate::at(7, 6));
        assert_eq!(mirrored.mirror(), horse_move());
    }

    #[test]
    fn test_execute_leaves_source_board_untouched() {
        let board = Board::standard();
        let next = horse_move().execute(&board);
        assert!(board.piece_at(Coordinate::at(9, 1)).is_some());
        assert!(next.piece_at(Coordinate::at(9, 1)).is_none());
        assert_eq!(
            next.piece_at(Coordinate::at(7, 2)).map(|p| p.piece_type()),
            Some(PieceType::Horse)
        );
        assert_eq!(next.turn(), Alliance::Black);
    }

    #[test]
    fn test_display() {
        assert_eq!(horse_move().to_string(), "(9,1)->(7,2)");
    }
}
