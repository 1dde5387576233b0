//! Per-side view of a board
//!
//! A [`Player`] borrows a board and answers questions for one alliance: its pieces, its legal
//! moves, check and checkmate. All of it reads the snapshot the board computed when its
//! placement last changed.
//!
//! Note that Xiangqi has no stalemate draw: a side with no safe move has lost whether or not it
//! is currently in check, which is why [`Player::is_in_checkmate`] does not look at the check
//! flag.

use crate::board::{Board, SideSnapshot};
use crate::moves::{Move, MoveTransition};
use crate::types::{Alliance, Coordinate, Piece};

#[derive(Copy, Clone)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, alliance: Alliance) -> Self {
        Self { board, alliance }
    }

    #[inline]
    fn side(&self) -> &'a SideSnapshot {
        self.board.snapshot().side(self.alliance)
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.alliance.opponent())
    }

    /// Moves allowed by piece movement rules, friendly squares excluded
    ///
    /// These are candidates: some may turn out suicidal when made.
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.side().legal_moves
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        &self.side().active_pieces
    }

    /// Any opponent move lands on this side's General
    pub fn is_in_check(&self) -> bool {
        self.side().in_check
    }

    /// No candidate move leaves this side's General safe
    pub fn is_in_checkmate(&self) -> bool {
        !self.board.has_escape(self.alliance)
    }

    pub fn has_attacking_pieces(&self) -> bool {
        self.active_pieces()
            .iter()
            .any(|p| p.piece_type().is_attacking())
    }

    /// Look up the candidate move from `from` to `to`
    pub fn find_move(&self, from: Coordinate, to: Coordinate) -> Option<Move> {
        self.legal_moves()
            .iter()
            .find(|mv| mv.origin() == from && mv.destination() == to)
            .copied()
    }

    /// Attempt `mv` on a copy of the board
    ///
    /// - `Illegal` when it is not this side's turn or `mv` is not one of its candidates
    /// - `Suicidal` when the resulting position leaves this side's General attacked
    /// - `Done` with the new board otherwise
    pub fn make_move(&self, mv: &Move) -> MoveTransition {
        if self.alliance != self.board.turn() || !self.legal_moves().contains(mv) {
            return MoveTransition::Illegal;
        }

        let next = mv.execute(self.board);
        if next.is_state_allowed() {
            MoveTransition::Done(next)
        } else {
            MoveTransition::Suicidal
        }
    }
}
