//! Game records
//!
//! A record is the list of moves of one game from the standard opening position. The text form
//! is one compact-notation move per line. Loading replays every move and fails as a whole on the
//! first line that does not parse or does not resolve to a move that can be played; there is no
//! partial replay.

use crate::board::Board;
use crate::moves::{Move, MoveTransition};
use crate::notation::{decode, encode};
use crate::{XiangqiError, XiangqiResult};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRecord {
    moves: Vec<Move>,
    notations: Vec<String>,
}

impl GameRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move played on `before`
    pub fn push(&mut self, before: &Board, mv: Move) {
        self.notations.push(encode(before, &mv));
        self.moves.push(mv);
    }

    /// Drop the last move
    pub fn pop(&mut self) -> Option<Move> {
        self.notations.pop();
        self.moves.pop()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn notations(&self) -> &[String] {
        &self.notations
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.notations.len() * 5);
        for notation in &self.notations {
            text.push_str(notation);
            text.push('\n');
        }
        text
    }

    /// Parse and replay a record from the standard opening
    ///
    /// Blank lines are skipped; line numbers in errors are 1-based.
    pub fn from_text(text: &str) -> XiangqiResult<Self> {
        Self::replay_text(text).map(|(record, _)| record)
    }

    /// Parse and replay, returning the final board as well
    pub fn replay_text(text: &str) -> XiangqiResult<(Self, Board)> {
        let mut board = Board::standard();
        let mut record = GameRecord::new();

        for (index, line) in text.lines().enumerate() {
            let notation = line.trim();
            if notation.is_empty() {
                continue;
            }
            let line_number = index + 1;
            let at_line = |source: XiangqiError| {
                warn!(line = line_number, error = %source, "game record rejected");
                XiangqiError::RecordLine {
                    line: line_number,
                    source: Box::new(source),
                }
            };

            let mv = decode(&board, notation).map_err(at_line)?;
            board = match board.current_player().make_move(&mv) {
                MoveTransition::Done(next) => next,
                rejected => {
                    return Err(at_line(XiangqiError::RejectedMove {
                        notation: notation.to_string(),
                        status: rejected.status().to_string(),
                    }))
                }
            };
            record.moves.push(mv);
            record.notations.push(notation.to_string());
        }

        Ok((record, board))
    }

    /// Board after every move of the record
    pub fn final_board(&self) -> XiangqiResult<Board> {
        let mut board = Board::standard();
        for (mv, notation) in self.moves.iter().zip(&self.notations) {
            board = board
                .current_player()
                .make_move(mv)
                .into_board()
                .ok_or_else(|| XiangqiError::RejectedMove {
                    notation: notation.clone(),
                    status: "not playable".to_string(),
                })?;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alliance, Coordinate, PieceType};

    const CENTRAL_CANNON: &str = "C2.5\nh8+7\nH2+3\nr9.8\n";

    #[test]
    fn test_replay_and_write_back() {
        let (record, board) = GameRecord::replay_text(CENTRAL_CANNON).unwrap();
        assert_eq!(record.len(), 4);
        assert_eq!(record.to_text(), CENTRAL_CANNON);
        assert_eq!(board.turn(), Alliance::Red);
        assert_eq!(
            board.piece_at(Coordinate::at(7, 4)).map(|p| p.piece_type()),
            Some(PieceType::Cannon)
        );
        assert_eq!(record.final_board().unwrap(), board);
    }

    #[test]
    fn test_push_builds_same_text() {
        let mut board = Board::standard();
        let mut record = GameRecord::new();
        for notation in ["C2.5", "h8+7"] {
            let mv = decode(&board, notation).unwrap();
            record.push(&board, mv);
            board = board.current_player().make_move(&mv).into_board().unwrap();
        }
        assert_eq!(record.to_text(), "C2.5\nh8+7\n");
        assert_eq!(record.pop().map(|m| m.destination()), Some(Coordinate::at(2, 6)));
    }

    #[test]
    fn test_bad_line_rejects_whole_record() {
        let err = GameRecord::from_text("C2.5\nh8+7\nZZZZ\nr9.8\n").unwrap_err();
        match err {
            XiangqiError::RecordLine { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(*source, XiangqiError::MalformedNotation { .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_out_of_turn_move_rejected() {
        // second line is a red move although black is to play
        let err = GameRecord::from_text("C2.5\nH2+3\n").unwrap_err();
        assert!(matches!(err, XiangqiError::RecordLine { line: 2, .. }));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let record = GameRecord::from_text("\nC2.5\n\n").unwrap();
        assert_eq!(record.len(), 1);
    }
}
