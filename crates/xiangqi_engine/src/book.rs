//! Opening book
//!
//! Maps an exact position (full placement and side to move) to the moves that were played from
//! it. Every insertion also inserts the left-right mirror of the position and move, so a book
//! built from games opening on one wing answers the same opening on the other wing.
//!
//! The book is built once and then shared read-only, typically behind an `Arc`.

use crate::board::{Board, Squares};
use crate::moves::Move;
use crate::record::GameRecord;
use crate::types::Alliance;
use crate::{XiangqiError, XiangqiResult};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

type BookKey = (Squares, Alliance);

fn key_of(board: &Board) -> BookKey {
    (*board.squares(), board.turn())
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<BookKey, Vec<Move>>,
}

impl OpeningBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, key: BookKey, mv: Move) {
        let moves = self.entries.entry(key).or_default();
        if !moves.contains(&mv) {
            moves.push(mv);
        }
    }

    /// Record `mv` as a continuation from `board`, along with the mirrored pair
    pub fn insert(&mut self, board: &Board, mv: Move) {
        self.add(key_of(board), mv);
        self.add(key_of(&board.mirror()), mv.mirror());
    }

    /// Add the first `max_plies` moves of a record
    pub fn add_record(&mut self, record: &GameRecord, max_plies: usize) -> XiangqiResult<()> {
        let mut board = Board::standard();
        for mv in record.moves().iter().take(max_plies) {
            self.insert(&board, *mv);
            board = board
                .current_player()
                .make_move(mv)
                .into_board()
                .ok_or_else(|| XiangqiError::RejectedMove {
                    notation: mv.to_string(),
                    status: "not playable in sequence".to_string(),
                })?;
        }
        Ok(())
    }

    /// Build a book from record texts; one bad record fails the build
    pub fn from_texts<'a>(
        texts: impl IntoIterator<Item = &'a str>,
        max_plies: usize,
    ) -> XiangqiResult<Self> {
        let mut book = Self::new();
        for text in texts {
            let record = GameRecord::from_text(text)?;
            book.add_record(&record, max_plies)?;
        }
        Ok(book)
    }

    /// Every book continuation for this exact position
    pub fn candidates(&self, board: &Board) -> &[Move] {
        self.entries
            .get(&key_of(board))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// A uniformly random continuation
    pub fn pick<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Move> {
        self.candidates(board).choose(rng).copied()
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mirror_entry_is_added() {
        let board = Board::standard();
        let record = GameRecord::from_text("C2.5\n").unwrap();
        let mut book = OpeningBook::new();
        book.add_record(&record, 1).unwrap();

        // the opening is symmetric, so the mirrored cannon move lands on the same position
        let candidates = book.candidates(&board);
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().any(|m| m.origin() == Coordinate::at(7, 7)));
        assert!(candidates.iter().any(|m| m.origin() == Coordinate::at(7, 1)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_unknown_position_has_no_candidates() {
        let book = OpeningBook::new();
        let board = Board::standard();
        assert!(book.candidates(&board).is_empty());
        assert!(book.pick(&board, &mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn test_pick_returns_a_candidate() {
        let book = OpeningBook::from_texts(["C2.5\nh8+7\n", "H2+3\n"], 8).unwrap();
        let board = Board::standard();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mv = book.pick(&board, &mut rng).unwrap();
            assert!(book.candidates(&board).contains(&mv));
        }
        assert_eq!(book.candidates(&board).len(), 4);
    }

    #[test]
    fn test_bad_record_fails_build() {
        assert!(OpeningBook::from_texts(["C2.5\n???\n"], 8).is_err());
    }
}
