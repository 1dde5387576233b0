//! Zobrist hashing and transposition table
//!
//! Implements position hashing for fast position lookup and caching.
//!
//! ## Zobrist Keys
//!
//! One 64-bit key per (alliance, piece type, square) plus one side-to-move key. Keys are drawn
//! once from a fixed-seed generator, so hashes are stable across runs and threads. A board's
//! hash is the XOR of the keys of every piece on it, XORed with the side key when Black is to
//! move. The board maintains the hash incrementally on make/unmake; [`position_hash`] is the
//! full recomputation used on construction and in consistency tests.
//!
//! ## Transposition Table
//!
//! Buckets of [`TT_BUCKET_SLOTS`] entries indexed by the low bits of the key. Storing a
//! position that is already present updates it in place; otherwise the shallowest entry of the
//! bucket is replaced.

use crate::board::Squares;
use crate::constants::*;
use crate::moves::Move;
use crate::types::{Alliance, Piece};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

const ZOBRIST_SEED: u64 = 0x5851_F42D_4C95_7F2D;

/// Zobrist key set
pub struct ZobristKeys {
    pieces: [[[u64; NUM_SQUARES]; NUM_PIECE_TYPES]; 2],
    side: u64,
}

impl ZobristKeys {
    fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pieces = [[[0u64; NUM_SQUARES]; NUM_PIECE_TYPES]; 2];
        for alliance in pieces.iter_mut() {
            for piece_type in alliance.iter_mut() {
                for key in piece_type.iter_mut() {
                    *key = rng.random();
                }
            }
        }
        Self {
            pieces,
            side: rng.random(),
        }
    }

    #[inline]
    pub fn piece(&self, piece: &Piece) -> u64 {
        self.pieces[piece.alliance().index()][piece.piece_type().index()][piece.position().index()]
    }

    /// Key XORed in while Black is to move
    #[inline]
    pub fn side(&self) -> u64 {
        self.side
    }
}

static KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// Process-wide key set
pub fn zobrist_keys() -> &'static ZobristKeys {
    KEYS.get_or_init(|| ZobristKeys::generate(ZOBRIST_SEED))
}

/// Full hash of a placement and side to move
pub fn position_hash(squares: &Squares, turn: Alliance) -> u64 {
    let keys = zobrist_keys();
    let mut hash = squares
        .iter()
        .flatten()
        .fold(0u64, |acc, piece| acc ^ keys.piece(piece));
    if turn == Alliance::Black {
        hash ^= keys.side();
    }
    hash
}

/// How a stored score relates to the true value
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Fail-high: the true value is at least `score`
    Lower,
    /// Fail-low: the true value is at most `score`
    Upper,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

impl TtEntry {
    /// Score usable at `depth` inside the `(alpha, beta)` window, if any
    pub fn cutoff(&self, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        if self.depth < depth {
            return None;
        }
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

type Bucket = [Option<TtEntry>; TT_BUCKET_SLOTS];

/// Fixed-size transposition table
pub struct TranspositionTable {
    buckets: Vec<Bucket>,
}

impl TranspositionTable {
    /// Table holding roughly `entries` positions
    pub fn new(entries: usize) -> Self {
        let bucket_count = (entries / TT_BUCKET_SLOTS).max(1).next_power_of_two();
        Self {
            buckets: vec![[None; TT_BUCKET_SLOTS]; bucket_count],
        }
    }

    #[inline]
    fn bucket_index(&self, key: u64) -> usize {
        (key as usize) & (self.buckets.len() - 1)
    }

    /// Probe transposition table (returns copy to avoid borrow issues)
    pub fn probe(&self, key: u64) -> Option<TtEntry> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .flatten()
            .find(|entry| entry.key == key)
            .copied()
    }

    /// Store position in transposition table
    pub fn store(&mut self, entry: TtEntry) {
        let index = self.bucket_index(entry.key);
        let bucket = &mut self.buckets[index];

        let mut slot = 0;
        let mut shallowest = u16::MAX;
        for (i, existing) in bucket.iter().enumerate() {
            match existing {
                Some(existing) if existing.key == entry.key => {
                    slot = i;
                    break;
                }
                Some(existing) => {
                    if u16::from(existing.depth) < shallowest {
                        shallowest = u16::from(existing.depth);
                        slot = i;
                    }
                }
                None => {
                    slot = i;
                    shallowest = 0;
                }
            }
        }

        bucket[slot] = Some(entry);
    }

    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = [None; TT_BUCKET_SLOTS];
        }
    }

    /// Number of entry slots
    pub fn capacity(&self) -> usize {
        self.buckets.len() * TT_BUCKET_SLOTS
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_keys_are_stable() {
        let a = ZobristKeys::generate(ZOBRIST_SEED);
        let b = zobrist_keys();
        assert_eq!(a.side(), b.side());
        assert_ne!(a.side(), 0);
    }

    #[test]
    fn test_side_to_move_changes_hash() {
        let board = Board::standard();
        assert_ne!(
            position_hash(board.squares(), Alliance::Red),
            position_hash(board.squares(), Alliance::Black)
        );
    }

    #[test]
    fn test_store_and_probe() {
        let mut table = TranspositionTable::new(64);
        let entry = TtEntry {
            key: 0xDEAD_BEEF,
            depth: 3,
            score: 42,
            bound: Bound::Exact,
            best_move: None,
        };
        table.store(entry);
        assert_eq!(table.probe(0xDEAD_BEEF), Some(entry));
        assert_eq!(table.probe(0xBEEF), None);
    }

    #[test]
    fn test_same_key_updates_in_place() {
        let mut table = TranspositionTable::new(4);
        let mut entry = TtEntry {
            key: 7,
            depth: 1,
            score: 1,
            bound: Bound::Lower,
            best_move: None,
        };
        table.store(entry);
        entry.depth = 5;
        entry.score = 9;
        table.store(entry);
        assert_eq!(table.probe(7).map(|e| e.score), Some(9));
        assert_eq!(
            table.buckets[0].iter().flatten().filter(|e| e.key == 7).count(),
            1
        );
    }

    #[test]
    fn test_shallowest_entry_is_replaced() {
        let mut table = TranspositionTable::new(TT_BUCKET_SLOTS);
        let stride = table.buckets.len() as u64;
        for (i, depth) in [4u8, 1, 6, 3].into_iter().enumerate() {
            table.store(TtEntry {
                key: i as u64 * stride,
                depth,
                score: 0,
                bound: Bound::Exact,
                best_move: None,
            });
        }
        table.store(TtEntry {
            key: 99 * stride,
            depth: 2,
            score: 0,
            bound: Bound::Exact,
            best_move: None,
        });
        assert!(table.probe(stride).is_none(), "depth 1 entry evicted");
        assert!(table.probe(99 * stride).is_some());
    }

    #[test]
    fn test_cutoff_respects_bounds() {
        let entry = TtEntry {
            key: 1,
            depth: 4,
            score: 50,
            bound: Bound::Lower,
            best_move: None,
        };
        assert_eq!(entry.cutoff(4, 0, 40), Some(50));
        assert_eq!(entry.cutoff(4, 0, 60), None);
        assert_eq!(entry.cutoff(5, 0, 40), None, "too shallow");
    }
}
