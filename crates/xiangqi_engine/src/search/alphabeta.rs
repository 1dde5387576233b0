//! Core alpha-beta search algorithm
//!
//! Negamax with fail-soft cutoffs: every node returns a score from the point of view of the
//! side to move, and children are searched with the negated, swapped window. A node may return
//! a score outside its window; only a null-move cutoff is clamped to `beta`. Recursion depth is
//! bounded by the configured maximum depth plus the quiescence extension.

use super::engine::SearchStats;
use super::make_unmake::{MoveGuard, NullMoveGuard};
use super::ordering::MoveOrderer;
use super::SearchConfig;
use crate::board::Board;
use crate::constants::*;
use crate::evaluation::Evaluator;
use crate::hash::{Bound, TranspositionTable, TtEntry};
use crate::moves::Move;
use instant::Instant;
use tracing::trace;

/// Everything a search pass reads or updates, borrowed from the engine
pub(crate) struct SearchContext<'e> {
    pub evaluator: &'e Evaluator,
    pub orderer: &'e MoveOrderer,
    pub config: &'e SearchConfig,
    pub table: &'e mut TranspositionTable,
    pub stats: &'e mut SearchStats,
}

/// Result of searching every root move once at a fixed depth
#[derive(Debug, Clone)]
pub(crate) struct RootPass {
    pub best_move: Move,
    pub score: i32,
    /// Value of each root move that reached `Done`, in search order
    pub values: Vec<(Move, i32)>,
}

impl SearchContext<'_> {
    /// Static score from the side to move's point of view
    pub(super) fn static_score(&mut self, board: &Board, depth: u8) -> i32 {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(board, depth) * board.turn().sign()
    }

    /// Search every root move to `depth`
    ///
    /// With a deadline, the clock is polled before each root move and the pass is abandoned
    /// (returning `None`) once it has expired. Also `None` when no root move is playable.
    pub(crate) fn root_pass(
        &mut self,
        board: &mut Board,
        depth: u8,
        moves: &[Move],
        deadline: Option<Instant>,
    ) -> Option<RootPass> {
        let depth = depth.max(1);
        let mut alpha = -SCORE_INF;
        let beta = SCORE_INF;
        let mut best: Option<(Move, i32)> = None;
        let mut values = Vec::with_capacity(moves.len());

        for &mv in moves {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return None;
            }

            let Some(mut child) = MoveGuard::enter(board, mv) else {
                continue;
            };
            let score = -self.negamax(child.board_mut(), depth - 1, -beta, -alpha, true);
            drop(child);

            values.push((mv, score));
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let (best_move, score) = best?;
        self.table.store(TtEntry {
            key: board.zobrist_key(),
            depth,
            score,
            bound: Bound::Exact,
            best_move: Some(best_move),
        });

        Some(RootPass {
            best_move,
            score,
            values,
        })
    }

    /// Negamax alpha-beta search
    pub(super) fn negamax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        allow_null: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if board.is_game_draw() {
            return DRAW_SCORE;
        }
        if depth == 0 {
            return if self.config.quiescence {
                self.quiescence(board, alpha, beta, 0)
            } else {
                self.static_score(board, 0)
            };
        }

        let key = board.zobrist_key();
        let mut hint = None;
        if let Some(entry) = self.table.probe(key) {
            hint = entry.best_move;
            if let Some(score) = entry.cutoff(depth, alpha, beta) {
                self.stats.table_hits += 1;
                return score;
            }
        }

        if allow_null && self.null_move_allowed(board, depth) {
            let reduced = depth.saturating_sub(1 + self.config.null_move_reduction);
            let score = {
                let mut passed = NullMoveGuard::new(board);
                -self.negamax(passed.board_mut(), reduced, -beta, -beta + 1, false)
            };
            if score >= beta {
                self.stats.null_cutoffs += 1;
                trace!(depth, score, beta, "null-move cutoff");
                return beta;
            }
        }

        let mut moves = board.current_player().legal_moves().to_vec();
        self.orderer.order(&mut moves, hint);

        let original_alpha = alpha;
        let mut best_score = -SCORE_INF;
        let mut best_move = None;

        for mv in moves {
            let Some(mut child) = MoveGuard::enter(board, mv) else {
                continue;
            };
            let score = -self.negamax(child.board_mut(), depth - 1, -beta, -alpha, true);
            drop(child);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // no candidate reached Done: the side to move is mated
        if best_move.is_none() {
            return self.static_score(board, depth);
        }

        let bound = if best_score >= beta {
            Bound::Lower
        } else if best_score <= original_alpha {
            Bound::Upper
        } else {
            Bound::Exact
        };
        self.table.store(TtEntry {
            key,
            depth,
            score: best_score,
            bound,
            best_move,
        });

        best_score
    }

    /// Passing is sound only out of check and with enough material to make it plausible
    fn null_move_allowed(&self, board: &Board, depth: u8) -> bool {
        self.config.null_move
            && depth > 1
            && !board.current_player().is_in_check()
            && board.attack_units(board.turn()) >= NULL_MOVE_MIN_ATTACK_UNITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinate, PieceType};

    fn context<'e>(
        evaluator: &'e Evaluator,
        orderer: &'e MoveOrderer,
        config: &'e SearchConfig,
        table: &'e mut TranspositionTable,
        stats: &'e mut SearchStats,
    ) -> SearchContext<'e> {
        SearchContext {
            evaluator,
            orderer,
            config,
            table,
            stats,
        }
    }

    #[test]
    fn test_depth_one_takes_free_chariot() {
        let mut board = Board::from_fen("3k5/9/9/9/r8/9/9/9/9/R3K4 w").unwrap();
        let original = board.clone();
        let config = SearchConfig::fixed_depth(1);
        let (evaluator, orderer) = (Evaluator::default(), MoveOrderer::new());
        let mut table = TranspositionTable::new(1024);
        let mut stats = SearchStats::default();
        let mut ctx = context(&evaluator, &orderer, &config, &mut table, &mut stats);

        let moves = board.current_player().legal_moves().to_vec();
        let pass = ctx.root_pass(&mut board, 1, &moves, None).unwrap();
        assert_eq!(pass.best_move.destination(), Coordinate::at(4, 0));
        assert_eq!(
            pass.best_move.captured_piece().map(|p| p.piece_type()),
            Some(PieceType::Chariot)
        );
        assert_eq!(board, original, "search leaves the board as it found it");
    }

    #[test]
    fn test_mated_side_has_no_root_move() {
        let mut board = Board::from_fen("3k5/8R/4R4/9/9/9/9/9/9/4K4 b").unwrap();
        let config = SearchConfig::fixed_depth(2);
        let (evaluator, orderer) = (Evaluator::default(), MoveOrderer::new());
        let mut table = TranspositionTable::new(1024);
        let mut stats = SearchStats::default();
        let mut ctx = context(&evaluator, &orderer, &config, &mut table, &mut stats);

        let moves = board.current_player().legal_moves().to_vec();
        assert!(ctx.root_pass(&mut board, 2, &moves, None).is_none());
    }

    #[test]
    fn test_expired_deadline_abandons_pass() {
        let mut board = Board::standard();
        let config = SearchConfig::fixed_depth(2);
        let (evaluator, orderer) = (Evaluator::default(), MoveOrderer::new());
        let mut table = TranspositionTable::new(1024);
        let mut stats = SearchStats::default();
        let mut ctx = context(&evaluator, &orderer, &config, &mut table, &mut stats);

        let moves = board.current_player().legal_moves().to_vec();
        let past = Instant::now();
        assert!(ctx.root_pass(&mut board, 2, &moves, Some(past)).is_none());
    }

    #[test]
    fn test_finds_mate_in_one() {
        // chariot (8,8) to (1,8) covers (1,3); (0,4) is covered from (2,4), black cannot move
        let mut board = Board::from_fen("3k5/9/4R4/9/9/9/9/9/8R/4K4 w").unwrap();
        let config = SearchConfig::fixed_depth(2);
        let (evaluator, orderer) = (Evaluator::default(), MoveOrderer::new());
        let mut table = TranspositionTable::new(1 << 12);
        let mut stats = SearchStats::default();
        let mut ctx = context(&evaluator, &orderer, &config, &mut table, &mut stats);

        let moves = board.current_player().legal_moves().to_vec();
        let pass = ctx.root_pass(&mut board, 2, &moves, None).unwrap();
        assert!(pass.score >= CHECKMATE_BONUS, "score {}", pass.score);
    }

    #[test]
    fn test_cutoff_score_can_exceed_beta() {
        let mut board = Board::from_fen("3k5/9/9/9/r8/9/9/9/9/R3K4 w").unwrap();
        let mut config = SearchConfig::fixed_depth(1);
        config.quiescence = false;
        let (evaluator, orderer) = (Evaluator::default(), MoveOrderer::new());
        let mut table = TranspositionTable::new(1024);
        let mut stats = SearchStats::default();
        let mut ctx = context(&evaluator, &orderer, &config, &mut table, &mut stats);

        let (alpha, beta) = (-1, 0);
        let score = ctx.negamax(&mut board, 1, alpha, beta, false);
        assert!(score > beta, "score {score}");
        assert!(stats.cutoffs > 0);
    }

    #[test]
    fn test_null_move_cuts_off_in_middle_game() {
        let mut board = Board::from_fen(
            "r1eakaeh1/4r4/1ch4c1/p1p1p3p/6p2/2P6/P3P1P1P/1CH1C1H2/9/1REAKAE1R w",
        )
        .unwrap();
        let mut config = SearchConfig::fixed_depth(4);
        config.null_move = true;
        let (evaluator, orderer) = (Evaluator::default(), MoveOrderer::new());
        let mut table = TranspositionTable::new(1 << 16);
        let mut stats = SearchStats::default();
        let mut ctx = context(&evaluator, &orderer, &config, &mut table, &mut stats);

        let mut moves = board.current_player().legal_moves().to_vec();
        orderer.order(&mut moves, None);
        assert!(ctx.root_pass(&mut board, 4, &moves, None).is_some());
        assert!(stats.null_cutoffs > 0);
    }

    #[test]
    fn test_null_move_keeps_tactical_result() {
        // black's chariot on (4,0) attacks red's on (9,0); red takes first
        let fen = "1h1k5/8r/9/9/r8/9/9/2H4C1/9/R3K4 w";
        let evaluator = Evaluator::default();
        let orderer = MoveOrderer::new();

        let mut results = Vec::new();
        for null_move in [true, false] {
            let mut board = Board::from_fen(fen).unwrap();
            let mut config = SearchConfig::fixed_depth(3);
            config.null_move = null_move;
            let mut table = TranspositionTable::new(1 << 12);
            let mut stats = SearchStats::default();
            let mut ctx = context(&evaluator, &orderer, &config, &mut table, &mut stats);

            let mut moves = board.current_player().legal_moves().to_vec();
            orderer.order(&mut moves, None);
            let pass = ctx.root_pass(&mut board, 3, &moves, None).unwrap();
            results.push((pass.best_move, pass.score));
        }

        assert_eq!(results[0], results[1]);
        assert_eq!(results[0].0.destination(), Coordinate::at(4, 0));
    }

    #[test]
    fn test_null_move_allowed() {
        let config = SearchConfig::fixed_depth(4);
        let (evaluator, orderer) = (Evaluator::default(), MoveOrderer::new());
        let mut table = TranspositionTable::new(16);
        let mut stats = SearchStats::default();
        let ctx = context(&evaluator, &orderer, &config, &mut table, &mut stats);

        let quiet = Board::from_fen("3k5/9/9/9/9/r8/9/2H4C1/9/R3K4 w").unwrap();
        assert!(ctx.null_move_allowed(&quiet, 3));
        assert!(!ctx.null_move_allowed(&quiet, 1));

        let checked = Board::from_fen("3k5/9/9/9/9/4r4/9/2H4C1/9/R3K4 w").unwrap();
        assert!(checked.current_player().is_in_check());
        assert!(!ctx.null_move_allowed(&checked, 3));

        let bare = Board::from_fen("3k5/9/9/9/9/r8/9/9/9/R3K4 w").unwrap();
        assert!(!ctx.null_move_allowed(&bare, 3));
    }
}
