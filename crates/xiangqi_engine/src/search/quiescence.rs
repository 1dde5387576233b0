//! Quiescence search to avoid horizon effect
//!
//! Below the main search horizon only captures are searched, so a leaf is never scored in the
//! middle of an exchange. The side to move may always "stand pat" on the static score instead of
//! capturing. The extension is capped at the configured quiescence depth.

use super::alphabeta::SearchContext;
use super::make_unmake::MoveGuard;
use crate::board::Board;
use crate::moves::Move;

impl SearchContext<'_> {
    pub(super) fn quiescence(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        beta: i32,
        qs_depth: u8,
    ) -> i32 {
        self.stats.nodes += 1;
        self.stats.quiescence_nodes += 1;

        let stand_pat = self.static_score(board, 0);
        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);
        if qs_depth >= self.config.quiescence_depth {
            return alpha;
        }

        let mut captures: Vec<Move> = board
            .current_player()
            .legal_moves()
            .iter()
            .copied()
            .filter(Move::is_capture)
            .collect();
        if captures.is_empty() {
            return alpha;
        }
        self.orderer.order(&mut captures, None);

        for mv in captures {
            let Some(mut child) = MoveGuard::enter(board, mv) else {
                continue;
            };
            let score = -self.quiescence(child.board_mut(), -beta, -alpha, qs_depth + 1);
            drop(child);

            if score >= beta {
                self.stats.cutoffs += 1;
                return beta;
            }
            alpha = alpha.max(score);
        }

        alpha
    }
}
