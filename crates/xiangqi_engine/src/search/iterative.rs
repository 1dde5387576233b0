//! Iterative deepening search
//!
//! Implements iterative deepening to enable time management and progressive search depth
//! increases. Each completed depth re-ranks the root moves by the values it found, reports the
//! current best move, and yields to the executor before the next depth starts.
//!
//! The clock is polled between root moves. Depth 1 is always searched to completion so there is
//! a move to return; a deeper iteration that runs past the deadline is discarded and the result
//! of the last completed depth stands.

use super::alphabeta::SearchContext;
use super::engine::SearchOutcome;
use crate::board::Board;
use crate::constants::{CHECKMATE_BONUS, MAX_DEPTH};
use futures_lite::future::yield_now;
use instant::Instant;
use std::time::Duration;
use tracing::debug;

impl SearchContext<'_> {
    /// Iterative deepening search
    pub(crate) async fn iterative_deepening<F>(
        &mut self,
        board: &mut Board,
        budget: Duration,
        mut on_depth: F,
    ) -> Option<SearchOutcome>
    where
        F: FnMut(&SearchOutcome),
    {
        let start = Instant::now();
        let deadline = start + budget;

        let mut moves = board.current_player().legal_moves().to_vec();
        self.orderer.order(&mut moves, None);

        let mut best: Option<SearchOutcome> = None;
        let last_depth = self.config.max_depth.clamp(1, MAX_DEPTH);

        for depth in 1..=last_depth {
            let pass_deadline = if depth > 1 {
                if Instant::now() >= deadline {
                    break;
                }
                Some(deadline)
            } else {
                None
            };

            let Some(pass) = self.root_pass(board, depth, &moves, pass_deadline) else {
                if depth > 1 {
                    debug!(depth, "iteration abandoned at deadline");
                }
                break;
            };

            moves = self.orderer.order_by_values(&pass.values);
            self.stats.completed_depth = depth;

            let outcome = SearchOutcome {
                best_move: pass.best_move,
                score: pass.score,
                depth,
                nodes: self.stats.nodes,
                elapsed: start.elapsed(),
                from_book: false,
            };
            debug!(
                depth,
                score = outcome.score,
                nodes = outcome.nodes,
                best = %outcome.best_move,
                "iteration complete"
            );
            on_depth(&outcome);

            let decisive = outcome.score.abs() >= CHECKMATE_BONUS;
            best = Some(outcome);
            if decisive {
                break;
            }

            yield_now().await;
        }

        best
    }
}
