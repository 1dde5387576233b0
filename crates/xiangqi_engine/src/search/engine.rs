//! Engine facade
//!
//! [`Engine`] owns the evaluator, move orderer, transposition table and statistics, and
//! optionally shares an opening book. Every search clones the caller's board once and mutates
//! the clone in place; the caller's board is never touched.

use super::alphabeta::SearchContext;
use super::config::{SearchConfig, SearchMode};
use super::ordering::MoveOrderer;
use crate::board::Board;
use crate::book::OpeningBook;
use crate::constants::MAX_DEPTH;
use crate::evaluation::Evaluator;
use crate::hash::TranspositionTable;
use crate::moves::Move;
use crate::{XiangqiError, XiangqiResult};
use instant::Instant;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Counters for the most recent search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub quiescence_nodes: u64,
    pub evaluations: u64,
    pub cutoffs: u64,
    pub null_cutoffs: u64,
    pub table_hits: u64,
    pub completed_depth: u8,
}

/// Best move found by a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Move,
    /// Score from the side to move's point of view
    pub score: i32,
    /// Deepest completed depth, 0 for a book move
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
    pub from_book: bool,
}

pub struct Engine {
    evaluator: Evaluator,
    orderer: MoveOrderer,
    config: SearchConfig,
    table: TranspositionTable,
    stats: SearchStats,
    book: Option<Arc<OpeningBook>>,
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            evaluator: Evaluator::default(),
            orderer: MoveOrderer::new(),
            table: TranspositionTable::new(config.tt_entries),
            stats: SearchStats::default(),
            book: None,
            config,
        }
    }

    pub fn with_book(mut self, book: Arc<OpeningBook>) -> Self {
        self.book = Some(book);
        self
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Statistics of the most recent search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Forget cached positions, e.g. between games
    pub fn clear(&mut self) {
        self.table.clear();
    }

    fn context(&mut self) -> SearchContext<'_> {
        SearchContext {
            evaluator: &self.evaluator,
            orderer: &self.orderer,
            config: &self.config,
            table: &mut self.table,
            stats: &mut self.stats,
        }
    }

    /// Single negamax pass to a constant depth
    ///
    /// From depth 3 on, root moves are first ranked by a depth-1 pass. Returns `None` when the
    /// side to move has no move that keeps its General safe.
    pub fn search_fixed_depth(&mut self, board: &Board, depth: u8) -> Option<SearchOutcome> {
        self.stats = SearchStats::default();
        let start = Instant::now();
        let depth = depth.clamp(1, MAX_DEPTH);
        let mut scratch = board.clone();

        let mut moves = scratch.current_player().legal_moves().to_vec();
        let mut ctx = self.context();
        ctx.orderer.order(&mut moves, None);
        if depth >= 3 {
            if let Some(shallow) = ctx.root_pass(&mut scratch, 1, &moves, None) {
                moves = ctx.orderer.order_by_values(&shallow.values);
            }
        }
        let pass = ctx.root_pass(&mut scratch, depth, &moves, None)?;

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
            "fixed-depth search complete"
        );
        Some(outcome)
    }

    /// Iterative deepening under a wall-clock budget
    ///
    /// `on_depth` receives the best move after every completed depth.
    pub async fn search_fixed_time<F>(
        &mut self,
        board: &Board,
        budget: Duration,
        on_depth: F,
    ) -> Option<SearchOutcome>
    where
        F: FnMut(&SearchOutcome),
    {
        self.stats = SearchStats::default();
        let mut scratch = board.clone();
        self.context()
            .iterative_deepening(&mut scratch, budget, on_depth)
            .await
    }

    /// A random book continuation for this exact position, if any
    pub fn book_move(&self, board: &Board) -> Option<Move> {
        let book = self.book.as_ref()?;
        book.pick(board, &mut rand::rng())
    }

    /// Book move if one exists, otherwise search as configured
    pub async fn best_move(&mut self, board: &Board) -> Option<SearchOutcome> {
        if self.config.use_book {
            if let Some(mv) = self.book_move(board) {
                info!(book_move = %mv, "opening book hit");
                return Some(SearchOutcome {
                    best_move: mv,
                    score: 0,
                    depth: 0,
                    nodes: 0,
                    elapsed: Duration::ZERO,
                    from_book: true,
                });
            }
        }

        match self.config.mode {
            SearchMode::FixedDepth { depth } => self.search_fixed_depth(board, depth),
            SearchMode::FixedTime { millis } => {
                self.search_fixed_time(board, Duration::from_millis(millis), |_| {})
                    .await
            }
        }
    }

    /// [`Engine::best_move`] for callers that treat a finished game as an error
    pub async fn search(&mut self, board: &Board) -> XiangqiResult<SearchOutcome> {
        self.best_move(board)
            .await
            .ok_or_else(|| XiangqiError::SearchError {
                message: format!("no move keeps the {} General safe", board.turn()),
            })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
