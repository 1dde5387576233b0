//! Full position evaluation
//!
//! Evaluates positions using material, piece-square tables, mobility, cohesion, checkmate and
//! attack/defense relations. The phase is classified once per call and every term uses it.

use super::material::{cohesion, material, mobility, positional};
use super::relation::relation_score;
use crate::board::Board;
use crate::constants::{CHECKMATE_BONUS, DRAW_SCORE};
use crate::types::{Alliance, GamePhase};
use serde::{Deserialize, Serialize};

/// Static evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evaluator {
    /// Score threatened and under-defended pieces
    pub relations: bool,
    /// Score weighted candidate-move counts
    pub mobility: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            relations: true,
            mobility: true,
        }
    }
}

/// Evaluation split into its terms, each Red minus Black
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub phase: GamePhase,
    pub material: i32,
    pub positional: i32,
    pub mobility: i32,
    pub cohesion: i32,
    pub checkmate: i32,
    pub relations: i32,
}

impl EvalBreakdown {
    pub fn total(&self) -> i32 {
        self.material + self.positional + self.mobility + self.cohesion + self.checkmate + self.relations
    }
}

impl Evaluator {
    /// Evaluate full position, Red minus Black
    ///
    /// `depth` is the remaining search depth at this node and only scales the checkmate term.
    /// Boards drawn by lack of attacking material score [`DRAW_SCORE`].
    pub fn evaluate(&self, board: &Board, depth: u8) -> i32 {
        if board.is_game_draw() {
            return DRAW_SCORE;
        }
        self.breakdown(board, depth).total()
    }

    pub fn breakdown(&self, board: &Board, depth: u8) -> EvalBreakdown {
        let phase = board.status();
        let checkmate = if board.has_escape(board.turn()) {
            0
        } else {
            -board.turn().sign() * CHECKMATE_BONUS * (i32::from(depth) + 1)
        };

        EvalBreakdown {
            phase,
            material: red_minus_black(|a| material(board, a, phase)),
            positional: red_minus_black(|a| positional(board, a, phase)),
            mobility: if self.mobility {
                red_minus_black(|a| mobility(board, a))
            } else {
                0
            },
            cohesion: red_minus_black(|a| cohesion(board, a)),
            checkmate,
            relations: if self.relations {
                relation_score(board, phase)
            } else {
                0
            },
        }
    }
}

fn red_minus_black(term: impl Fn(Alliance) -> i32) -> i32 {
    term(Alliance::Red) - term(Alliance::Black)
}
