//! Material, mobility and cohesion terms
//!
//! Every function here scores one side only; the caller subtracts Black from Red.

use super::pst::position_value;
use crate::board::Board;
use crate::constants::*;
use crate::types::{Alliance, GamePhase, PieceType};

/// Sum of phase-dependent piece values
pub(super) fn material(board: &Board, alliance: Alliance, phase: GamePhase) -> i32 {
    board
        .player(alliance)
        .active_pieces()
        .iter()
        .map(|p| p.material_value(phase))
        .sum()
}

/// Sum of piece-square values
pub(super) fn positional(board: &Board, alliance: Alliance, phase: GamePhase) -> i32 {
    board
        .player(alliance)
        .active_pieces()
        .iter()
        .map(|p| position_value(p, phase))
        .sum()
}

/// Candidate moves weighted by the moving piece's type
pub(super) fn mobility(board: &Board, alliance: Alliance) -> i32 {
    board
        .player(alliance)
        .legal_moves()
        .iter()
        .map(|mv| mv.moved_piece().piece_type().mobility_weight())
        .sum()
}

/// Structural adjustments for piece combinations
///
/// - cannon and horse together coordinate well: bonus
/// - fewer than two elephants against enemy cannons: penalty per missing elephant
/// - fewer than two advisors against two enemy chariots: penalty per missing advisor
pub(super) fn cohesion(board: &Board, alliance: Alliance) -> i32 {
    let enemy = alliance.opponent();
    let mut score = 0;

    if board.count(alliance, PieceType::Cannon) > 0 && board.count(alliance, PieceType::Horse) > 0 {
        score += CANNON_HORSE_BONUS;
    }

    let elephants = board.count(alliance, PieceType::Elephant) as i32;
    if elephants < 2 && board.count(enemy, PieceType::Cannon) > 0 {
        score -= (2 - elephants) * ELEPHANT_SCARCITY_PENALTY;
    }

    let advisors = board.count(alliance, PieceType::Advisor) as i32;
    if advisors < 2 && board.count(enemy, PieceType::Chariot) >= 2 {
        score -= (2 - advisors) * ADVISOR_SCARCITY_PENALTY;
    }

    score
}
