//! Attack/defense relation scoring
//!
//! For every non-General piece that is attacked, estimate how much its side stands to lose from
//! the exchange on its square, given how many attackers and defenders reach it and the cheapest
//! of each. The estimate is a lookup on the attacker/defender counts rather than a full static
//! exchange evaluation:
//!
//! | attackers | defenders | loss                                                    |
//! |-----------|-----------|---------------------------------------------------------|
//! | any       | 0         | the piece's full value                                  |
//! | 1         | 1+        | value minus the attacker's value, if positive           |
//! | 2         | 1         | as above plus the defender lost on recapture            |
//! | 2         | 2+        | as for one attacker, if both attackers together are worth less than piece and defender |
//! | 3         | 1-2       | as for one attacker                                     |
//! | others    |           | not scored                                              |
//!
//! Losses of the side to move count little (it can still react); the single largest loss of the
//! side that just moved counts much more, since the mover will take it.

use crate::board::Board;
use crate::constants::{THREAT_ON_MOVER_DIVISOR, THREAT_ON_WAITER_DIVISOR};
use crate::move_gen::attackers_of;
use crate::types::{GamePhase, PieceType};

/// Expected loss for a piece worth `value`
///
/// `attackers` and `defenders` are the values of the pieces reaching the square, in any order.
pub fn exchange_loss(value: i32, attackers: &[i32], defenders: &[i32]) -> i32 {
    let Some(&cheapest_attacker) = attackers.iter().min() else {
        return 0;
    };
    let Some(&cheapest_defender) = defenders.iter().min() else {
        return value;
    };

    let single = (value - cheapest_attacker).max(0);
    match (attackers.len(), defenders.len()) {
        (1, _) => single,
        (2, 1) => (value - cheapest_attacker + cheapest_defender).clamp(0, value),
        (2, _) => {
            let total: i32 = attackers.iter().sum();
            if total < value + cheapest_defender {
                single
            } else {
                0
            }
        }
        (3, 1 | 2) => single,
        _ => 0,
    }
}

/// Relation term in Red-minus-Black terms
pub(super) fn relation_score(board: &Board, phase: GamePhase) -> i32 {
    let squares = board.squares();
    let mover = board.turn();

    let mut mover_losses = 0;
    let mut waiter_worst = 0;

    for piece in squares.iter().flatten() {
        if piece.piece_type() == PieceType::General {
            continue;
        }

        let attackers: Vec<i32> = attackers_of(squares, piece.position(), piece.alliance().opponent())
            .iter()
            .map(|p| p.material_value(phase))
            .collect();
        if attackers.is_empty() {
            continue;
        }
        let defenders: Vec<i32> = attackers_of(squares, piece.position(), piece.alliance())
            .iter()
            .map(|p| p.material_value(phase))
            .collect();

        let loss = exchange_loss(piece.material_value(phase), &attackers, &defenders);
        if piece.alliance() == mover {
            mover_losses += loss;
        } else {
            waiter_worst = waiter_worst.max(loss);
        }
    }

    let for_mover = waiter_worst / THREAT_ON_WAITER_DIVISOR - mover_losses / THREAT_ON_MOVER_DIVISOR;
    for_mover * mover.sign()
}
