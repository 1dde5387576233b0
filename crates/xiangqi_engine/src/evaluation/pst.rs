//! Piece-square tables
//!
//! Tables are written from Red's point of view: index 0 is the far-left square of Black's back
//! rank, index 89 the far-right square of Red's. Black pieces look up the square rotated by 180
//! degrees. Values are positional deltas on top of material.
//!
//! Advisors and elephants only ever stand on their enumerated points, so their tables are the
//! same in every phase. Soldiers, horses, chariots, cannons and the General change with phase:
//! soldiers gain most in the end game, the central cannon matters most in the opening.

use crate::constants::NUM_SQUARES;
use crate::types::{Alliance, GamePhase, Piece, PieceType};

type Table = [i32; NUM_SQUARES];

#[rustfmt::skip]
const SOLDIER_MIDDLE: Table = [
     9,  9,  9, 11, 13, 11,  9,  9,  9,
    19, 24, 34, 42, 44, 42, 34, 24, 19,
    19, 24, 32, 37, 37, 37, 32, 24, 19,
    19, 23, 27, 29, 30, 29, 27, 23, 19,
    14, 18, 20, 27, 29, 27, 20, 18, 14,
     7,  0, 13,  0, 16,  0, 13,  0,  7,
     7,  0,  7,  0, 15,  0,  7,  0,  7,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const SOLDIER_END: Table = [
    10, 10, 15, 20, 25, 20, 15, 10, 10,
    25, 35, 45, 55, 60, 55, 45, 35, 25,
    25, 35, 45, 50, 50, 50, 45, 35, 25,
    20, 30, 35, 40, 40, 40, 35, 30, 20,
    15, 20, 25, 30, 30, 30, 25, 20, 15,
     5,  0, 10,  0, 12,  0, 10,  0,  5,
     5,  0,  5,  0, 10,  0,  5,  0,  5,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const ADVISOR: Table = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0, 18,  0, 18,  0,  0,  0,
     0,  0,  0,  0, 23,  0,  0,  0,  0,
     0,  0,  0, 20,  0, 20,  0,  0,  0,
];

#[rustfmt::skip]
const ELEPHANT: Table = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0, 20,  0,  0,  0, 20,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
    18,  0,  0,  0, 23,  0,  0,  0, 18,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0, 20,  0,  0,  0, 20,  0,  0,
];

#[rustfmt::skip]
const HORSE_MIDDLE: Table = [
     0,  0,  0,  6,  0,  6,  0,  0,  0,
     0,  6, 13,  7,  4,  7, 13,  6,  0,
     2,  8,  9, 13,  9, 13,  9,  8,  2,
     3, 18, 10, 17, 10, 17, 10, 18,  3,
     0, 10,  9, 13, 14, 13,  9, 10,  0,
     0,  8, 11, 12, 13, 12, 11,  8,  0,
     2,  4,  8,  5,  8,  5,  8,  4,  2,
     3,  2,  4,  5,  2,  5,  4,  2,  3,
    -5,  0,  2,  3,-12,  3,  2,  0, -5,
    -2, -5,  0, -2,  0, -2,  0, -5, -2,
];

#[rustfmt::skip]
const HORSE_END: Table = [
     2,  4,  6,  8,  8,  8,  6,  4,  2,
     4,  8, 12, 14, 14, 14, 12,  8,  4,
     6, 10, 14, 16, 16, 16, 14, 10,  6,
     6, 12, 14, 16, 16, 16, 14, 12,  6,
     4, 10, 12, 14, 14, 14, 12, 10,  4,
     2,  8, 10, 12, 12, 12, 10,  8,  2,
     0,  4,  6,  8,  8,  8,  6,  4,  0,
    -2,  2,  4,  4,  4,  4,  4,  2, -2,
    -6, -2,  0,  0, -6,  0,  0, -2, -6,
    -8, -6, -4, -4, -4, -4, -4, -6, -8,
];

#[rustfmt::skip]
const CHARIOT_OPENING: Table = [
     0,  2,  1,  7,  8,  7,  1,  2,  0,
     0,  6,  3, 10, 20, 10,  3,  6,  0,
     0,  2,  1,  8, 10,  8,  1,  2,  0,
     0,  8,  7, 12, 10, 12,  7,  8,  0,
     2,  8,  6, 10, 10, 10,  6,  8,  2,
     2,  8,  6, 10, 10, 10,  6,  8,  2,
     0,  4,  0,  8,  8,  8,  0,  4,  0,
    -6,  4,  0,  8,  6,  8,  0,  4, -6,
    -8,  4,  0,  6, -6,  6,  0,  4, -8,
   -16, -2, -4,  6, -6,  6, -4, -2,-16,
];

#[rustfmt::skip]
const CHARIOT_MIDDLE: Table = [
     0,  2,  1,  7,  8,  7,  1,  2,  0,
     0,  6,  3, 10, 27, 10,  3,  6,  0,
     0,  2,  1,  8, 10,  8,  1,  2,  0,
     0,  7,  7, 10, 10, 10,  7,  7,  0,
     2,  5,  5,  8,  9,  8,  5,  5,  2,
     2,  6,  6,  8,  9,  8,  6,  6,  2,
    -2,  3, -2,  6,  8,  6, -2,  3, -2,
    -8,  2, -2,  6,  6,  6, -2,  2, -8,
    -6,  2,  0,  6, -6,  6,  0,  2, -6,
   -12,  0, -2,  6, -6,  6, -2,  0,-12,
];

#[rustfmt::skip]
const CHARIOT_END: Table = [
     6,  8,  8, 10, 10, 10,  8,  8,  6,
     6, 10, 10, 12, 14, 12, 10, 10,  6,
     4,  8,  8, 10, 12, 10,  8,  8,  4,
     4,  8,  8, 10, 10, 10,  8,  8,  4,
     2,  6,  6,  8,  8,  8,  6,  6,  2,
     2,  6,  6,  8,  8,  8,  6,  6,  2,
     0,  4,  4,  6,  6,  6,  4,  4,  0,
     0,  2,  2,  4,  4,  4,  2,  2,  0,
    -2,  0,  0,  2,  2,  2,  0,  0, -2,
    -4, -2, -2,  0,  0,  0, -2, -2, -4,
];

#[rustfmt::skip]
const CANNON_OPENING: Table = [
     4,  4,  0, -5, -6, -5,  0,  4,  4,
     2,  2,  0, -4, -7, -4,  0,  2,  2,
     1,  1,  0, -5, -4, -5,  0,  1,  1,
     0,  3,  3,  2,  4,  2,  3,  3,  0,
     0,  0,  0,  0,  6,  0,  0,  0,  0,
    -1,  0,  3,  0,  6,  0,  3,  0, -1,
     0,  0,  0,  0,  2,  0,  0,  0,  0,
     1,  0,  4,  3, 10,  3,  4,  0,  1,
     0,  1,  2,  2,  2,  2,  2,  1,  0,
     0,  0,  1,  3,  3,  3,  1,  0,  0,
];

#[rustfmt::skip]
const CANNON_MIDDLE: Table = [
     4,  4,  0, -5, -6, -5,  0,  4,  4,
     2,  2,  0, -4, -7, -4,  0,  2,  2,
     1,  1,  0, -5, -4, -5,  0,  1,  1,
     0,  3,  3,  2,  4,  2,  3,  3,  0,
     0,  0,  0,  0,  4,  0,  0,  0,  0,
    -1,  0,  3,  0,  4,  0,  3,  0, -1,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     1,  0,  4,  3,  5,  3,  4,  0,  1,
     0,  1,  2,  2,  2,  2,  2,  1,  0,
     0,  0,  1,  3,  3,  3,  1,  0,  0,
];

#[rustfmt::skip]
const CANNON_END: Table = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  2,  0,  0,  0,  0,
     0,  2,  2,  2,  4,  2,  2,  2,  0,
     0,  0,  2,  2,  4,  2,  2,  0,  0,
     0,  0,  2,  2,  4,  2,  2,  0,  0,
     0,  0,  0,  2,  2,  2,  0,  0,  0,
     0,  0,  2,  2,  4,  2,  2,  0,  0,
     0,  0,  2,  4,  4,  4,  2,  0,  0,
     0,  0,  0,  2,  2,  2,  0,  0,  0,
];

#[rustfmt::skip]
const GENERAL_MIDDLE: Table = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  1,  1,  1,  0,  0,  0,
     0,  0,  0,  2,  2,  2,  0,  0,  0,
     0,  0,  0, 11, 15, 11,  0,  0,  0,
];

#[rustfmt::skip]
const GENERAL_END: Table = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  5,  8,  5,  0,  0,  0,
     0,  0,  0,  8, 12,  8,  0,  0,  0,
     0,  0,  0,  5,  8,  5,  0,  0,  0,
];

fn table(piece_type: PieceType, phase: GamePhase) -> &'static Table {
    use GamePhase::*;
    match (piece_type, phase) {
        (PieceType::Soldier, Opening | Middle) => &SOLDIER_MIDDLE,
        (PieceType::Soldier, End) => &SOLDIER_END,
        (PieceType::Advisor, _) => &ADVISOR,
        (PieceType::Elephant, _) => &ELEPHANT,
        (PieceType::Horse, Opening | Middle) => &HORSE_MIDDLE,
        (PieceType::Horse, End) => &HORSE_END,
        (PieceType::Chariot, Opening) => &CHARIOT_OPENING,
        (PieceType::Chariot, Middle) => &CHARIOT_MIDDLE,
        (PieceType::Chariot, End) => &CHARIOT_END,
        (PieceType::Cannon, Opening) => &CANNON_OPENING,
        (PieceType::Cannon, Middle) => &CANNON_MIDDLE,
        (PieceType::Cannon, End) => &CANNON_END,
        (PieceType::General, Opening | Middle) => &GENERAL_MIDDLE,
        (PieceType::General, End) => &GENERAL_END,
    }
}

/// Positional value of a piece in a given phase, from its own side's point of view
pub fn position_value(piece: &Piece, phase: GamePhase) -> i32 {
    let position = piece.position();
    let square = match piece.alliance() {
        Alliance::Red => position,
        Alliance::Black => position.flip().mirror(),
    };
    table(piece.piece_type(), phase)[square.index()]
}
