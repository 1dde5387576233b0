//! Horse move generation
//!
//! A horse takes one orthogonal step and then one diagonal step outward. It is blocked only when
//! the orthogonal intermediate square (the "horse leg") is occupied; the landing square only
//! decides between a quiet move and a capture.

use super::{is_empty, push_target};
use crate::board::Squares;
use crate::constants::HORSE_JUMPS;
use crate::types::{Coordinate, Piece};

pub(super) fn generate(
    squares: &Squares,
    piece: &Piece,
    include_friendly: bool,
    out: &mut Vec<Coordinate>,
) {
    let from = piece.position();

    for ((leg_row, leg_col), (d_row, d_col)) in HORSE_JUMPS {
        let Some(leg) = from.offset(leg_row, leg_col) else {
            continue;
        };
        if !is_empty(squares, leg) {
            continue;
        }
        if let Some(destination) = from.offset(d_row, d_col) {
            push_target(squares, piece, destination, include_friendly, out);
        }
    }
}
