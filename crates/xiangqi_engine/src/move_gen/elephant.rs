//! Elephant move generation
//!
//! ## Elephant Movement Rules
//!
//! - Two steps diagonally, landing on one of the seven points of its own side
//! - Blocked when the intermediate diagonal square (the "elephant eye") is occupied
//! - Cannot cross the river, which the point set enforces

use super::{is_empty, push_target};
use crate::board::Squares;
use crate::constants::DIAGONAL_DIRS;
use crate::types::{Coordinate, Piece};

pub(super) fn generate(
    squares: &Squares,
    piece: &Piece,
    include_friendly: bool,
    out: &mut Vec<Coordinate>,
) {
    let from = piece.position();
    let points = piece.alliance().elephant_points();

    for (d_row, d_col) in DIAGONAL_DIRS {
        let Some(eye) = from.offset(d_row, d_col) else {
            continue;
        };
        let Some(destination) = from.offset(2 * d_row, 2 * d_col) else {
            continue;
        };
        if is_empty(squares, eye) && points.contains(&destination) {
            push_target(squares, piece, destination, include_friendly, out);
        }
    }
}
