//! Advisor move generation
//!
//! Advisors take one diagonal step and never leave the five palace points of their side.
//! The points are enumerated in [`crate::constants`] rather than derived from palace geometry.

use super::push_target;
use crate::board::Squares;
use crate::constants::DIAGONAL_DIRS;
use crate::types::{Coordinate, Piece};

pub(super) fn generate(
    squares: &Squares,
    piece: &Piece,
    include_friendly: bool,
    out: &mut Vec<Coordinate>,
) {
    let points = piece.alliance().advisor_points();

    for (d_row, d_col) in DIAGONAL_DIRS {
        if let Some(destination) = piece.position().offset(d_row, d_col) {
            if points.contains(&destination) {
                push_target(squares, piece, destination, include_friendly, out);
            }
        }
    }
}
