//! Chariot move generation
//!
//! Orthogonal slide that stops at the first occupied square, capturing it when it holds an
//! enemy piece.

use super::push_target;
use crate::board::Squares;
use crate::constants::ORTHOGONAL_DIRS;
use crate::types::{Coordinate, Piece};

pub(super) fn generate(
    squares: &Squares,
    piece: &Piece,
    include_friendly: bool,
    out: &mut Vec<Coordinate>,
) {
    for (d_row, d_col) in ORTHOGONAL_DIRS {
        let mut current = piece.position();
        while let Some(next) = current.offset(d_row, d_col) {
            if squares[next.index()].is_some() {
                push_target(squares, piece, next, include_friendly, out);
                break;
            }
            out.push(next);
            current = next;
        }
    }
}
