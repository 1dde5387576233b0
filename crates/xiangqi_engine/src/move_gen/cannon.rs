//! Cannon move generation
//!
//! ## Cannon Movement Rules
//!
//! - **Quiet moves**: orthogonal slide across empty squares, like a chariot
//! - **Captures**: jump exactly one intervening piece (the "screen", of either side) and capture
//!   the first piece beyond it if it is an enemy
//!
//! Squares beyond the screen that are empty are never destinations.

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
        let mut screened = false;

        while let Some(next) = current.offset(d_row, d_col) {
            current = next;
            let occupied = squares[next.index()].is_some();

            if !screened {
                if occupied {
                    screened = true;
                } else {
                    out.push(next);
                }
            } else if occupied {
                push_target(squares, piece, next, include_friendly, out);
                break;
            }
        }
    }
}
