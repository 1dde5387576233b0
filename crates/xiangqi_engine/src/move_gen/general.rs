//! General move generation
//!
//! ## General Movement Rules
//!
//! - One orthogonal step, confined to the 3x3 palace
//! - **Flying general**: when nothing stands between the two Generals on a file, each may capture
//!   the other directly. Generating this as a move is what makes "facing Generals" count as check.

use super::push_target;
use crate::board::Squares;
use crate::constants::ORTHOGONAL_DIRS;
use crate::types::{Coordinate, Piece, PieceType};

pub(super) fn generate(
    squares: &Squares,
    piece: &Piece,
    include_friendly: bool,
    out: &mut Vec<Coordinate>,
) {
    let from = piece.position();
    let alliance = piece.alliance();

    for (d_row, d_col) in ORTHOGONAL_DIRS {
        if let Some(destination) = from.offset(d_row, d_col) {
            if alliance.palace_contains(destination) {
                push_target(squares, piece, destination, include_friendly, out);
            }
        }
    }

    let mut current = from;
    while let Some(next) = current.offset(alliance.forward(), 0) {
        if let Some(occupant) = squares[next.index()] {
            if occupant.piece_type() == PieceType::General && occupant.alliance() != alliance {
                out.push(next);
            }
            break;
        }
        current = next;
    }
}
