//! Soldier move generation
//!
//! ## Soldier Movement Rules
//!
//! - **Before the river**: one step straight forward only
//! - **After the river**: one step forward, left or right
//! - **Never backwards**, and soldiers do not promote

use super::push_target;
use crate::board::Squares;
use crate::types::{Coordinate, Piece};

pub(super) fn generate(
    squares: &Squares,
    piece: &Piece,
    include_friendly: bool,
    out: &mut Vec<Coordinate>,
) {
    let from = piece.position();
    let alliance = piece.alliance();

    if let Some(ahead) = from.offset(alliance.forward(), 0) {
        push_target(squares, piece, ahead, include_friendly, out);
    }

    if alliance.has_crossed_river(from.row()) {
        for d_col in [-1, 1] {
            if let Some(side) = from.offset(0, d_col) {
                push_target(squares, piece, side, include_friendly, out);
            }
        }
    }
}
