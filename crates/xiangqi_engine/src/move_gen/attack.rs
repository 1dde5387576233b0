//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and to list the pieces that reach a
//! square. These operate on a raw square array so the board can test a tentative placement
//! without going through a full make/unmake.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through the pieces of the attacking side and
//! ask each piece's own generator whether it reaches the square. Xiangqi pieces capture the same
//! way they move (the cannon's screen rule is part of its generator), so no separate attack
//! tables are needed.

use super::piece_reach;
use crate::board::Squares;
use crate::types::{Alliance, Coordinate, Piece, PieceType};

/// Check if `square` is reached by any piece of `by`
pub fn is_square_attacked(squares: &Squares, square: Coordinate, by: Alliance) -> bool {
    let mut reach = Vec::with_capacity(17);

    for piece in squares.iter().flatten() {
        if piece.alliance() != by {
            continue;
        }
        reach.clear();
        piece_reach(squares, piece, &mut reach);
        if reach.contains(&square) {
            return true;
        }
    }

    false
}

/// All pieces of `by` that reach `square`
///
/// Used by the evaluator for both sides of an exchange: with `by` set to the opponent of the
/// piece standing on `square` the result is its attackers, with `by` set to its own side the
/// result is its defenders.
pub fn attackers_of(squares: &Squares, square: Coordinate, by: Alliance) -> Vec<Piece> {
    let mut reach = Vec::with_capacity(17);
    let mut result = Vec::new();

    for piece in squares.iter().flatten() {
        if piece.alliance() != by || piece.position() == square {
            continue;
        }
        reach.clear();
        piece_reach(squares, piece, &mut reach);
        if reach.contains(&square) {
            result.push(*piece);
        }
    }

    result
}

/// Find the General of a side
pub fn find_general(squares: &Squares, alliance: Alliance) -> Option<Coordinate> {
    squares
        .iter()
        .flatten()
        .find(|p| p.piece_type() == PieceType::General && p.alliance() == alliance)
        .map(|p| p.position())
}
