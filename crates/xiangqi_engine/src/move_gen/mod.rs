//! Per-piece move generation
//!
//! Each piece variant has its own generator module. Generators append destination squares for
//! one piece given the current occupancy; they know nothing about check. Whether a move leaves
//! the mover's own General attacked is decided one ply later by the board
//! (see [`crate::board::Board::is_state_allowed`]).
//!
//! ## Targets
//!
//! Every generator takes an `include_friendly` flag:
//! - `false` - move generation: squares held by friendly pieces are excluded
//! - `true` - reach/protection: squares held by friendly pieces are included, which is what
//!   the evaluator needs to count defenders of a square
//!
//! ## Module Organization
//!
//! - `soldier`, `advisor`, `elephant`, `horse`, `cannon`, `chariot`, `general` - one rule each
//! - `attack` - attack detection and General lookup

mod advisor;
mod attack;
mod cannon;
mod chariot;
mod elephant;
mod general;
mod horse;
mod soldier;

pub use attack::{attackers_of, find_general, is_square_attacked};

use crate::board::Squares;
use crate::types::{Coordinate, Piece, PieceType};

/// Append the destinations of `piece` (friendly-occupied squares excluded)
pub(crate) fn piece_destinations(squares: &Squares, piece: &Piece, out: &mut Vec<Coordinate>) {
    generate(squares, piece, false, out);
}

/// Append every square `piece` reaches, including squares held by its own side
pub(crate) fn piece_reach(squares: &Squares, piece: &Piece, out: &mut Vec<Coordinate>) {
    generate(squares, piece, true, out);
}

fn generate(squares: &Squares, piece: &Piece, include_friendly: bool, out: &mut Vec<Coordinate>) {
    match piece.piece_type() {
        PieceType::Soldier => soldier::generate(squares, piece, include_friendly, out),
        PieceType::Advisor => advisor::generate(squares, piece, include_friendly, out),
        PieceType::Elephant => elephant::generate(squares, piece, include_friendly, out),
        PieceType::Horse => horse::generate(squares, piece, include_friendly, out),
        PieceType::Cannon => cannon::generate(squares, piece, include_friendly, out),
        PieceType::Chariot => chariot::generate(squares, piece, include_friendly, out),
        PieceType::General => general::generate(squares, piece, include_friendly, out),
    }
}

/// Push `destination` unless it holds a friendly piece (and friendly squares are excluded)
#[inline]
fn push_target(
    squares: &Squares,
    piece: &Piece,
    destination: Coordinate,
    include_friendly: bool,
    out: &mut Vec<Coordinate>,
) {
    match squares[destination.index()] {
        Some(occupant) if occupant.alliance() == piece.alliance() && !include_friendly => {}
        _ => out.push(destination),
    }
}

#[inline]
fn is_empty(squares: &Squares, coordinate: Coordinate) -> bool {
    squares[coordinate.index()].is_none()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::board::Board;
    use crate::types::{Coordinate, PieceType};

    /// Sorted destinations of the piece on `from`
    pub fn destinations_from(fen: &str, from: (i8, i8)) -> Vec<(i8, i8)> {
        let board = Board::from_fen(fen).unwrap();
        let piece = board
            .piece_at(Coordinate::at(from.0, from.1))
            .expect("no piece on the requested square");
        let mut result: Vec<_> = piece
            .legal_destinations(&board)
            .into_iter()
            .map(|c| (c.row(), c.col()))
            .collect();
        result.sort();
        result
    }

    pub fn piece_type_at(fen: &str, at: (i8, i8)) -> Option<PieceType> {
        let board = Board::from_fen(fen).unwrap();
        board
            .piece_at(Coordinate::at(at.0, at.1))
            .map(|p| p.piece_type())
    }
}
