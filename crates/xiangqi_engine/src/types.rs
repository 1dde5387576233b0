//! # Core Value Types
//!
//! The engine is built from small immutable values:
//!
//! - [`Alliance`] - one of the two sides, Red or Black
//! - [`PieceType`] - the seven Xiangqi piece variants
//! - [`Coordinate`] - a `(row, col)` square on the 10x9 grid
//! - [`Piece`] - a typed, allied piece standing on a coordinate
//! - [`GamePhase`] - opening / middle / end classification used by evaluation
//!
//! All of them are `Copy`. Moving a piece never mutates it: [`Piece::move_to`] returns a new
//! piece at the destination, so moves kept in a game log stay valid after the board changes.
//!
//! ## Orientation
//!
//! Row 0 is Black's back rank, row 9 is Red's. Red's "forward" is therefore `-1` in row terms
//! and Black's is `+1` (see [`Alliance::forward`]). Columns run 0..9 left to right from Red's
//! point of view.

use crate::board::Board;
use crate::constants::*;
use crate::move_gen;
use crate::{XiangqiError, XiangqiResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Alliance {
    Red,
    Black,
}

impl Alliance {
    pub const ALL: [Alliance; 2] = [Alliance::Red, Alliance::Black];

    #[inline]
    pub fn opponent(self) -> Alliance {
        match self {
            Alliance::Red => Alliance::Black,
            Alliance::Black => Alliance::Red,
        }
    }

    /// Row delta of one step towards the opponent
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Alliance::Red => -1,
            Alliance::Black => 1,
        }
    }

    /// Sign applied to Red-minus-Black scores for negamax
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Alliance::Red => 1,
            Alliance::Black => -1,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether `row` lies on the opponent's side of the river
    #[inline]
    pub fn has_crossed_river(self, row: i8) -> bool {
        match self {
            Alliance::Red => row <= BLACK_RIVER_ROW,
            Alliance::Black => row >= RED_RIVER_ROW,
        }
    }

    pub fn palace_contains(self, coordinate: Coordinate) -> bool {
        let (top, bottom) = match self {
            Alliance::Red => RED_PALACE_ROWS,
            Alliance::Black => BLACK_PALACE_ROWS,
        };
        (top..=bottom).contains(&coordinate.row())
            && (PALACE_COLS.0..=PALACE_COLS.1).contains(&coordinate.col())
    }

    pub fn advisor_points(self) -> &'static [Coordinate; 5] {
        match self {
            Alliance::Red => &RED_ADVISOR_POINTS,
            Alliance::Black => &BLACK_ADVISOR_POINTS,
        }
    }

    pub fn elephant_points(self) -> &'static [Coordinate; 7] {
        match self {
            Alliance::Red => &RED_ELEPHANT_POINTS,
            Alliance::Black => &BLACK_ELEPHANT_POINTS,
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::Red => write!(f, "Red"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

/// The seven piece variants
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    Soldier,
    Advisor,
    Elephant,
    Horse,
    Cannon,
    Chariot,
    General,
}

impl PieceType {
    pub const ALL: [PieceType; NUM_PIECE_TYPES] = [
        PieceType::Soldier,
        PieceType::Advisor,
        PieceType::Elephant,
        PieceType::Horse,
        PieceType::Cannon,
        PieceType::Chariot,
        PieceType::General,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pieces that can cross the river and deliver mate on their own
    pub fn is_attacking(self) -> bool {
        matches!(
            self,
            PieceType::Soldier | PieceType::Horse | PieceType::Cannon | PieceType::Chariot
        )
    }

    /// Weight used by phase classification
    pub fn attack_units(self) -> i32 {
        match self {
            PieceType::Chariot => CHARIOT_ATTACK_UNITS,
            PieceType::Horse => HORSE_ATTACK_UNITS,
            PieceType::Cannon => CANNON_ATTACK_UNITS,
            _ => 0,
        }
    }

    pub fn material_value(self, phase: GamePhase) -> i32 {
        let table = match self {
            PieceType::Soldier => &SOLDIER_VALUE,
            PieceType::Advisor => &ADVISOR_VALUE,
            PieceType::Elephant => &ELEPHANT_VALUE,
            PieceType::Horse => &HORSE_VALUE,
            PieceType::Cannon => &CANNON_VALUE,
            PieceType::Chariot => &CHARIOT_VALUE,
            PieceType::General => &GENERAL_VALUE,
        };
        table[phase.index()]
    }

    pub fn move_priority(self) -> i32 {
        MOVE_PRIORITY[self.index()]
    }

    pub fn mobility_weight(self) -> i32 {
        MOBILITY_WEIGHT[self.index()]
    }

    /// Uppercase letter used by FEN and compact notation
    pub fn letter(self) -> char {
        match self {
            PieceType::Soldier => 'P',
            PieceType::Advisor => 'A',
            PieceType::Elephant => 'E',
            PieceType::Horse => 'H',
            PieceType::Cannon => 'C',
            PieceType::Chariot => 'R',
            PieceType::General => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<PieceType> {
        let piece_type = match letter.to_ascii_uppercase() {
            'P' => PieceType::Soldier,
            'A' => PieceType::Advisor,
            'E' => PieceType::Elephant,
            'H' => PieceType::Horse,
            'C' => PieceType::Cannon,
            'R' => PieceType::Chariot,
            'K' => PieceType::General,
            _ => return None,
        };
        Some(piece_type)
    }

    /// Pieces whose moves never stay on their file; notation names their destination file
    pub fn moves_diagonally(self) -> bool {
        matches!(
            self,
            PieceType::Advisor | PieceType::Elephant | PieceType::Horse
        )
    }
}

/// Game phase, selecting material and position tables
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Opening,
    Middle,
    End,
}

impl GamePhase {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A square on the board
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: i8,
    col: i8,
}

impl Coordinate {
    /// Constructor for constant tables and literals
    ///
    /// # Panics
    ///
    /// Panics if the square is off the board; use [`Coordinate::new`] or `try_from` for input.
    pub const fn at(row: i8, col: i8) -> Self {
        assert!(row >= 0 && row < NUM_ROWS && col >= 0 && col < NUM_COLS);
        Self { row, col }
    }

    pub fn new(row: i8, col: i8) -> Option<Self> {
        if (0..NUM_ROWS).contains(&row) && (0..NUM_COLS).contains(&col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_SQUARES {
            return None;
        }
        Some(Self {
            row: (index / NUM_COLS as usize) as i8,
            col: (index % NUM_COLS as usize) as i8,
        })
    }

    #[inline]
    pub fn row(&self) -> i8 {
        self.row
    }

    #[inline]
    pub fn col(&self) -> i8 {
        self.col
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.row as usize * NUM_COLS as usize + self.col as usize
    }

    /// Shift by a move vector, `None` when leaving the board
    #[inline]
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Left-right reflection
    pub fn mirror(&self) -> Self {
        Self {
            row: self.row,
            col: NUM_COLS - 1 - self.col,
        }
    }

    /// The same square seen from the other side of the board
    pub fn flip(&self) -> Self {
        Self {
            row: NUM_ROWS - 1 - self.row,
            col: self.col,
        }
    }
}

impl TryFrom<(i8, i8)> for Coordinate {
    type Error = XiangqiError;

    fn try_from((row, col): (i8, i8)) -> XiangqiResult<Self> {
        Self::new(row, col).ok_or(XiangqiError::InvalidCoordinate { row, col })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A piece standing on the board
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    piece_type: PieceType,
    alliance: Alliance,
    position: Coordinate,
}

impl Piece {
    pub fn new(piece_type: PieceType, alliance: Alliance, position: Coordinate) -> Self {
        Self {
            piece_type,
            alliance,
            position,
        }
    }

    #[inline]
    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    #[inline]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Destinations allowed by this piece's own movement rule
    ///
    /// Friendly-occupied squares are excluded; whether the move leaves the own General
    /// attacked is not considered here (see [`crate::player::Player::make_move`]).
    pub fn legal_destinations(&self, board: &Board) -> Vec<Coordinate> {
        let mut destinations = Vec::with_capacity(17);
        move_gen::piece_destinations(board.squares(), self, &mut destinations);
        destinations
    }

    /// New piece of the same type and alliance at `destination`
    pub fn move_to(&self, destination: Coordinate) -> Piece {
        Piece {
            position: destination,
            ..*self
        }
    }

    pub fn mirror(&self) -> Piece {
        self.move_to(self.position.mirror())
    }

    pub fn material_value(&self, phase: GamePhase) -> i32 {
        self.piece_type.material_value(phase)
    }

    /// FEN letter, uppercase for Red
    pub fn letter(&self) -> char {
        match self.alliance {
            Alliance::Red => self.piece_type.letter(),
            Alliance::Black => self.piece_type.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(0, 0).is_some());
        assert!(Coordinate::new(9, 8).is_some());
        assert!(Coordinate::new(10, 0).is_none());
        assert!(Coordinate::new(0, 9).is_none());
        assert!(Coordinate::new(-1, 4).is_none());
    }

    #[test]
    fn test_coordinate_try_from_pair() {
        assert_eq!(Coordinate::try_from((9, 4)), Ok(Coordinate::at(9, 4)));
        assert_eq!(
            Coordinate::try_from((10, 4)),
            Err(XiangqiError::InvalidCoordinate { row: 10, col: 4 })
        );
    }

    #[test]
    #[should_panic]
    fn test_at_rejects_off_board_square() {
        let _ = Coordinate::at(10, 0);
    }

    #[test]
    fn test_coordinate_index_round_trip() {
        for index in 0..NUM_SQUARES {
            let coordinate = Coordinate::from_index(index).unwrap();
            assert_eq!(coordinate.index(), index);
        }
        assert!(Coordinate::from_index(NUM_SQUARES).is_none());
    }

    #[test]
    fn test_mirror_is_involution() {
        let c = Coordinate::at(3, 1);
        assert_eq!(c.mirror(), Coordinate::at(3, 7));
        assert_eq!(c.mirror().mirror(), c);
    }

    #[test]
    fn test_move_to_keeps_identity() {
        let horse = Piece::new(PieceType::Horse, Alliance::Red, Coordinate::at(9, 1));
        let moved = horse.move_to(Coordinate::at(7, 2));
        assert_eq!(moved.piece_type(), PieceType::Horse);
        assert_eq!(moved.alliance(), Alliance::Red);
        assert_eq!(moved.position(), Coordinate::at(7, 2));
        assert_eq!(horse.position(), Coordinate::at(9, 1), "original piece is untouched");
    }

    #[test]
    fn test_river_crossing() {
        assert!(!Alliance::Red.has_crossed_river(5));
        assert!(Alliance::Red.has_crossed_river(4));
        assert!(!Alliance::Black.has_crossed_river(4));
        assert!(Alliance::Black.has_crossed_river(5));
    }

    #[test]
    fn test_attacking_flags() {
        let attacking: Vec<_> = PieceType::ALL
            .iter()
            .filter(|t| t.is_attacking())
            .collect();
        assert_eq!(attacking.len(), 4);
        assert!(!PieceType::General.is_attacking());
        assert!(!PieceType::Advisor.is_attacking());
        assert!(!PieceType::Elephant.is_attacking());
    }
}
