//! # Board State
//!
//! [`Board`] owns the 90-square placement, the side to move and the Zobrist hash. Each board
//! also carries a snapshot of both sides (active pieces, legal moves, check flag) computed
//! once when the placement changes, so [`crate::player::Player`] views are free.
//!
//! ## Mutation
//!
//! Search mutates a single board in place through [`crate::search::MoveGuard`], which calls the
//! crate-private [`Board::make_move`] / [`Board::unmake_move`] pair. Make XORs the hash delta and
//! pushes the previous snapshot onto a history stack; unmake XORs the same delta and pops it, so
//! restoring a position never recomputes move lists. Everything outside the crate sees boards as
//! values: [`crate::moves::Move::execute`] and [`crate::player::Player::make_move`] clone.

mod fen;

use crate::constants::*;
use crate::hash::{position_hash, zobrist_keys};
use crate::move_gen::{find_general, is_square_attacked, piece_destinations};
use crate::moves::Move;
use crate::player::Player;
use crate::types::{Alliance, Coordinate, GamePhase, Piece, PieceType};
use crate::{XiangqiError, XiangqiResult};
use std::fmt;
use std::sync::Arc;

/// Row-major placement, index = `row * 9 + col`
pub type Squares = [Option<Piece>; NUM_SQUARES];

/// Per-side data derived from a placement
#[derive(Debug, Clone, Default)]
pub(crate) struct SideSnapshot {
    pub(crate) active_pieces: Vec<Piece>,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    sides: [SideSnapshot; 2],
}

impl Snapshot {
    fn compute(squares: &Squares) -> Self {
        let mut sides = [SideSnapshot::default(), SideSnapshot::default()];
        let mut destinations = Vec::with_capacity(17);

        for piece in squares.iter().flatten() {
            let side = &mut sides[piece.alliance().index()];
            side.active_pieces.push(*piece);

            destinations.clear();
            piece_destinations(squares, piece, &mut destinations);
            side.legal_moves.extend(
                destinations
                    .iter()
                    .map(|&dest| Move::new(*piece, dest, squares[dest.index()])),
            );
        }

        for alliance in Alliance::ALL {
            let in_check = match find_general(squares, alliance) {
                Some(general) => sides[alliance.opponent().index()]
                    .legal_moves
                    .iter()
                    .any(|mv| mv.destination() == general),
                None => false,
            };
            sides[alliance.index()].in_check = in_check;
        }

        Self { sides }
    }

    #[inline]
    pub(crate) fn side(&self, alliance: Alliance) -> &SideSnapshot {
        &self.sides[alliance.index()]
    }
}

/// Game outcome as seen from a board
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    /// The side to move has no move that keeps its General safe
    Win(Alliance),
    /// Neither side has an attacking piece left
    Draw,
}

#[derive(Clone)]
pub struct Board {
    squares: Squares,
    turn: Alliance,
    zobrist: u64,
    snapshot: Arc<Snapshot>,
    history: Vec<Arc<Snapshot>>,
}

impl Board {
    /// Standard opening position, Red to move
    pub fn standard() -> Self {
        Self::from_fen(START_FEN).unwrap_or_else(|_| unreachable!("START_FEN is well formed"))
    }

    /// Board from a list of pieces
    ///
    /// Fails when a square is occupied twice or when either General is missing.
    pub fn from_pieces(
        pieces: impl IntoIterator<Item = Piece>,
        turn: Alliance,
    ) -> XiangqiResult<Self> {
        let mut squares: Squares = [None; NUM_SQUARES];
        for piece in pieces {
            let slot = &mut squares[piece.position().index()];
            if slot.is_some() {
                return Err(XiangqiError::MalformedFen {
                    message: format!("square {} is occupied twice", piece.position()),
                });
            }
            *slot = Some(piece);
        }
        Self::from_squares(squares, turn)
    }

    pub(crate) fn from_squares(squares: Squares, turn: Alliance) -> XiangqiResult<Self> {
        for alliance in Alliance::ALL {
            if find_general(&squares, alliance).is_none() {
                return Err(XiangqiError::MissingGeneral { alliance });
            }
        }
        Ok(Self {
            zobrist: position_hash(&squares, turn),
            snapshot: Arc::new(Snapshot::compute(&squares)),
            squares,
            turn,
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn squares(&self) -> &Squares {
        &self.squares
    }

    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        self.squares[coordinate.index()]
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Alliance {
        self.turn
    }

    #[inline]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist
    }

    pub fn current_player(&self) -> Player<'_> {
        Player::new(self, self.turn)
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }

    pub fn red_player(&self) -> Player<'_> {
        self.player(Alliance::Red)
    }

    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    pub(crate) fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn general_position(&self, alliance: Alliance) -> Option<Coordinate> {
        find_general(&self.squares, alliance)
    }

    /// Whether the side that just moved left its own General safe
    pub fn is_state_allowed(&self) -> bool {
        !self.snapshot.side(self.turn.opponent()).in_check
    }

    /// Would `mv` keep its mover's General unattacked
    ///
    /// Tested on a scratch copy of the placement; no snapshot is computed.
    pub fn leaves_general_safe(&self, mv: &Move) -> bool {
        let mut scratch = self.squares;
        scratch[mv.origin().index()] = None;
        scratch[mv.destination().index()] = Some(mv.placed_piece());

        let alliance = mv.moved_piece().alliance();
        match find_general(&scratch, alliance) {
            Some(general) => !is_square_attacked(&scratch, general, alliance.opponent()),
            None => false,
        }
    }

    /// Whether `alliance` has at least one move that keeps its General safe
    pub fn has_escape(&self, alliance: Alliance) -> bool {
        self.snapshot
            .side(alliance)
            .legal_moves
            .iter()
            .any(|mv| self.leaves_general_safe(mv))
    }

    /// Total attack units of one side
    pub fn attack_units(&self, alliance: Alliance) -> i32 {
        self.snapshot
            .side(alliance)
            .active_pieces
            .iter()
            .map(|p| p.piece_type().attack_units())
            .sum()
    }

    /// Game phase classification
    ///
    /// More than [`OPENING_PIECE_COUNT`] pieces on the board is the opening; otherwise more than
    /// [`MIDDLE_ATTACK_UNITS`] weighted attacking units (both sides together) is the middle
    /// game; anything else is the end game.
    pub fn status(&self) -> GamePhase {
        let piece_count = self.squares.iter().flatten().count();
        if piece_count > OPENING_PIECE_COUNT {
            return GamePhase::Opening;
        }
        let units = self.attack_units(Alliance::Red) + self.attack_units(Alliance::Black);
        if units > MIDDLE_ATTACK_UNITS {
            GamePhase::Middle
        } else {
            GamePhase::End
        }
    }

    /// Draw by lack of attacking material on both sides
    pub fn is_game_draw(&self) -> bool {
        !self.red_player().has_attacking_pieces() && !self.black_player().has_attacking_pieces()
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_game_draw() {
            Outcome::Draw
        } else if self.current_player().is_in_checkmate() {
            Outcome::Win(self.turn.opponent())
        } else {
            Outcome::Ongoing
        }
    }

    /// Left-right reflection with the same side to move
    pub fn mirror(&self) -> Board {
        let mut squares: Squares = [None; NUM_SQUARES];
        for piece in self.squares.iter().flatten() {
            let mirrored = piece.mirror();
            squares[mirrored.position().index()] = Some(mirrored);
        }
        Board {
            zobrist: position_hash(&squares, self.turn),
            snapshot: Arc::new(Snapshot::compute(&squares)),
            squares,
            turn: self.turn,
            history: Vec::new(),
        }
    }

    /// Number of pieces of a given type and side
    pub fn count(&self, alliance: Alliance, piece_type: PieceType) -> usize {
        self.snapshot
            .side(alliance)
            .active_pieces
            .iter()
            .filter(|p| p.piece_type() == piece_type)
            .count()
    }

    #[inline]
    fn move_delta(mv: &Move) -> u64 {
        let keys = zobrist_keys();
        let mut delta = keys.piece(&mv.moved_piece()) ^ keys.piece(&mv.placed_piece()) ^ keys.side();
        if let Some(captured) = mv.captured_piece() {
            delta ^= keys.piece(&captured);
        }
        delta
    }

    /// Apply `mv` in place; the caller decides what to do if the result is not allowed
    pub(crate) fn make_move(&mut self, mv: &Move) {
        debug_assert_eq!(self.squares[mv.origin().index()], Some(mv.moved_piece()));
        debug_assert_eq!(self.squares[mv.destination().index()], mv.captured_piece());

        self.squares[mv.origin().index()] = None;
        self.squares[mv.destination().index()] = Some(mv.placed_piece());
        self.zobrist ^= Self::move_delta(mv);
        self.turn = self.turn.opponent();

        let next = Arc::new(Snapshot::compute(&self.squares));
        self.history.push(std::mem::replace(&mut self.snapshot, next));
    }

    /// Exact inverse of [`Board::make_move`] for the most recent move
    pub(crate) fn unmake_move(&mut self, mv: &Move) {
        self.squares[mv.origin().index()] = Some(mv.moved_piece());
        self.squares[mv.destination().index()] = mv.captured_piece();
        self.zobrist ^= Self::move_delta(mv);
        self.turn = self.turn.opponent();
        self.restore_snapshot();
    }

    /// Pass the turn without moving
    pub(crate) fn make_null_move(&mut self) {
        self.history.push(Arc::clone(&self.snapshot));
        self.turn = self.turn.opponent();
        self.zobrist ^= zobrist_keys().side();
    }

    pub(crate) fn unmake_null_move(&mut self) {
        self.turn = self.turn.opponent();
        self.zobrist ^= zobrist_keys().side();
        self.restore_snapshot();
    }

    /// Drop the undo stack of a board that will not be unmade
    pub(crate) fn forget_history(&mut self) {
        self.history.clear();
    }

    fn restore_snapshot(&mut self) {
        match self.history.pop() {
            Some(previous) => self.snapshot = previous,
            None => {
                debug_assert!(false, "unmake without a matching make");
                self.snapshot = Arc::new(Snapshot::compute(&self.squares));
            }
        }
    }

    pub fn to_fen(&self) -> String {
        fen::write(self)
    }

    pub fn from_fen(text: &str) -> XiangqiResult<Self> {
        fen::parse(text)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Placement, side to move and hash; the history stack is not part of a position
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn && self.zobrist == other.zobrist && self.squares == other.squares
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("fen", &self.to_fen())
            .field("zobrist", &format_args!("{:#018x}", self.zobrist))
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7 8")?;
        for row in 0..NUM_ROWS {
            write!(f, "{row}  ")?;
            for col in 0..NUM_COLS {
                let symbol = self.squares[Coordinate::at(row, col).index()]
                    .map_or('.', |p| p.letter());
                write!(f, "{symbol}")?;
                if col + 1 < NUM_COLS {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
            if row == BLACK_RIVER_ROW {
                writeln!(f, "   -----------------")?;
            }
        }
        write!(f, "{} to move", self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board() {
        let board = Board::standard();
        assert_eq!(board.turn(), Alliance::Red);
        assert_eq!(board.squares().iter().flatten().count(), 32);
        assert_eq!(board.current_player().legal_moves().len(), 44);
        assert_eq!(board.status(), GamePhase::Opening);
        assert!(board.is_state_allowed());
    }

    #[test]
    fn test_make_unmake_restores_everything() {
        let mut board = Board::standard();
        let original = board.clone();
        let mv = *board
            .current_player()
            .legal_moves()
            .iter()
            .find(|m| m.origin() == Coordinate::at(7, 1) && m.is_capture())
            .unwrap();

        board.make_move(&mv);
        assert_ne!(board, original);
        assert_eq!(board.zobrist_key(), position_hash(board.squares(), board.turn()));

        board.unmake_move(&mv);
        assert_eq!(board, original);
        assert_eq!(
            board.current_player().legal_moves(),
            original.current_player().legal_moves()
        );
        assert!(board.history.is_empty());
    }

    #[test]
    fn test_null_move_round_trip() {
        let mut board = Board::standard();
        let key = board.zobrist_key();
        board.make_null_move();
        assert_eq!(board.turn(), Alliance::Black);
        assert_ne!(board.zobrist_key(), key);
        board.unmake_null_move();
        assert_eq!(board.zobrist_key(), key);
        assert_eq!(board.turn(), Alliance::Red);
    }

    #[test]
    fn test_missing_general_rejected() {
        let err = Board::from_fen("9/9/9/9/9/9/9/9/9/4K4 w").unwrap_err();
        assert_eq!(
            err,
            XiangqiError::MissingGeneral {
                alliance: Alliance::Black
            }
        );
    }

    #[test]
    fn test_phase_classification() {
        let end = Board::from_fen("3k5/9/9/9/9/9/9/9/4R4/4K4 w").unwrap();
        assert_eq!(end.status(), GamePhase::End);

        // 22 pieces, both sides keep every chariot, horse and cannon: 16 units
        let middle = Board::from_fen("rheakaehr/9/1c5c1/9/9/9/9/1C5C1/9/RHEAKAEHR w").unwrap();
        assert_eq!(middle.status(), GamePhase::Middle);
    }

    #[test]
    fn test_draw_without_attackers() {
        let board = Board::from_fen("3ak4/9/4e4/9/9/9/9/9/4A4/3K5 w").unwrap();
        assert!(board.is_game_draw());
        assert_eq!(board.outcome(), Outcome::Draw);

        let one_soldier = Board::from_fen("3ak4/9/4e4/9/9/4P4/9/9/4A4/3K5 w").unwrap();
        assert!(!one_soldier.is_game_draw());
    }

    #[test]
    fn test_from_pieces() {
        let red_general = Piece::new(PieceType::General, Alliance::Red, Coordinate::at(9, 4));
        let black_general = Piece::new(PieceType::General, Alliance::Black, Coordinate::at(0, 3));
        let chariot = Piece::new(PieceType::Chariot, Alliance::Red, Coordinate::at(5, 0));

        let board = Board::from_pieces([red_general, black_general, chariot], Alliance::Red).unwrap();
        assert_eq!(board, Board::from_fen("3k5/9/9/9/9/R8/9/9/9/4K4 w").unwrap());

        let doubled = Piece::new(PieceType::Horse, Alliance::Black, Coordinate::at(5, 0));
        assert!(matches!(
            Board::from_pieces([red_general, black_general, chariot, doubled], Alliance::Red),
            Err(XiangqiError::MalformedFen { .. })
        ));
        assert_eq!(
            Board::from_pieces([red_general, chariot], Alliance::Black),
            Err(XiangqiError::MissingGeneral { alliance: Alliance::Black })
        );
    }

    #[test]
    fn test_mirror_round_trip() {
        let board = Board::from_fen("3k5/9/9/1h7/9/R8/9/9/9/R3K4 w").unwrap();
        let mirrored = board.mirror();
        assert_eq!(mirrored.piece_at(Coordinate::at(5, 8)).map(|p| p.piece_type()), Some(PieceType::Chariot));
        assert_eq!(mirrored.mirror(), board);
    }

    #[test]
    fn test_display_grid() {
        let text = Board::standard().to_string();
        assert!(text.starts_with("   0 1 2 3 4 5 6 7 8\n0  r h e a k a e h r"));
        assert!(text.ends_with("Red to move"));
    }
}
