//! Compact move notation
//!
//! Four characters per move: `<piece><origin><direction><target>`.
//!
//! - **piece**: FEN letter, uppercase for Red and lowercase for Black
//! - **origin**: the file (1-9) the piece stands on, counted from the mover's right. When a
//!   second piece of the same type and side shares that file, `+` marks the front piece and `-`
//!   the rear one instead
//! - **direction**: `+` towards the opponent, `-` back towards the own side, `.` sideways
//! - **target**: the destination file for sideways moves and for advisors, elephants and
//!   horses (whose moves always change file); otherwise the number of ranks travelled
//!
//! `C2.5` is Red's right cannon moving sideways to the centre file. Decoding works against the
//! side to move's candidate moves: a token resolves when exactly one candidate encodes to it.

use crate::board::Board;
use crate::constants::NUM_COLS;
use crate::moves::Move;
use crate::types::{Alliance, PieceType};
use crate::{XiangqiError, XiangqiResult};

/// File number 1-9 of a column, counted from the right of `alliance`
pub fn file_of(alliance: Alliance, col: i8) -> u8 {
    match alliance {
        Alliance::Red => (NUM_COLS - col) as u8,
        Alliance::Black => (col + 1) as u8,
    }
}

fn digit(value: u8) -> char {
    char::from(b'0' + value)
}

/// Notation of a candidate move on `board`
pub fn encode(board: &Board, mv: &Move) -> String {
    let piece = mv.moved_piece();
    let alliance = piece.alliance();
    let from = mv.origin();
    let to = mv.destination();

    let tandem: Vec<_> = board
        .player(alliance)
        .active_pieces()
        .iter()
        .filter(|p| {
            p.piece_type() == piece.piece_type()
                && p.position().col() == from.col()
                && p.position() != from
        })
        .collect();
    let origin = match tandem.as_slice() {
        [other] => {
            let ahead = (other.position().row() - from.row()) * alliance.forward() > 0;
            if ahead {
                '-'
            } else {
                '+'
            }
        }
        _ => digit(file_of(alliance, from.col())),
    };

    let advance = (to.row() - from.row()) * alliance.forward();
    let direction = match advance.signum() {
        1 => '+',
        -1 => '-',
        _ => '.',
    };

    let target = if direction == '.' || piece.piece_type().moves_diagonally() {
        file_of(alliance, to.col())
    } else {
        advance.unsigned_abs()
    };

    let mut text = String::with_capacity(4);
    text.push(piece.letter());
    text.push(origin);
    text.push(direction);
    text.push(digit(target));
    text
}

fn malformed(notation: &str, message: &str) -> XiangqiError {
    XiangqiError::MalformedNotation {
        notation: notation.to_string(),
        message: message.to_string(),
    }
}

/// Check the shape of a token without a board
pub fn validate(notation: &str) -> XiangqiResult<()> {
    let chars: Vec<char> = notation.chars().collect();
    let [letter, origin, direction, target] = chars.as_slice() else {
        return Err(malformed(notation, "expected four characters"));
    };
    if PieceType::from_letter(*letter).is_none() {
        return Err(malformed(notation, "unknown piece letter"));
    }
    if !matches!(origin, '1'..='9' | '+' | '-') {
        return Err(malformed(notation, "origin must be a file 1-9, '+' or '-'"));
    }
    if !matches!(direction, '+' | '-' | '.') {
        return Err(malformed(notation, "direction must be '+', '-' or '.'"));
    }
    if !matches!(target, '1'..='9') {
        return Err(malformed(notation, "target must be 1-9"));
    }
    Ok(())
}

/// Resolve a token against the side to move's candidate moves
pub fn decode(board: &Board, notation: &str) -> XiangqiResult<Move> {
    let notation = notation.trim();
    validate(notation)?;

    let mut matches = board
        .current_player()
        .legal_moves()
        .iter()
        .filter(|mv| encode(board, mv) == notation);

    match (matches.next(), matches.count()) {
        (Some(mv), 0) => Ok(*mv),
        (None, _) => Err(XiangqiError::UnresolvedMove {
            notation: notation.to_string(),
        }),
        (Some(_), others) => Err(XiangqiError::AmbiguousMove {
            notation: notation.to_string(),
            candidates: others + 1,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;

    fn find(board: &Board, from: (i8, i8), to: (i8, i8)) -> Move {
        board
            .current_player()
            .find_move(Coordinate::at(from.0, from.1), Coordinate::at(to.0, to.1))
            .unwrap()
    }

    #[test]
    fn test_file_numbering() {
        assert_eq!(file_of(Alliance::Red, 8), 1);
        assert_eq!(file_of(Alliance::Red, 0), 9);
        assert_eq!(file_of(Alliance::Black, 0), 1);
        assert_eq!(file_of(Alliance::Black, 8), 9);
    }

    #[test]
    fn test_opening_moves() {
        let board = Board::standard();
        assert_eq!(encode(&board, &find(&board, (7, 7), (7, 4))), "C2.5");
        assert_eq!(encode(&board, &find(&board, (9, 1), (7, 2))), "H8+7");
        assert_eq!(encode(&board, &find(&board, (9, 0), (7, 0))), "R9+2");
        assert_eq!(encode(&board, &find(&board, (6, 4), (5, 4))), "P5+1");
        assert_eq!(encode(&board, &find(&board, (9, 2), (7, 4))), "E7+5");
    }

    #[test]
    fn test_black_moves_use_lowercase_and_own_files() {
        let board = Board::standard();
        let after = find(&board, (7, 7), (7, 4)).execute(&board);
        let mv = find(&after, (0, 1), (2, 2));
        assert_eq!(encode(&after, &mv), "h2+3");
        assert_eq!(decode(&after, "h2+3").unwrap(), mv);
    }

    #[test]
    fn test_tandem_pieces() {
        // two red chariots on file 9 (column 0)
        let board = Board::from_fen("3k5/9/9/9/9/R8/9/9/9/R3K4 w").unwrap();
        assert_eq!(encode(&board, &find(&board, (5, 0), (5, 1))), "R+.8");
        assert_eq!(encode(&board, &find(&board, (9, 0), (9, 1))), "R-.8");
        assert_eq!(decode(&board, "R-.8").unwrap().origin(), Coordinate::at(9, 0));
    }

    #[test]
    fn test_decode_round_trips_every_opening_move() {
        let board = Board::standard();
        for mv in board.current_player().legal_moves() {
            let text = encode(&board, mv);
            assert_eq!(decode(&board, &text).unwrap(), *mv, "{text}");
        }
    }

    #[test]
    fn test_decode_errors() {
        let board = Board::standard();
        assert!(matches!(
            decode(&board, "C2.55"),
            Err(XiangqiError::MalformedNotation { .. })
        ));
        assert!(matches!(
            decode(&board, "X2.5"),
            Err(XiangqiError::MalformedNotation { .. })
        ));
        assert!(matches!(
            decode(&board, "C2+9"),
            Err(XiangqiError::UnresolvedMove { .. })
        ));
        // black to move is not the case here
        assert!(matches!(
            decode(&board, "h2+3"),
            Err(XiangqiError::UnresolvedMove { .. })
        ));
    }
}
