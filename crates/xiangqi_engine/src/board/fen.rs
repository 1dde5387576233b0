//! FEN-style text form of a board
//!
//! Ten `/`-separated rows, row 0 (Black's back rank) first. Letters are `K A E H R C P`,
//! uppercase for Red and lowercase for Black; digits count empty squares. The side to move
//! follows after a space: `w` or `r` for Red, `b` for Black. Anything after the side token
//! (move counters) is ignored.

use super::{Board, Squares};
use crate::constants::{NUM_COLS, NUM_ROWS, NUM_SQUARES};
use crate::types::{Alliance, Coordinate, Piece, PieceType};
use crate::{XiangqiError, XiangqiResult};

fn malformed(message: impl Into<String>) -> XiangqiError {
    XiangqiError::MalformedFen {
        message: message.into(),
    }
}

pub(super) fn parse(text: &str) -> XiangqiResult<Board> {
    let mut fields = text.split_whitespace();
    let placement = fields.next().ok_or_else(|| malformed("empty string"))?;
    let turn = match fields.next() {
        None | Some("w") | Some("r") => Alliance::Red,
        Some("b") => Alliance::Black,
        Some(other) => return Err(malformed(format!("unknown side to move '{other}'"))),
    };

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != NUM_ROWS as usize {
        return Err(malformed(format!(
            "expected {NUM_ROWS} rows, found {}",
            rows.len()
        )));
    }

    let mut squares: Squares = [None; NUM_SQUARES];
    for (row, row_text) in rows.iter().enumerate() {
        let row = row as i8;
        let mut col: i8 = 0;
        for symbol in row_text.chars() {
            if let Some(skip) = symbol.to_digit(10) {
                col = col
                    .checked_add(skip as i8)
                    .filter(|c| *c <= NUM_COLS)
                    .ok_or_else(|| malformed(format!("row {row} is longer than {NUM_COLS} squares")))?;
                continue;
            }
            let piece_type = PieceType::from_letter(symbol)
                .ok_or_else(|| malformed(format!("unknown piece letter '{symbol}'")))?;
            let alliance = if symbol.is_ascii_uppercase() {
                Alliance::Red
            } else {
                Alliance::Black
            };
            let position = Coordinate::new(row, col)
                .ok_or_else(|| malformed(format!("row {row} is longer than {NUM_COLS} squares")))?;
            squares[position.index()] = Some(Piece::new(piece_type, alliance, position));
            col += 1;
        }
        if col != NUM_COLS {
            return Err(malformed(format!(
                "row {row} covers {col} squares, expected {NUM_COLS}"
            )));
        }
    }

    Board::from_squares(squares, turn)
}

pub(super) fn write(board: &Board) -> String {
    let mut out = String::with_capacity(64);
    for row in 0..NUM_ROWS {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0;
        for col in 0..NUM_COLS {
            match board.piece_at(Coordinate::at(row, col)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.letter());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
    }
    out.push(' ');
    out.push(match board.turn() {
        Alliance::Red => 'w',
        Alliance::Black => 'b',
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::START_FEN;

    #[test]
    fn test_start_position_round_trip() {
        let board = parse(START_FEN).unwrap();
        assert_eq!(write(&board), START_FEN);
    }

    #[test]
    fn test_side_tokens() {
        assert_eq!(parse("4k4/9/9/9/9/9/9/9/9/4K4 r").unwrap().turn(), Alliance::Red);
        assert_eq!(parse("4k4/9/9/9/9/9/9/9/9/4K4 b").unwrap().turn(), Alliance::Black);
        assert_eq!(parse("4k4/9/9/9/9/9/9/9/9/4K4").unwrap().turn(), Alliance::Red);
    }

    #[test]
    fn test_rejects_bad_rows() {
        assert!(matches!(
            parse("4k4/9/9/9/9/9/9/9/4K4 w"),
            Err(XiangqiError::MalformedFen { .. })
        ));
        assert!(matches!(
            parse("4k5/9/9/9/9/9/9/9/9/4K4 w"),
            Err(XiangqiError::MalformedFen { .. })
        ));
        assert!(matches!(
            parse("4x4/9/9/9/9/9/9/9/9/4K4 w"),
            Err(XiangqiError::MalformedFen { .. })
        ));
    }

    #[test]
    fn test_rejects_long_digit_run() {
        assert!(matches!(
            parse("999999999999999/9/9/9/9/9/9/9/9/4K4 w"),
            Err(XiangqiError::MalformedFen { .. })
        ));
        assert!(matches!(
            parse("4k4/55/9/9/9/9/9/9/9/4K4 w"),
            Err(XiangqiError::MalformedFen { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_side() {
        assert!(parse("4k4/9/9/9/9/9/9/9/9/4K4 x").is_err());
    }
}
