//! Subcommand implementations
//!
//! Each command takes its engine and I/O handles from the caller, so the terminal front end in
//! `main` and the tests drive exactly the same code.

use anyhow::{bail, Context};
use futures_lite::future::block_on;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;
use xiangqi_engine::api::{
    do_move, do_notation, game_from_fen, get_game_state, new_game, reply, undo_move, Game,
};
use xiangqi_engine::notation::encode;
use xiangqi_engine::{
    Alliance, Board, Coordinate, Engine, GameRecord, MoveStatus, Outcome, SearchOutcome,
};

/// Human-readable game result
pub fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Ongoing => "game in progress".to_string(),
        Outcome::Win(winner) => format!("{winner} wins"),
        Outcome::Draw => "draw, no attacking pieces left".to_string(),
    }
}

fn write_outcome(
    out: &mut impl Write,
    board: &Board,
    outcome: &SearchOutcome,
) -> anyhow::Result<()> {
    let source = if outcome.from_book { "book" } else { "search" };
    writeln!(
        out,
        "best {} ({}) score {} depth {} nodes {} time {:?} [{}]",
        encode(board, &outcome.best_move),
        outcome.best_move,
        outcome.score,
        outcome.depth,
        outcome.nodes,
        outcome.elapsed,
        source,
    )?;
    Ok(())
}

/// Search one position and report the best move
///
/// Fixed-time searches report every completed depth as they go.
pub fn analyze(
    engine: &mut Engine,
    fen: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let board = match fen {
        Some(fen) => Board::from_fen(fen).context("parsing FEN")?,
        None => Board::standard(),
    };
    writeln!(out, "{board}")?;

    if board.outcome() != Outcome::Ongoing {
        writeln!(out, "{}", describe(board.outcome()))?;
        return Ok(());
    }

    let from_book = engine.config().use_book && engine.book_move(&board).is_some();
    let budget = engine.config().mode.budget();
    let result = match budget {
        Some(budget) if !from_book => {
            let mut lines = Vec::new();
            let result = block_on(engine.search_fixed_time(&board, budget, |progress| {
                lines.push(*progress)
            }));
            for progress in &lines {
                write!(out, "  ")?;
                write_outcome(out, &board, progress)?;
            }
            result
        }
        _ => Some(block_on(engine.search(&board))?),
    };

    match result {
        Some(outcome) => {
            write_outcome(out, &board, &outcome)?;
            let stats = engine.stats();
            writeln!(
                out,
                "stats: {} quiescence nodes, {} evaluations, {} cutoffs, {} null-move cutoffs, {} table hits",
                stats.quiescence_nodes, stats.evaluations, stats.cutoffs, stats.null_cutoffs, stats.table_hits
            )?;
        }
        None => writeln!(out, "no move keeps the General safe")?,
    }
    Ok(())
}

/// Engine against itself until the game ends or `max_plies` is reached
pub fn selfplay(
    engine: &mut Engine,
    max_plies: usize,
    fen: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<Game> {
    let mut game = match fen {
        Some(fen) => game_from_fen(fen).context("parsing FEN")?,
        None => new_game(),
    };

    while game.ply() < max_plies {
        let Some(outcome) = block_on(reply(engine, &mut game)) else {
            break;
        };
        let notation = game
            .record()
            .notations()
            .last()
            .cloned()
            .unwrap_or_default();
        writeln!(out, "{:>3}. {} ({})", game.ply(), notation, outcome.score)?;
    }

    writeln!(out, "{}", game.board())?;
    writeln!(out, "{}", describe(get_game_state(&game)))?;
    info!(plies = game.ply(), "self-play finished");
    Ok(game)
}

/// Write a record file
pub fn save_record(record: &GameRecord, path: &Path) -> anyhow::Result<()> {
    fs::write(path, record.to_text()).with_context(|| format!("writing {}", path.display()))
}

/// Load a record file and print where it ends
pub fn replay(path: &Path, out: &mut impl Write) -> anyhow::Result<Board> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let (record, board) = GameRecord::replay_text(&text)
        .with_context(|| format!("replaying {}", path.display()))?;

    for (ply, notation) in record.notations().iter().enumerate() {
        writeln!(out, "{:>3}. {}", ply + 1, notation)?;
    }
    writeln!(out, "{board}")?;
    writeln!(out, "{}", describe(board.outcome()))?;
    Ok(board)
}

/// `9,1 7,2` style origin and destination
fn parse_squares(text: &str) -> anyhow::Result<(Coordinate, Coordinate)> {
    let mut squares = text.split_whitespace().map(|square| {
        let (row, col) = square
            .split_once(',')
            .with_context(|| format!("'{square}' is not row,col"))?;
        let pair = (row.parse::<i8>()?, col.parse::<i8>()?);
        Ok::<_, anyhow::Error>(Coordinate::try_from(pair)?)
    });
    match (squares.next(), squares.next(), squares.next()) {
        (Some(from), Some(to), None) => Ok((from?, to?)),
        _ => bail!("expected two squares, e.g. 9,1 7,2"),
    }
}

/// Human against the engine over line-based input
///
/// Input lines are a move in compact notation or as two `row,col` squares, `undo` (takes back
/// the last full turn), `board`, `moves` or `quit`.
pub fn play(
    engine: &mut Engine,
    human: Alliance,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Game> {
    let mut game = new_game();
    let mut lines = input.lines();

    loop {
        if get_game_state(&game) != Outcome::Ongoing {
            writeln!(out, "{}", game.board())?;
            writeln!(out, "{}", describe(get_game_state(&game)))?;
            return Ok(game);
        }

        if game.board().turn() != human {
            match block_on(reply(engine, &mut game)) {
                Some(_) => {
                    let notation = game.record().notations().last().cloned().unwrap_or_default();
                    writeln!(out, "engine plays {notation}")?;
                }
                None => bail!("engine found no move in an ongoing game"),
            }
            continue;
        }

        writeln!(out, "{}", game.board())?;
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(game);
        };
        let line = line?;

        match line.trim() {
            "" => {}
            "quit" => return Ok(game),
            "board" => {}
            "moves" => {
                let board = game.board();
                let player = board.current_player();
                let playable: Vec<String> = player
                    .legal_moves()
                    .iter()
                    .filter(|mv| board.leaves_general_safe(mv))
                    .map(|mv| encode(board, mv))
                    .collect();
                writeln!(out, "{}", playable.join(" "))?;
            }
            "undo" => {
                // back to the human's previous turn
                undo_move(&mut game);
                if game.board().turn() != human {
                    undo_move(&mut game);
                }
            }
            squares if squares.contains(',') => match parse_squares(squares) {
                Ok((from, to)) => match do_move(&mut game, from, to) {
                    MoveStatus::Done => {}
                    status => writeln!(out, "{squares}: {status}")?,
                },
                Err(e) => writeln!(out, "{e}")?,
            },
            notation => match do_notation(&mut game, notation) {
                Ok(MoveStatus::Done) => {}
                Ok(status) => writeln!(out, "{notation}: {status}")?,
                Err(e) => writeln!(out, "{e}")?,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use xiangqi_engine::SearchConfig;

    fn quick_engine() -> Engine {
        Engine::new(SearchConfig::fixed_depth(1))
    }

    #[test]
    fn test_analyze_reports_best_move() {
        let mut out = Vec::new();
        analyze(&mut quick_engine(), None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("best "));
        assert!(text.contains("Red to move"));
    }

    #[test]
    fn test_analyze_finished_position() {
        let mut out = Vec::new();
        analyze(
            &mut quick_engine(),
            Some("3k5/8R/4R4/9/9/9/9/9/9/4K4 b"),
            &mut out,
        )
        .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Red wins"));
    }

    #[test]
    fn test_analyze_bad_fen() {
        let mut out = Vec::new();
        assert!(analyze(&mut quick_engine(), Some("not a fen"), &mut out).is_err());
    }

    #[test]
    fn test_selfplay_stops_at_ply_limit() {
        let mut out = Vec::new();
        let game = selfplay(&mut quick_engine(), 4, None, &mut out).unwrap();
        assert_eq!(game.ply(), 4);
        assert_eq!(game.record().len(), 4);
    }

    #[test]
    fn test_play_session() {
        let input = Cursor::new("C2.5\nZZZZ\nundo\nH2+3\nquit\n");
        let mut out = Vec::new();
        let game = play(&mut quick_engine(), Alliance::Red, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("engine plays"));
        assert!(text.contains("Malformed move notation"));
        // C2.5 and the reply were undone, then H2+3 and a reply were played
        assert_eq!(game.ply(), 2);
        assert_eq!(game.record().notations()[0], "H2+3");
    }

    #[test]
    fn test_play_with_coordinates() {
        let input = Cursor::new("9,1 7,2\n10,4 9,4\n9,4\nquit\n");
        let mut out = Vec::new();
        let game = play(&mut quick_engine(), Alliance::Red, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Invalid coordinate: row 10, column 4"));
        assert!(text.contains("expected two squares"));
        assert_eq!(game.ply(), 2);
        let horse = game.board().piece_at(Coordinate::at(7, 2)).unwrap();
        assert_eq!(horse.alliance(), Alliance::Red);
    }

    #[test]
    fn test_parse_squares() {
        assert_eq!(
            parse_squares("9,1 7,2").unwrap(),
            (Coordinate::at(9, 1), Coordinate::at(7, 2))
        );
        assert!(parse_squares("9,1").is_err());
        assert!(parse_squares("9;1 7,2").is_err());
        assert!(parse_squares("9,1 7,x").is_err());
    }

    #[test]
    fn test_play_as_black_lets_engine_open() {
        let input = Cursor::new("quit\n");
        let mut out = Vec::new();
        let game = play(&mut quick_engine(), Alliance::Black, input, &mut out).unwrap();
        assert_eq!(game.ply(), 1);
        assert_eq!(game.board().turn(), Alliance::Black);
    }
}
