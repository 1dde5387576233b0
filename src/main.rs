use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xiangqi::commands;
use xiangqi::settings::{settings_path, Settings};
use xiangqi_engine::{Alliance, SearchMode};

#[derive(Parser, Debug)]
#[command(name = "xiangqi", about = "Xiangqi engine on the command line")]
struct Arguments {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Search to a fixed depth
    #[arg(short, long, global = true, conflicts_with = "millis")]
    depth: Option<u8>,

    /// Search for a fixed time per move, in milliseconds
    #[arg(short, long, global = true)]
    millis: Option<u64>,

    /// Ignore the opening book
    #[arg(long, global = true)]
    no_book: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the best move in a position
    Analyze {
        /// Position in FEN; the standard opening when omitted
        #[arg(short, long)]
        fen: Option<String>,
    },
    /// Let the engine play both sides
    Selfplay {
        #[arg(short, long, default_value_t = 200)]
        plies: usize,

        #[arg(short, long)]
        fen: Option<String>,

        /// Write the game record here
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Replay a game record and show the final position
    Replay { path: PathBuf },
    /// Play against the engine
    Play {
        #[arg(short, long, value_enum, default_value_t = Side::Red)]
        side: Side,
    },
    /// Write the effective settings to the settings file
    SaveSettings,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    Red,
    Black,
}

impl From<Side> for Alliance {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Alliance::Red,
            Side::Black => Alliance::Black,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let arguments = Arguments::parse();

    let mut settings = match &arguments.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    if let Some(depth) = arguments.depth {
        settings.search.mode = SearchMode::FixedDepth { depth };
    }
    if let Some(millis) = arguments.millis {
        settings.search.mode = SearchMode::FixedTime { millis };
    }
    if arguments.no_book {
        settings.search.use_book = false;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match arguments.command {
        Command::Analyze { fen } => {
            let mut engine = settings.engine()?;
            commands::analyze(&mut engine, fen.as_deref(), &mut out)?;
        }
        Command::Selfplay { plies, fen, out: record_path } => {
            if fen.is_some() && record_path.is_some() {
                anyhow::bail!("records start from the standard opening; drop --fen to save one");
            }
            let mut engine = settings.engine()?;
            let game = commands::selfplay(&mut engine, plies, fen.as_deref(), &mut out)?;
            if let Some(record_path) = record_path {
                commands::save_record(game.record(), &record_path)?;
                writeln!(out, "record written to {}", record_path.display())?;
            }
        }
        Command::Replay { path } => {
            commands::replay(&path, &mut out)?;
        }
        Command::Play { side } => {
            let mut engine = settings.engine()?;
            let stdin = io::stdin();
            commands::play(&mut engine, side.into(), stdin.lock(), &mut out)?;
        }
        Command::SaveSettings => {
            let path = arguments.settings.unwrap_or_else(settings_path);
            settings
                .save_to(&path)
                .with_context(|| format!("saving settings to {}", path.display()))?;
            writeln!(out, "settings written to {}", path.display())?;
        }
    }

    Ok(())
}
