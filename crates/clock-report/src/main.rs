//! Clock Report - time spent per move in clock-annotated PGN files.
//!
//! Loads a game record, derives each player's time per move from the
//! `[%clk ...]` annotations and prints text reports or JSON.

mod config;
mod json_output;

use anyhow::Context;
use chess_clock::{report, GameClock, GameText, ParseOptions, Side};
use clap::{Parser, Subcommand};
use config::ReportConfig;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clock-report")]
#[command(about = "Time spent per move in clock-annotated PGN files")]
struct Cli {
    /// Configuration file (defaults to clock-report.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Side owning the first clock annotation (white or black)
    #[arg(long, global = true)]
    first_mover: Option<Side>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the time control and both sides' moves grouped by time spent
    Summary {
        /// PGN file to analyse
        pgn: PathBuf,
    },
    /// Print the clock visor after every move
    Clocks {
        /// PGN file to analyse
        pgn: PathBuf,
        /// Only this side
        #[arg(short, long)]
        side: Option<Side>,
    },
    /// Print the time spent on every move
    Times {
        /// PGN file to analyse
        pgn: PathBuf,
        /// Only this side
        #[arg(short, long)]
        side: Option<Side>,
        /// List longest moves first
        #[arg(long)]
        sort_by_worst: bool,
    },
    /// Print all derived data as JSON
    Json {
        /// PGN file to analyse
        pgn: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ReportConfig::load(cli.config.as_deref())?;
    let options = config.parse_options(cli.first_mover);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Summary { pgn } => {
            let game = load_game(&pgn, &options)?;
            report::write_time_control(&mut out, game.time_control())?;
            for side in Side::ALL {
                writeln!(out)?;
                report::write_moves_by_time(&mut out, &game.side_report(side))?;
            }
        }
        Commands::Clocks { pgn, side } => {
            let game = load_game(&pgn, &options)?;
            for side in selected_sides(side) {
                report::write_clock_history(&mut out, side, game.clock_history(side))?;
            }
        }
        Commands::Times {
            pgn,
            side,
            sort_by_worst,
        } => {
            let game = load_game(&pgn, &options)?;
            let sort_by_worst = sort_by_worst || config.sort_by_worst;
            for side in selected_sides(side) {
                report::write_time_per_move(&mut out, side, game.move_times(side), sort_by_worst)?;
            }
        }
        Commands::Json { pgn, output } => {
            let game = load_game(&pgn, &options)?;
            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    json_output::write_json(file, &pgn, &game)?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => {
                    json_output::write_json(&mut out, &pgn, &game)?;
                    writeln!(out)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Reads and parses a PGN file.
fn load_game(path: &Path, options: &ParseOptions) -> anyhow::Result<GameClock> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let text = GameText::normalize(&raw);
    let game = GameClock::parse_with(&text, options)
        .with_context(|| format!("Failed to parse clock data in {}", path.display()))?;
    tracing::info!(
        "Loaded {}: {} white moves, {} black moves",
        path.display(),
        game.move_count(Side::White),
        game.move_count(Side::Black)
    );
    Ok(game)
}

fn selected_sides(side: Option<Side>) -> Vec<Side> {
    match side {
        Some(side) => vec![side],
        None => Side::ALL.to_vec(),
    }
}
