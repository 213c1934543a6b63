//! candlex CLI - resample OHLCV candle and tick data between timeframes.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use candlex_lib::{DEFAULT_TICK_COUNT, Timeframe};

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "candlex")]
#[command(about = "Resample OHLCV candle and tick data between timeframes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress the summary line)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resample a candle file to a coarser timeframe
    Ohlcv {
        /// Input file path (csv, json, ndjson)
        input: PathBuf,

        /// Base (source) timeframe, e.g. 60, 1m
        #[arg(short, long, default_value = "1m")]
        base: Timeframe,

        /// New (target) timeframe, must be an integer multiple of the base
        #[arg(short, long, default_value = "5m")]
        new: Timeframe,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,
    },

    /// Aggregate a tick file into time-bucketed candles
    Ticks {
        /// Input file path (csv, json, ndjson)
        input: PathBuf,

        /// Bucket width, e.g. 60, 1m, 1h
        #[arg(short, long, default_value = "1m")]
        timeframe: Timeframe,

        /// Drop the chronologically latest (still-open) candle
        #[arg(long)]
        drop_latest: bool,

        /// Insert flat zero-volume candles for buckets with no trades
        #[arg(long)]
        fill_gaps: bool,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,
    },

    /// Aggregate a tick file into fixed-count candles (a tick chart)
    TickChart {
        /// Input file path (csv, json, ndjson)
        input: PathBuf,

        /// Number of ticks per candle
        #[arg(short, long, default_value_t = DEFAULT_TICK_COUNT)]
        count: usize,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,
    },

    /// Show a summary of a candle file
    Info {
        /// Input file path (csv, json, ndjson)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Ohlcv {
            input,
            base,
            new,
            output,
            format,
        } => commands::ohlcv::resample(&input, base, new, output.as_deref(), format, cli.quiet),
        Commands::Ticks {
            input,
            timeframe,
            drop_latest,
            fill_gaps,
            output,
            format,
        } => commands::ticks::aggregate(
            &input,
            timeframe,
            drop_latest,
            fill_gaps,
            output.as_deref(),
            format,
            cli.quiet,
        ),
        Commands::TickChart {
            input,
            count,
            output,
            format,
        } => commands::tick_chart::aggregate(&input, count, output.as_deref(), format, cli.quiet),
        Commands::Info { input } => commands::info::show_info(&input),
    }
}
