//! Display utilities and output helpers for the candlex CLI.

use anyhow::Result;
use candlex_lib::prelude::*;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for resampled data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Writes a candle series to a file, or to stdout when no path is given.
pub(crate) fn write_series(
    series: &CandleSeries,
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            dispatch(series, writer, format)
        }
        None => dispatch(series, std::io::stdout(), format),
    }
}

/// Writes record-form candles to a file or stdout.
pub(crate) fn write_candles(
    candles: Vec<Candle>,
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    write_series(&CandleSeries::from(candles), output, format)
}

fn dispatch<W: Write + Send>(series: &CandleSeries, writer: W, format: Format) -> Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_series(series, writer)?,
        Format::Json => JsonFormatter::new().write_series(series, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_series(series, writer)?,
    }
    Ok(())
}

/// Describes the write destination for summary lines.
pub(crate) fn destination(output: Option<&Path>) -> String {
    output.map_or_else(|| "stdout".to_string(), |path| path.display().to_string())
}
