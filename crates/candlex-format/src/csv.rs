//! CSV input and output.

use candlex_types::{Candle, Tick};
use std::io::{BufRead, Write};

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Writes `time,open,high,low,close,volume` candle rows and
/// `time,price,quantity` tick rows, timestamps as raw milliseconds.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "time{d}open{d}high{d}low{d}close{d}volume")?;
        }

        for candle in candles {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                candle.time, candle.open, candle.high, candle.low, candle.close, candle.volume
            )?;
        }

        Ok(())
    }

    fn write_ticks<W: Write + Send>(
        &self,
        ticks: &[Tick],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "time{d}price{d}quantity")?;
        }

        for tick in ticks {
            writeln!(
                writer,
                "{}{d}{}{d}{}",
                tick.time, tick.price, tick.quantity
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

/// Splits a CSV line into up to `width` numeric fields, coercing anything
/// that does not parse to zero.
fn numeric_fields(line: &str, delimiter: char, width: usize) -> Vec<f64> {
    let mut fields: Vec<f64> = line
        .split(delimiter)
        .take(width)
        .map(|field| field.trim().parse().unwrap_or(0.0))
        .collect();
    fields.resize(width, 0.0);
    fields
}

/// Returns true for a line whose first field is not numeric, i.e. a header.
fn is_header(line: &str, delimiter: char) -> bool {
    line.split(delimiter)
        .next()
        .is_some_and(|field| field.trim().parse::<f64>().is_err())
}

/// Reads candles from CSV, one `time,open,high,low,close,volume` row per
/// line. A leading header row is skipped; blank lines are ignored;
/// non-numeric fields coerce to zero.
///
/// # Errors
///
/// Returns an error if reading fails.
pub(crate) fn read_candles_csv<R: BufRead>(reader: R) -> Result<Vec<Candle>, FormatError> {
    let mut candles = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || (index == 0 && is_header(&line, ',')) {
            continue;
        }
        let f = numeric_fields(&line, ',', 6);
        candles.push(Candle::new(f[0] as i64, f[1], f[2], f[3], f[4], f[5]));
    }

    Ok(candles)
}

/// Reads ticks from CSV, one `time,price,quantity` row per line, with the
/// same leniency as [`read_candles_csv`].
///
/// # Errors
///
/// Returns an error if reading fails.
pub(crate) fn read_ticks_csv<R: BufRead>(reader: R) -> Result<Vec<Tick>, FormatError> {
    let mut ticks = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || (index == 0 && is_header(&line, ',')) {
            continue;
        }
        let f = numeric_fields(&line, ',', 3);
        ticks.push(Tick::new(f[0] as i64, f[1], f[2]));
    }

    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn create_test_candle() -> Candle {
        Candle::new(60_000, 1.1000, 1.1050, 1.0980, 1.1020, 1000.0)
    }

    #[test]
    fn test_csv_candles() {
        let formatter = CsvFormatter::new();
        let candles = vec![create_test_candle()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_candles(&candles, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("time,open,high,low,close,volume"));
        assert!(result.contains("60000,1.1,1.105,1.098,1.102,1000"));
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let candles = vec![create_test_candle()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_candles(&candles, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("time,open"));
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let ticks = vec![Tick::new(1000, 9.5, 2.0)];
        let mut output = Cursor::new(Vec::new());

        formatter.write_ticks(&ticks, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("time\tprice\tquantity"));
        assert!(result.contains("1000\t9.5\t2"));
    }

    #[test]
    fn test_read_candles_skips_header() {
        let input = "time,open,high,low,close,volume\n0,1,2,0.5,1.5,10\n60000,1.5,1.6,1.4,1.6,5\n";
        let candles = read_candles_csv(Cursor::new(input)).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, 0);
        assert_eq!(candles[1].time, 60_000);
    }

    #[test]
    fn test_read_candles_without_header() {
        let input = "0,1,2,0.5,1.5,10\n";
        let candles = read_candles_csv(Cursor::new(input)).unwrap();
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].high, 2.0);
    }

    #[test]
    fn test_read_lenient_fields() {
        let input = "0,1,n/a,0.5,1.5\n";
        let candles = read_candles_csv(Cursor::new(input)).unwrap();
        assert_eq!(candles[0].high, 0.0);
        // Missing trailing volume column coerces to zero.
        assert_eq!(candles[0].volume, 0.0);
    }

    #[test]
    fn test_csv_round_trip() {
        let ticks = vec![Tick::new(0, 10.0, 1.0), Tick::new(500, 12.0, 2.0)];
        let mut output = Cursor::new(Vec::new());
        CsvFormatter::new().write_ticks(&ticks, &mut output).unwrap();

        let back = read_ticks_csv(Cursor::new(output.into_inner())).unwrap();
        assert_eq!(back, ticks);
    }
}
