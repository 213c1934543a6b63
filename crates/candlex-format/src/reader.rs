//! File readers dispatching on the file extension.

use candlex_types::{CandleSeries, Tick};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::csv::{read_candles_csv, read_ticks_csv};
use crate::{FormatError, OutputFormat};

fn format_of(path: &Path) -> Result<OutputFormat, FormatError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| FormatError::UnknownFormat(path.display().to_string()))?
        .parse()
}

fn json_array(reader: impl BufRead) -> Result<serde_json::Value, FormatError> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    if !value.is_array() {
        return Err(FormatError::InvalidInput(
            "expected a JSON array of records".to_string(),
        ));
    }
    Ok(value)
}

/// Reads a candle series from a CSV, JSON, or NDJSON file.
///
/// JSON candles may be record-form objects or positional
/// `[time, open, high, low, close, volume]` arrays; the detected form is
/// preserved in the returned [`CandleSeries`]. CSV input always decodes to
/// record form.
///
/// # Errors
///
/// Returns [`FormatError::UnknownFormat`] for an unrecognized extension,
/// [`FormatError::InvalidInput`] when a JSON payload is not an array, and
/// I/O or JSON errors from decoding.
pub fn read_candles(path: &Path) -> Result<CandleSeries, FormatError> {
    let format = format_of(path)?;
    let reader = BufReader::new(File::open(path)?);

    match format {
        OutputFormat::Csv => Ok(CandleSeries::Records(read_candles_csv(reader)?)),
        OutputFormat::Json => Ok(serde_json::from_value(json_array(reader)?)?),
        OutputFormat::Ndjson => {
            let mut candles = Vec::new();
            for line in reader.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                candles.push(serde_json::from_str(&line)?);
            }
            Ok(CandleSeries::Records(candles))
        }
    }
}

/// Reads ticks from a CSV, JSON, or NDJSON file.
///
/// # Errors
///
/// Same failure modes as [`read_candles`].
pub fn read_ticks(path: &Path) -> Result<Vec<Tick>, FormatError> {
    let format = format_of(path)?;
    let reader = BufReader::new(File::open(path)?);

    match format {
        OutputFormat::Csv => read_ticks_csv(reader),
        OutputFormat::Json => Ok(serde_json::from_value(json_array(reader)?)?),
        OutputFormat::Ndjson => {
            let mut ticks = Vec::new();
            for line in reader.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                ticks.push(serde_json::from_str(&line)?);
            }
            Ok(ticks)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("candlex-reader-{name}"));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_json_record_candles() {
        let path = write_temp(
            "records.json",
            r#"[{"time":0,"open":1,"high":2,"low":0.5,"close":1.5,"volume":10}]"#,
        );
        let series = read_candles(&path).unwrap();
        assert!(matches!(series, CandleSeries::Records(_)));
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_read_json_row_candles() {
        let path = write_temp("rows.json", "[[0,1,2,0.5,1.5,10]]");
        let series = read_candles(&path).unwrap();
        assert!(matches!(series, CandleSeries::Rows(_)));
    }

    #[test]
    fn test_read_csv_candles() {
        let path = write_temp("candles.csv", "time,open,high,low,close,volume\n0,1,2,0.5,1.5,10\n");
        let series = read_candles(&path).unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_non_array_json_rejected() {
        let path = write_temp("object.json", r#"{"time":0}"#);
        let err = read_candles(&path).unwrap_err();
        assert!(matches!(err, FormatError::InvalidInput(_)));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let path = write_temp("ticks.xml", "<ticks/>");
        let err = read_ticks(&path).unwrap_err();
        assert!(matches!(err, FormatError::UnknownFormat(_)));
    }

    #[test]
    fn test_read_ndjson_ticks() {
        let path = write_temp(
            "ticks.ndjson",
            "{\"time\":0,\"price\":10,\"quantity\":1}\n{\"time\":500,\"price\":12,\"quantity\":2}\n",
        );
        let ticks = read_ticks(&path).unwrap();
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[1].time, 500);
    }
}
