//! Observation loading — CSV columns or JSON arrays from disk.
//!
//! `.json` files must hold a flat array of numbers. Any other extension is
//! read as CSV with a header row; the requested column (or the first one) is
//! parsed as `f64`. Blank cells are errors, since the series must not have gaps.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("parse JSON observations: {0}")]
    Json(#[from] serde_json::Error),

    #[error("column '{0}' not found in CSV header")]
    MissingColumn(String),

    #[error("row {row}: cannot parse '{value}' as a number")]
    BadValue { row: usize, value: String },

    #[error("no observations in {}", path.display())]
    Empty { path: PathBuf },
}

/// Load observations from `path`, reading `column` for CSV input.
pub fn load_observations(path: &Path, column: Option<&str>) -> Result<Vec<f64>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let values = if is_json {
        parse_json(&content)?
    } else {
        parse_csv(&content, column)?
    };

    if values.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), count = values.len(), "loaded observations");
    Ok(values)
}

/// Parse a JSON array of numbers.
pub fn parse_json(content: &str) -> Result<Vec<f64>, LoadError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse one column of a headed CSV document.
pub fn parse_csv(content: &str, column: Option<&str>) -> Result<Vec<f64>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let index = match column {
        Some(name) => reader
            .headers()?
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))?,
        None => 0,
    };

    let mut values = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1, so the first record is row 2.
        let row = i + 2;
        let cell = record.get(index).unwrap_or("");
        let value = cell.parse::<f64>().map_err(|_| LoadError::BadValue {
            row,
            value: cell.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Write observations as a one-column CSV with a `value` header.
pub fn write_csv<W: std::io::Write>(writer: W, values: &[f64]) -> Result<(), LoadError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["value"])?;
    for v in values {
        wtr.write_record([v.to_string()])?;
    }
    wtr.flush().map_err(|e| LoadError::Csv(e.into()))?;
    Ok(())
}
