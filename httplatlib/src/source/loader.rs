//! Loaders for the tabular inputs: the regrouped cnet CSV and the curl TSV.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

use crate::data::duration::{as_millis_f64, parse_duration};
use crate::error::HttplatError;
use crate::Result;

/// Columns of the curl log that are not timings.
pub const CURL_DROPPED_COLUMNS: &[&str] = &["http_code", "speed_download"];

/// Regrouped cnet latencies, one vector of milliseconds per column.
///
/// Column `0` holds the first request of every group; padding cells are
/// dropped, so later columns are usually shorter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatencyTable {
    pub columns: Vec<Vec<f64>>,
}

impl LatencyTable {
    /// Build a table from rows of duration strings.
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for row in rows {
            table.push_row(row.as_ref().iter().map(AsRef::<str>::as_ref))?;
        }
        Ok(table)
    }

    /// Number of samples across all columns.
    pub fn sample_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    fn push_row<'a>(&mut self, cells: impl Iterator<Item = &'a str>) -> Result<()> {
        for (index, cell) in cells.enumerate() {
            if cell.trim().is_empty() {
                continue;
            }
            let millis = as_millis_f64(parse_duration(cell)?);
            if self.columns.len() <= index {
                self.columns.resize_with(index + 1, Vec::new);
            }
            self.columns[index].push(millis);
        }
        Ok(())
    }
}

/// One timing column of the curl log, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CurlColumn {
    pub name: String,
    pub samples: Vec<f64>,
}

/// Timing columns of a curl `-w` log.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CurlLog {
    pub columns: Vec<CurlColumn>,
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| HttplatError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> HttplatError + '_ {
    move |e| HttplatError::Csv {
        path: path.to_path_buf(),
        source: e,
    }
}

/// Load the CSV written by [`crate::reformat`].
///
/// The file has no header, rows of varying length and empty padding cells.
/// Every non-empty cell must be a duration such as `"1.5ms"`.
pub fn load_latency_table(path: impl AsRef<Path>) -> Result<LatencyTable> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(open(path)?);

    let mut table = LatencyTable::default();
    for record in reader.records() {
        let record: StringRecord = record.map_err(csv_error(path))?;
        table.push_row(record.iter())?;
    }

    tracing::debug!(
        path = %path.display(),
        columns = table.columns.len(),
        samples = table.sample_count(),
        "loaded latency table"
    );
    Ok(table)
}

/// Load a tab-separated curl timing log.
///
/// The first line names the columns (`time_connect`, `time_total`, ...).
/// `http_code` and `speed_download` are dropped; every other value is read
/// as seconds and converted to milliseconds. Empty cells are skipped.
pub fn load_curl_log(path: impl AsRef<Path>) -> Result<CurlLog> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(open(path)?);

    let headers = reader.headers().map_err(csv_error(path))?.clone();
    let kept: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, name)| !CURL_DROPPED_COLUMNS.contains(&name.trim()))
        .map(|(index, _)| index)
        .collect();

    let mut columns: Vec<CurlColumn> = kept
        .iter()
        .map(|&index| CurlColumn {
            name: headers[index].trim().to_string(),
            samples: Vec::new(),
        })
        .collect();

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error(path))?;
        for (column, &index) in columns.iter_mut().zip(&kept) {
            let cell = record.get(index).unwrap_or("").trim();
            if cell.is_empty() {
                continue;
            }
            let seconds: f64 = cell.parse().map_err(|_| HttplatError::InvalidNumber {
                column: column.name.clone(),
                row: row + 1,
                value: cell.to_string(),
            })?;
            column.samples.push(seconds * 1000.0);
        }
    }

    tracing::debug!(path = %path.display(), columns = columns.len(), "loaded curl log");
    Ok(CurlLog { columns })
}
