//! Regroup a cnet log into one CSV row per request group.
//!
//! Every qualifying line contributes one `processing_time` value. A
//! cache-miss line starts a new row, so each row holds the first (uncached)
//! request followed by the cached ones that came after it. Rows vary in
//! length, so all closed rows are padded with empty fields to the widest
//! row in the file.
//!
//! The work is split into two traversals over the same lines:
//!
//! 1. [`compute_max_width`] finds the widest group.
//! 2. [`emit_rows`] collects the groups, which [`render_rows`] writes out
//!    padded to that width.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::HttplatError;
use crate::Result;

use super::line::{extract_duration, is_cache_miss, is_qualifying};

/// One request group: durations in log order, unit-normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub durations: Vec<String>,
}

impl Row {
    /// Number of fields in the row (before padding).
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// True if no duration has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }
}

/// What [`reformat`] wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegroupReport {
    /// Number of rows written
    pub rows: usize,
    /// Width every closed row was padded to
    pub max_width: usize,
    /// Number of durations written
    pub fields: usize,
}

/// Largest number of qualifying lines in any request group.
///
/// A cache-miss before anything has been collected does not produce an
/// empty group. The trailing group after the last marker counts too.
pub fn compute_max_width<I, S>(lines: I, target_host: &str) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut max_width = 0;
    let mut width = 0;

    for line in lines {
        let line = line.as_ref();
        if !is_qualifying(line, target_host) {
            continue;
        }
        if is_cache_miss(line) {
            max_width = max_width.max(width);
            width = 0;
        }
        width += 1;
    }

    max_width.max(width)
}

/// Collect request groups from the qualifying lines.
///
/// Fails with [`HttplatError::MissingProcessingTime`] on the first
/// qualifying line without a `processing_time` field. Line numbers in the
/// error are 1-based and count every line, qualifying or not.
pub fn emit_rows<I, S>(lines: I, target_host: &str) -> Result<Vec<Row>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rows = Vec::new();
    let mut current = Row::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if !is_qualifying(line, target_host) {
            continue;
        }
        if is_cache_miss(line) && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        let duration =
            extract_duration(line).ok_or_else(|| HttplatError::MissingProcessingTime {
                line_number: index + 1,
                line: line.to_string(),
            })?;
        current.durations.push(duration);
    }

    if !current.is_empty() {
        rows.push(current);
    }
    Ok(rows)
}

/// Render rows as CSV text.
///
/// Each field is written as `"<value>",`. Every row but the last gets
/// `max_width - len` extra commas before its newline; the last row is
/// terminated by a bare newline. No rows renders as a single newline.
pub fn render_rows(rows: &[Row], max_width: usize) -> String {
    let mut output = String::new();

    for (index, row) in rows.iter().enumerate() {
        for duration in &row.durations {
            output.push('"');
            output.push_str(duration);
            output.push_str("\",");
        }
        if index + 1 < rows.len() {
            output.push_str(&",".repeat(max_width.saturating_sub(row.len())));
            output.push('\n');
        }
    }

    output.push('\n');
    output
}

/// Regroup the cnet log at `source_path` into `output_path`.
///
/// Only lines containing both `accepted` and `target_host` are considered.
/// The destination is truncated and written once, after both passes have
/// succeeded, so a malformed line leaves no partial output behind.
///
/// # Example
///
/// ```rust
/// use httplatlib::reformat;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let src = dir.path().join("cnet.log");
/// let out = dir.path().join("formatted.csv");
/// fs::write(&src, concat!(
///     "accepted 10.1.6.25 has_used_cache=\"false\" processing_time=\"2.5ms\"\n",
///     "accepted 10.1.6.25 has_used_cache=\"true\" processing_time=\"40.1µs\"\n",
/// )).unwrap();
///
/// let report = reformat(&src, &out, "10.1.6.25").unwrap();
/// assert_eq!(report.rows, 1);
/// assert_eq!(fs::read_to_string(&out).unwrap(), "\"2.5ms\",\"40.1us\",\n");
/// ```
pub fn reformat(
    source_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    target_host: &str,
) -> Result<RegroupReport> {
    let source_path = source_path.as_ref();
    let output_path = output_path.as_ref();

    let bytes = fs::read(source_path).map_err(|e| HttplatError::FileRead {
        path: source_path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let max_width = compute_max_width(content.lines(), target_host);
    tracing::debug!(source = %source_path.display(), max_width, "width discovery done");

    let rows = emit_rows(content.lines(), target_host)?;
    let report = RegroupReport {
        rows: rows.len(),
        max_width,
        fields: rows.iter().map(Row::len).sum(),
    };

    fs::write(output_path, render_rows(&rows, max_width)).map_err(|e| {
        HttplatError::FileWrite {
            path: output_path.to_path_buf(),
            source: e,
        }
    })?;
    tracing::info!(
        output = %output_path.display(),
        rows = report.rows,
        fields = report.fields,
        "regrouped cnet log"
    );

    Ok(report)
}
