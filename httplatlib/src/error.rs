//! Error types for httplatlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while regrouping or summarizing latency logs
#[derive(Error, Debug)]
pub enum HttplatError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A qualifying log line has no processing_time field
    #[error("line {line_number}: no processing_time field in '{line}'")]
    MissingProcessingTime { line_number: usize, line: String },

    /// A duration string could not be parsed
    #[error("invalid duration '{value}': {reason}")]
    InvalidDuration { value: String, reason: String },

    /// A timing value in the curl log is not a number
    #[error("invalid number '{value}' in column '{column}' (row {row})")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// Malformed CSV/TSV input
    #[error("failed to parse '{path}': {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
