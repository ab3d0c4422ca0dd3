//! # httplatlib
//!
//! A library for post-processing HTTP latency measurement logs.
//!
//! ## Overview
//!
//! A measurement run produces two logs:
//!
//! - **cnet log**: the proxy's access log. Every accepted request carries a
//!   `processing_time="..."` annotation, and `has_used_cache="false"` marks
//!   the first (uncached) request of each burst.
//! - **curl log**: tab-separated `curl -w` timings, one request per line.
//!
//! The library turns both into descriptive statistics:
//!
//! 1. **Data**: regroup the cnet log into one CSV row per burst (`reformat`)
//! 2. **Source**: load the regrouped CSV or the curl TSV as sample columns
//! 3. **Query**: summarize the samples into named series (`cnet_summary`,
//!    `curl_summary`)
//! 4. **Output**: lay the summary out as a table, optionally as LaTeX
//!
//! ## Example
//!
//! ```rust
//! use httplatlib::{cnet_summary, load_latency_table, reformat, SummaryTable};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let log = dir.path().join("cnet.log");
//! let csv = dir.path().join("formatted.csv");
//! fs::write(&log, concat!(
//!     "accepted 10.1.6.25 has_used_cache=\"false\" processing_time=\"3ms\"\n",
//!     "accepted 10.1.6.25 has_used_cache=\"true\" processing_time=\"500µs\"\n",
//!     "accepted 10.1.6.25 has_used_cache=\"false\" processing_time=\"5ms\"\n",
//! )).unwrap();
//!
//! reformat(&log, &csv, "10.1.6.25").unwrap();
//! let summary = cnet_summary(&load_latency_table(&csv).unwrap());
//! assert_eq!(summary.get("first_packets").unwrap().stats.mean, Some(4.0));
//!
//! let table = SummaryTable::from_summary(&summary);
//! assert_eq!(table.headers, vec!["first_packets", "the_other_packets", "all_packets"]);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    compute_max_width, emit_rows, extract_duration, parse_duration, reformat, render_rows,
    Describe, RegroupReport, Row,
};
pub use error::HttplatError;
pub use output::{SummaryTable, TableRow};
pub use query::{cnet_summary, curl_summary, SeriesSummary, Summary};
pub use source::{load_curl_log, load_latency_table, CurlColumn, CurlLog, LatencyTable};

/// Result type for httplatlib operations
pub type Result<T> = std::result::Result<T, HttplatError>;
