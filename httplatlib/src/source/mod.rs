//! Source loading: read the tabular inputs the summaries are built from.
//!
//! This module handles the second stage of the pipeline - turning files on
//! disk into columns of millisecond samples. It provides:
//!
//! - **Latency table**: the regrouped cnet CSV, one column per position in
//!   a request group
//! - **Curl log**: the tab-separated `curl -w` timings, one column per
//!   timing variable
//!
//! ## Example
//!
//! ```rust,ignore
//! use httplatlib::source::{load_curl_log, load_latency_table};
//!
//! let table = load_latency_table("formatted.csv")?;
//! let curl = load_curl_log("with_cnet.tsv")?;
//! ```

pub mod loader;

pub use loader::{
    load_curl_log, load_latency_table, CurlColumn, CurlLog, LatencyTable, CURL_DROPPED_COLUMNS,
};
