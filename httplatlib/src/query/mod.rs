//! Query processing: turn loaded samples into named, described series.
//!
//! This module handles the third stage of the pipeline - deciding which
//! samples belong together and computing their statistics. It provides:
//!
//! - **cnet summary**: `first_packets`, `the_other_packets`, `all_packets`
//! - **curl summary**: one series per timing column
//!
//! ## Example
//!
//! ```rust,ignore
//! use httplatlib::query::cnet_summary;
//!
//! let summary = cnet_summary(&table);
//! let first = summary.get("first_packets").unwrap();
//! println!("median first request: {:?} ms", first.stats.p50);
//! ```

pub mod summary;

pub use summary::{
    cnet_summary, curl_summary, SeriesSummary, Summary, ALL_PACKETS, FIRST_PACKETS, OTHER_PACKETS,
};
