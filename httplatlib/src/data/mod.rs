//! Data collection: classify log lines, regroup them, and describe samples.
//!
//! This module handles the first stage of the pipeline:
//!
//! - **Line classification**: qualifying lines, cache-miss markers, and
//!   `processing_time` extraction
//! - **Regrouping**: the two-pass cnet log reformatter (`reformat`)
//! - **Durations**: parsing `120.5ms` / `45.2us` style strings
//! - **Statistics**: `Describe` (count, mean, std, quartiles)
//!
//! ## Example
//!
//! ```rust,ignore
//! use httplatlib::data::{reformat, Describe};
//!
//! let report = reformat("cnet.log", "formatted.csv", "10.1.6.25")?;
//! println!("{} request groups", report.rows);
//! ```

pub mod duration;
pub mod line;
pub mod regroup;
pub mod stats;

pub use duration::{as_millis_f64, parse_duration};
pub use line::{extract_duration, is_cache_miss, is_qualifying};
pub use regroup::{compute_max_width, emit_rows, reformat, render_rows, RegroupReport, Row};
pub use stats::{Describe, STAT_LABELS};
