//! Output formatting: present summaries as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting summaries for display. It provides:
//!
//! - **SummaryTable**: headers, one row per statistic, LaTeX rendering
//! - **TableRow**: a statistic label with formatted values
//!
//! ## Example
//!
//! ```rust,ignore
//! use httplatlib::output::SummaryTable;
//!
//! let table = SummaryTable::from_summary(&summary);
//! // table.headers: ["first_packets", "the_other_packets", "all_packets"]
//! // table.rows: [TableRow { label: "count", values: ["120", "480", "600"] }, ...]
//! println!("{}", table.to_latex());
//! ```

pub mod table;

pub use table::{SummaryTable, TableRow, MISSING};
