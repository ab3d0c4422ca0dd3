//! Table-ready data structures for summary output.
//!
//! This module provides `SummaryTable`, a presentation-ready layout of a
//! [`Summary`]: one column per series and one row per statistic, the same
//! orientation as a `describe()` table in a report.
//!
//! SummaryTable is a pure presentation layer - it only formats numbers into
//! strings. All computation happens in the query stage.

use serde::{Deserialize, Serialize};

use crate::data::stats::STAT_LABELS;
use crate::query::summary::Summary;

/// Placeholder for statistics that are undefined for the sample size.
pub const MISSING: &str = "NaN";

/// A single row in the table: a statistic and its value per series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Statistic label ("count", "mean", "25%", ...)
    pub label: String,
    /// Values for each series column (as strings, ready for display)
    pub values: Vec<String>,
}

/// Table-ready summary data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryTable {
    /// Optional caption (e.g., "cnet processing time [ms]")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers: series names, without the label column
    pub headers: Vec<String>,
    /// One row per statistic
    pub rows: Vec<TableRow>,
}

impl SummaryTable {
    /// Lay out a summary with statistics as rows and series as columns.
    pub fn from_summary(summary: &Summary) -> Self {
        let headers = summary.series.iter().map(|s| s.name.clone()).collect();

        let per_series: Vec<_> = summary.series.iter().map(|s| s.stats.values()).collect();

        let rows = STAT_LABELS
            .iter()
            .enumerate()
            .map(|(index, label)| TableRow {
                label: label.to_string(),
                values: per_series
                    .iter()
                    .map(|values| format_value(label, values[index]))
                    .collect(),
            })
            .collect();

        SummaryTable {
            title: None,
            headers,
            rows,
        }
    }

    /// Set the caption.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render as a booktabs LaTeX `tabular`.
    ///
    /// ```rust
    /// use httplatlib::{SeriesSummary, Summary, SummaryTable};
    ///
    /// let summary = Summary { series: vec![SeriesSummary::new("all_packets", &[1.0, 2.0])] };
    /// let latex = SummaryTable::from_summary(&summary).to_latex();
    /// assert!(latex.starts_with("\\begin{tabular}{lr}"));
    /// assert!(latex.contains("all\\_packets"));
    /// ```
    pub fn to_latex(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\\begin{{tabular}}{{l{}}}\n",
            "r".repeat(self.headers.len())
        ));
        output.push_str("\\toprule\n");

        let mut header = vec!["{}".to_string()];
        header.extend(self.headers.iter().map(String::as_str).map(escape_latex));
        output.push_str(&header.join(" & "));
        output.push_str(" \\\\\n\\midrule\n");

        for row in &self.rows {
            let mut cells = vec![escape_latex(&row.label)];
            cells.extend(row.values.iter().cloned());
            output.push_str(&cells.join(" & "));
            output.push_str(" \\\\\n");
        }

        output.push_str("\\bottomrule\n\\end{tabular}\n");
        output
    }
}

/// Format one statistic. Counts are integers, everything else has six
/// decimals.
fn format_value(label: &str, value: Option<f64>) -> String {
    match value {
        None => MISSING.to_string(),
        Some(v) if label == "count" => format!("{}", v as u64),
        Some(v) => format!("{:.6}", v),
    }
}

/// Escape characters that are special in LaTeX text.
fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '_' | '%' | '&' | '#' | '$' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::summary::SeriesSummary;

    fn sample_summary() -> Summary {
        Summary {
            series: vec![
                SeriesSummary::new("first_packets", &[2.0, 4.0]),
                SeriesSummary::new("single", &[1.5]),
            ],
        }
    }

    #[test]
    fn test_layout() {
        let table = SummaryTable::from_summary(&sample_summary());
        assert_eq!(table.headers, vec!["first_packets", "single"]);

        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["count", "mean", "std", "min", "25%", "50%", "75%", "max"]
        );
        assert_eq!(table.rows[0].values, vec!["2", "1"]);
        assert_eq!(table.rows[1].values, vec!["3.000000", "1.500000"]);
        // A single sample has no standard deviation.
        assert_eq!(table.rows[2].values[1], MISSING);
    }

    #[test]
    fn test_empty_series_renders_missing() {
        let summary = Summary {
            series: vec![SeriesSummary::new("empty", &[])],
        };
        let table = SummaryTable::from_summary(&summary);
        assert_eq!(table.rows[0].values, vec!["0"]);
        assert!(table.rows[1..].iter().all(|r| r.values == vec![MISSING]));
    }

    #[test]
    fn test_latex() {
        let latex = SummaryTable::from_summary(&sample_summary()).to_latex();
        let lines: Vec<&str> = latex.lines().collect();

        assert_eq!(lines[0], "\\begin{tabular}{lrr}");
        assert_eq!(lines[1], "\\toprule");
        assert_eq!(lines[2], "{} & first\\_packets & single \\\\");
        assert_eq!(lines[3], "\\midrule");
        assert_eq!(lines[4], "count & 2 & 1 \\\\");
        assert_eq!(lines[8], "25\\% & 2.500000 & 1.500000 \\\\");
        assert_eq!(lines[lines.len() - 2], "\\bottomrule");
        assert_eq!(lines[lines.len() - 1], "\\end{tabular}");
    }

    #[test]
    fn test_title_serialization() {
        let table = SummaryTable::from_summary(&sample_summary());
        let json = serde_json::to_value(&table).unwrap();
        assert!(json.get("title").is_none());

        let json = serde_json::to_value(table.with_title("cnet")).unwrap();
        assert_eq!(json["title"], "cnet");
    }
}
