//! Template rendering for CLI output using outstanding

use console::Style;
use httplatlib::{Summary, SummaryTable};
use outstanding::Theme;
use serde::Serialize;

/// Include template at compile time
const SUMMARY_TABLE_TEMPLATE: &str = include_str!("../templates/summary_table.jinja");

/// Width of the statistic label column
const LABEL_WIDTH: usize = 8;

/// Minimum width of a series column
const MIN_CELL_WIDTH: usize = 12;

/// How a summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Text,
    /// The raw summary as pretty-printed JSON
    Json,
    /// A booktabs tabular, ready to paste into a report
    Latex,
}

impl OutputFormat {
    /// Values accepted by `--output`.
    pub const NAMES: [&'static str; 3] = ["text", "json", "latex"];

    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "latex" => OutputFormat::Latex,
            _ => OutputFormat::Text,
        }
    }
}

/// Data context for the summary table template
#[derive(Debug, Serialize)]
struct SummaryTableContext {
    /// Caption line
    title: Option<String>,
    /// Pre-padded header line
    header: String,
    /// Separator line (dashes)
    separator: String,
    /// Pre-padded statistic rows
    rows: Vec<String>,
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new().add("title", Style::new().bold())
}

/// Pad every column of the table so the template only has to print lines.
fn build_context(table: &SummaryTable) -> SummaryTableContext {
    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.values.get(index))
                .map(String::len)
                .chain([header.len(), MIN_CELL_WIDTH])
                .max()
                .unwrap_or(MIN_CELL_WIDTH)
        })
        .collect();

    let mut header = format!("{:<width$}", "", width = LABEL_WIDTH);
    for (name, width) in table.headers.iter().zip(&widths) {
        header.push_str(&format!(" {:>width$}", name, width = width));
    }

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut line = format!("{:<width$}", row.label, width = LABEL_WIDTH);
            for (value, width) in row.values.iter().zip(&widths) {
                line.push_str(&format!(" {:>width$}", value, width = width));
            }
            line
        })
        .collect();

    let separator = "-".repeat(header.len());

    SummaryTableContext {
        title: table.title.clone(),
        header,
        separator,
        rows,
    }
}

/// Render a summary in the requested format.
pub fn render_summary(
    summary: &Summary,
    title: &str,
    format: OutputFormat,
) -> Result<String, anyhow::Error> {
    match format {
        OutputFormat::Json => {
            let mut output = serde_json::to_string_pretty(summary)?;
            output.push('\n');
            Ok(output)
        }
        OutputFormat::Latex => Ok(SummaryTable::from_summary(summary).to_latex()),
        OutputFormat::Text => {
            let table = SummaryTable::from_summary(summary).with_title(title);
            let context = serde_json::to_value(build_context(&table))?;
            let output = outstanding::render(SUMMARY_TABLE_TEMPLATE, &context, &create_theme())
                .map_err(|e| anyhow::anyhow!("failed to render table: {e}"))?;
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httplatlib::SeriesSummary;

    fn summary() -> Summary {
        Summary {
            series: vec![
                SeriesSummary::new("first_packets", &[1.0, 2.0]),
                SeriesSummary::new("a_very_long_series_name", &[3.0]),
            ],
        }
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("latex"), OutputFormat::Latex);
        assert_eq!(OutputFormat::from_name("text"), OutputFormat::Text);
    }

    #[test]
    fn test_context_columns_aligned() {
        let table = SummaryTable::from_summary(&summary());
        let context = build_context(&table);

        assert_eq!(context.rows.len(), 8);
        assert!(context.rows.iter().all(|r| r.len() == context.header.len()));
        assert_eq!(context.separator.len(), context.header.len());
        assert!(context.header.contains("a_very_long_series_name"));
        assert!(context.rows[0].starts_with("count"));
    }

    #[test]
    fn test_json_is_raw_summary() {
        let output = render_summary(&summary(), "ignored", OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["series"][0]["name"], "first_packets");
        assert_eq!(parsed["series"][0]["stats"]["count"], 2);
    }

    #[test]
    fn test_latex_output() {
        let output = render_summary(&summary(), "ignored", OutputFormat::Latex).unwrap();
        assert!(output.starts_with("\\begin{tabular}{lrr}"));
        assert!(output.contains("first\\_packets"));
    }
}
