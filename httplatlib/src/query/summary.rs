//! Summaries: named series of samples with their descriptive statistics.

use serde::{Deserialize, Serialize};

use crate::data::stats::Describe;
use crate::source::loader::{CurlLog, LatencyTable};

/// Series holding the first request of every group.
pub const FIRST_PACKETS: &str = "first_packets";
/// Series holding every request after the first.
pub const OTHER_PACKETS: &str = "the_other_packets";
/// Series holding every request.
pub const ALL_PACKETS: &str = "all_packets";

/// Statistics for one named series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub name: String,
    pub stats: Describe,
}

impl SeriesSummary {
    pub fn new(name: impl Into<String>, samples: &[f64]) -> Self {
        Self {
            name: name.into(),
            stats: Describe::from_samples(samples),
        }
    }
}

/// An ordered set of series summaries, all in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub series: Vec<SeriesSummary>,
}

impl Summary {
    /// Look up a series by name.
    pub fn get(&self, name: &str) -> Option<&SeriesSummary> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Summarize a regrouped cnet table.
///
/// The first column is the uncached request of each group. Everything to
/// its right was served after it, so those columns are pooled together.
pub fn cnet_summary(table: &LatencyTable) -> Summary {
    let first: &[f64] = table.columns.first().map(Vec::as_slice).unwrap_or(&[]);
    let others: Vec<f64> = table.columns.iter().skip(1).flatten().copied().collect();
    let all: Vec<f64> = first.iter().chain(&others).copied().collect();

    Summary {
        series: vec![
            SeriesSummary::new(FIRST_PACKETS, first),
            SeriesSummary::new(OTHER_PACKETS, &others),
            SeriesSummary::new(ALL_PACKETS, &all),
        ],
    }
}

/// Summarize every timing column of a curl log, in header order.
pub fn curl_summary(log: &CurlLog) -> Summary {
    Summary {
        series: log
            .columns
            .iter()
            .map(|c| SeriesSummary::new(&c.name, &c.samples))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::loader::CurlColumn;

    #[test]
    fn test_cnet_summary_splits_first_column() {
        let rows = vec![
            vec!["10ms", "1ms", ""],
            vec!["20ms", "2ms", "3ms"],
        ];
        let table = LatencyTable::from_rows(&rows).unwrap();
        let summary = cnet_summary(&table);

        let names: Vec<&str> = summary.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![FIRST_PACKETS, OTHER_PACKETS, ALL_PACKETS]);

        let first = &summary.get(FIRST_PACKETS).unwrap().stats;
        assert_eq!(first.count, 2);
        assert_eq!(first.mean, Some(15.0));

        let others = &summary.get(OTHER_PACKETS).unwrap().stats;
        assert_eq!(others.count, 3);
        assert_eq!(others.mean, Some(2.0));
        assert_eq!(others.max, Some(3.0));

        let all = &summary.get(ALL_PACKETS).unwrap().stats;
        assert_eq!(all.count, 5);
        assert_eq!(all.min, Some(1.0));
        assert_eq!(all.max, Some(20.0));
    }

    #[test]
    fn test_cnet_summary_of_empty_table() {
        let summary = cnet_summary(&LatencyTable::default());
        assert_eq!(summary.series.len(), 3);
        assert!(summary.series.iter().all(|s| s.stats.count == 0));
    }

    #[test]
    fn test_cnet_summary_single_column() {
        let table = LatencyTable {
            columns: vec![vec![1.0, 3.0]],
        };
        let summary = cnet_summary(&table);
        assert_eq!(summary.get(OTHER_PACKETS).unwrap().stats.count, 0);
        assert_eq!(summary.get(ALL_PACKETS).unwrap().stats.mean, Some(2.0));
    }

    #[test]
    fn test_curl_summary_keeps_column_order() {
        let log = CurlLog {
            columns: vec![
                CurlColumn {
                    name: "time_connect".to_string(),
                    samples: vec![1.0, 3.0],
                },
                CurlColumn {
                    name: "time_total".to_string(),
                    samples: vec![5.0],
                },
            ],
        };
        let summary = curl_summary(&log);
        assert_eq!(summary.series[0].name, "time_connect");
        assert_eq!(summary.series[0].stats.mean, Some(2.0));
        assert_eq!(summary.series[1].name, "time_total");
        assert_eq!(summary.series[1].stats.count, 1);
        assert!(summary.get("http_code").is_none());
    }
}
