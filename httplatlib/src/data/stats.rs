//! Descriptive statistics over latency samples.
//!
//! [`Describe`] reports the usual eight figures for a series of samples:
//! count, mean, sample standard deviation, min, the quartiles and max.
//! Percentiles interpolate linearly between the two closest ranks.

use serde::{Deserialize, Serialize};

/// Statistic labels, in display order.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Summary statistics for one series of samples (milliseconds).
///
/// Figures that are undefined for the sample size are `None`: everything
/// except `count` for an empty series, and `std` for a single sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Describe {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

impl Describe {
    /// Compute statistics from raw samples. NaN samples are dropped.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return Self::default();
        }
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (count - 1) as f64;
            Some(variance.sqrt())
        } else {
            None
        };

        Self {
            count,
            mean: Some(mean),
            std,
            min: sorted.first().copied(),
            p25: Some(percentile(&sorted, 0.25)),
            p50: Some(percentile(&sorted, 0.50)),
            p75: Some(percentile(&sorted, 0.75)),
            max: sorted.last().copied(),
        }
    }

    /// Values in [`STAT_LABELS`] order.
    ///
    /// `count` is reported as a float so every entry has the same shape.
    pub fn values(&self) -> [Option<f64>; 8] {
        [
            Some(self.count as f64),
            self.mean,
            self.std,
            self.min,
            self.p25,
            self.p50,
            self.p75,
            self.max,
        ]
    }
}

/// Linear-interpolated quantile `q` (0.0..=1.0) of non-empty sorted data.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
