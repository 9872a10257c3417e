use serde::{Deserialize, Serialize};

/// Descriptive statistics of a latency list, all values in seconds.
///
/// Percentiles are nearest-rank by truncation (`sorted[floor(len * p)]`),
/// not interpolated, so they are an approximation of the true percentile.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatencyStatistics {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

impl LatencyStatistics {
    /// Returns `None` for an empty sample list.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;

        Some(Self {
            count,
            mean,
            min: sorted[0],
            max: sorted[count - 1],
            p50: percentile(&sorted, 0.50),
            p95: percentile(&sorted, 0.95),
            p99: percentile(&sorted, 0.99),
        })
    }
}

/// Element at `floor(len * p)` of an ascending list, clamped to the last index.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = (sorted.len() as f64 * p).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// Percentage of `part` in `total`, 0 when `total` is 0.
pub fn success_rate(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Events per second, 0 when the duration is not positive.
pub fn per_second(count: u64, duration_secs: f64) -> f64 {
    if duration_secs <= 0.0 {
        return 0.0;
    }
    count as f64 / duration_secs
}
