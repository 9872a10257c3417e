use super::error_summary::ErrorSummary;
use super::params::BenchmarkParams;
use super::statistics::LatencyStatistics;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Finalized outcome of a single benchmark run.
///
/// Latencies are in seconds, in the order their outcomes were drained.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Benchmark run unique identifier
    pub uuid: Uuid,

    /// Parameters the run was executed with
    pub params: BenchmarkParams,

    pub total_connections: u64,
    pub successful_connections: u64,
    pub failed_connections: u64,

    pub total_messages: u64,
    pub successful_messages: u64,
    pub failed_messages: u64,

    /// Time to establish each successful connection
    pub connection_times: Vec<f64>,

    /// Round trip time of each successful command
    pub response_times: Vec<f64>,

    pub errors: Vec<String>,

    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,

    /// Wall clock duration of the run in seconds
    pub duration: f64,
}

impl BenchmarkResult {
    pub fn connection_statistics(&self) -> Option<LatencyStatistics> {
        LatencyStatistics::from_samples(&self.connection_times)
    }

    pub fn response_statistics(&self) -> Option<LatencyStatistics> {
        LatencyStatistics::from_samples(&self.response_times)
    }

    pub fn error_summary(&self) -> ErrorSummary {
        ErrorSummary::from_errors(&self.errors)
    }

    pub fn dump_to_json(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}
