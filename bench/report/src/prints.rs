use crate::error_summary::ErrorSummary;
use crate::result::BenchmarkResult;
use crate::statistics::{per_second, success_rate, LatencyStatistics};
use colored::Colorize;
use std::fmt::Write;
use tracing::info;

const SEPARATOR_WIDTH: usize = 60;

impl BenchmarkResult {
    pub fn print_summary(&self) {
        info!(
            "Benchmark: {}, {}, server: {}",
            self.params.benchmark_kind,
            self.params.format_load_info(),
            self.params.server_address
        );
        println!("{}", self.formatted_summary());
    }

    pub fn formatted_summary(&self) -> String {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out);
        let _ = writeln!(out, "{separator}");
        let _ = writeln!(out, "{}", "CHAT BENCHMARK RESULTS".bold());
        let _ = writeln!(out, "{separator}");
        let _ = writeln!(out, "Duration: {:.2} seconds", self.duration);
        let _ = writeln!(out, "Start: {}", self.start_time.to_rfc3339());
        let _ = writeln!(out, "End: {}", self.end_time.to_rfc3339());

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "CONNECTION STATISTICS:".blue());
        let _ = writeln!(out, "   Total Attempted: {}", self.total_connections);
        let _ = writeln!(out, "   Successful: {}", self.successful_connections);
        let _ = writeln!(out, "   Failed: {}", self.failed_connections);
        if let Some(stats) = self.connection_statistics() {
            write_spread(&mut out, "Connection Time", &stats);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "MESSAGE STATISTICS:".blue());
        let _ = writeln!(out, "   Total Messages: {}", self.total_messages);
        let _ = writeln!(out, "   Successful: {}", self.successful_messages);
        let _ = writeln!(out, "   Failed: {}", self.failed_messages);
        if let Some(stats) = self.response_statistics() {
            write_spread(&mut out, "Response Time", &stats);
            let _ = writeln!(out, "   50th Percentile: {:.3}s", stats.p50);
            let _ = writeln!(out, "   95th Percentile: {:.3}s", stats.p95);
            let _ = writeln!(out, "   99th Percentile: {:.3}s", stats.p99);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "PERFORMANCE METRICS:".green());
        let _ = writeln!(
            out,
            "   Connection Success Rate: {:.1}%",
            success_rate(self.successful_connections, self.total_connections)
        );
        let _ = writeln!(
            out,
            "   Message Success Rate: {:.1}%",
            success_rate(self.successful_messages, self.total_messages)
        );
        let _ = writeln!(
            out,
            "   Connections/Second: {:.1}",
            per_second(self.successful_connections, self.duration)
        );
        let _ = writeln!(
            out,
            "   Messages/Second: {:.1}",
            per_second(self.successful_messages, self.duration)
        );

        let errors = self.error_summary();
        if !errors.is_empty() {
            write_errors(&mut out, &errors);
        }

        let _ = write!(out, "{separator}");
        out
    }
}

fn write_spread(out: &mut String, label: &str, stats: &LatencyStatistics) {
    let _ = writeln!(out, "   Avg {label}: {:.3}s", stats.mean);
    let _ = writeln!(out, "   Min {label}: {:.3}s", stats.min);
    let _ = writeln!(out, "   Max {label}: {:.3}s", stats.max);
}

fn write_errors(out: &mut String, errors: &ErrorSummary) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", format!("ERRORS ({}):", errors.total).red());
    for entry in &errors.entries {
        let _ = writeln!(out, "   {} (x{})", entry.message, entry.occurrences);
    }
    if errors.remaining > 0 {
        let _ = writeln!(out, "   ... and {} more errors", errors.remaining);
    }
}

#[cfg(test)]
mod tests {
    use crate::params::BenchmarkParams;
    use crate::result::BenchmarkResult;
    use chrono::Local;
    use uuid::Uuid;

    fn result_with(
        response_times: Vec<f64>,
        connection_times: Vec<f64>,
        errors: Vec<String>,
    ) -> BenchmarkResult {
        colored::control::set_override(false);
        let now = Local::now();
        BenchmarkResult {
            uuid: Uuid::new_v4(),
            params: BenchmarkParams::default(),
            total_connections: 4,
            successful_connections: connection_times.len() as u64,
            failed_connections: 4 - connection_times.len() as u64,
            total_messages: 8,
            successful_messages: response_times.len() as u64,
            failed_messages: 0,
            connection_times,
            response_times,
            errors,
            start_time: now,
            end_time: now,
            duration: 2.0,
        }
    }

    #[test]
    fn latency_lines_are_skipped_without_samples() {
        let summary = result_with(vec![], vec![], vec![]).formatted_summary();
        assert!(summary.contains("Total Attempted: 4"));
        assert!(!summary.contains("Avg Connection Time"));
        assert!(!summary.contains("50th Percentile"));
        assert!(summary.contains("Connection Success Rate: 0.0%"));
        assert!(!summary.contains("ERRORS"));
    }

    #[test]
    fn summary_reports_rates_and_percentiles() {
        let summary = result_with(
            vec![0.001, 0.002, 0.003, 0.004],
            vec![0.010, 0.020],
            vec![],
        )
        .formatted_summary();
        assert!(summary.contains("Avg Connection Time: 0.015s"));
        assert!(summary.contains("Max Response Time: 0.004s"));
        // floor(4 * 0.95) = 3
        assert!(summary.contains("95th Percentile: 0.004s"));
        assert!(summary.contains("50th Percentile: 0.003s"));
        assert!(summary.contains("Connection Success Rate: 50.0%"));
        assert!(summary.contains("Message Success Rate: 50.0%"));
        assert!(summary.contains("Connections/Second: 1.0"));
        assert!(summary.contains("Messages/Second: 2.0"));
    }

    #[test]
    fn error_section_is_capped() {
        let errors = (0..13)
            .map(|i| {
                if i % 2 == 0 {
                    "Connection error: Connection refused".to_string()
                } else {
                    "Message error: No response".to_string()
                }
            })
            .collect();
        let summary = result_with(vec![], vec![], errors).formatted_summary();
        assert!(summary.contains("ERRORS (13):"));
        assert!(summary.contains("Connection error: Connection refused (x5)"));
        assert!(summary.contains("Message error: No response (x5)"));
        assert!(summary.contains("... and 3 more errors"));
    }
}
