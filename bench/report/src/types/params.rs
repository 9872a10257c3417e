use super::benchmark_kind::BenchmarkKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BenchmarkParams {
    pub benchmark_kind: BenchmarkKind,
    pub server_address: String,
    pub connections: u32,
    pub messages_per_connection: u32,
    pub delay_secs: f64,
    pub duration_secs: u64,
    pub rate: u32,
    pub timeout_secs: u64,
    pub consume_welcome: bool,
}

impl BenchmarkParams {
    pub fn format_load_info(&self) -> String {
        match self.benchmark_kind {
            BenchmarkKind::Concurrent => format!(
                "{} connections, {} messages each, {:.3}s delay",
                self.connections, self.messages_per_connection, self.delay_secs
            ),
            BenchmarkKind::Sustained => format!(
                "{}s duration, {} connections per batch",
                self.duration_secs, self.rate
            ),
        }
    }
}
