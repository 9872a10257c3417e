use super::concurrent_benchmark::ConcurrentBenchmark;
use super::sustained_benchmark::SustainedBenchmark;
use crate::actors::outcome::WorkerOutcome;
use crate::actors::worker::WorkerConfig;
use crate::args::common::ChatBenchArgs;
use crate::error::ChatBenchError;
use async_trait::async_trait;
use chat_bench_report::benchmark_kind::BenchmarkKind;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Everything a finished load run hands over to the aggregator.
///
/// All workers have been joined and every sender dropped, so `outcomes`
/// yields each reported outcome exactly once and then closes.
#[derive(Debug)]
pub struct LoadRun {
    pub outcomes: UnboundedReceiver<WorkerOutcome>,
    pub total_connections: u64,
    pub total_messages: u64,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub elapsed: Duration,
}

impl From<&ChatBenchArgs> for Box<dyn Benchmarkable> {
    fn from(args: &ChatBenchArgs) -> Self {
        match args.kind() {
            BenchmarkKind::Concurrent => {
                let config = WorkerConfig {
                    server_address: args.server_address(),
                    messages_per_connection: args.messages,
                    message_delay: args.message_delay(),
                    operation_timeout: args.operation_timeout(),
                    consume_welcome: args.consume_welcome,
                };
                Box::new(ConcurrentBenchmark::new(
                    args.connections.get(),
                    Arc::new(config),
                ))
            }
            BenchmarkKind::Sustained => Box::new(SustainedBenchmark::new(
                args.sustained_duration(),
                args.rate.get(),
                Arc::new(SustainedBenchmark::worker_config(
                    args.server_address(),
                    args.operation_timeout(),
                    args.consume_welcome,
                )),
            )),
        }
    }
}

#[async_trait]
pub trait Benchmarkable: Send {
    /// Launches the workers and returns once every one of them has finished.
    async fn run(&mut self) -> Result<LoadRun, ChatBenchError>;
    fn kind(&self) -> BenchmarkKind;
    fn print_info(&self);
}
