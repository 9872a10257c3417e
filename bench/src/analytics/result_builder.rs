use crate::actors::outcome::WorkerOutcome;
use crate::benchmarks::benchmark::LoadRun;
use chat_bench_report::params::BenchmarkParams;
use chat_bench_report::result::BenchmarkResult;
use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::warn;

/// Accumulates worker outcomes into a [`BenchmarkResult`].
///
/// Counters only grow and timing lists are append-only; the result is
/// produced once by [`BenchmarkResultBuilder::build`].
#[derive(Debug, Default)]
pub struct BenchmarkResultBuilder {
    successful_connections: u64,
    failed_connections: u64,
    successful_messages: u64,
    failed_messages: u64,
    connection_times: Vec<f64>,
    response_times: Vec<f64>,
    errors: Vec<String>,
}

impl BenchmarkResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains a finished load run and finalizes its result.
    pub fn from_load_run(params: BenchmarkParams, mut run: LoadRun) -> BenchmarkResult {
        let mut builder = Self::new();
        builder.drain(&mut run.outcomes);
        builder.build(
            params,
            run.total_connections,
            run.total_messages,
            run.start_time,
            run.end_time,
            run.elapsed,
        )
    }

    /// Consumes every queued outcome. Must only be called once all senders
    /// are gone, otherwise outcomes still in flight are missed.
    pub fn drain(&mut self, outcomes: &mut UnboundedReceiver<WorkerOutcome>) {
        loop {
            match outcomes.try_recv() {
                Ok(outcome) => self.record(outcome),
                Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {
                    warn!("Outcome channel drained while workers may still be running");
                    break;
                }
            }
        }
    }

    pub fn record(&mut self, outcome: WorkerOutcome) {
        match outcome {
            WorkerOutcome::ConnectionSuccess(latency) => {
                self.successful_connections += 1;
                self.connection_times.push(latency.as_secs_f64());
            }
            WorkerOutcome::ConnectionFailure(reason) => {
                self.failed_connections += 1;
                self.errors.push(format!("Connection error: {reason}"));
            }
            WorkerOutcome::MessageSuccess(latency) => {
                self.successful_messages += 1;
                self.response_times.push(latency.as_secs_f64());
            }
            WorkerOutcome::MessageFailure(reason) => {
                self.failed_messages += 1;
                self.errors.push(format!("Message error: {reason}"));
            }
        }
    }

    pub fn build(
        self,
        params: BenchmarkParams,
        total_connections: u64,
        total_messages: u64,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        elapsed: Duration,
    ) -> BenchmarkResult {
        BenchmarkResult {
            uuid: uuid::Uuid::new_v4(),
            params,
            total_connections,
            successful_connections: self.successful_connections,
            failed_connections: self.failed_connections,
            total_messages,
            successful_messages: self.successful_messages,
            failed_messages: self.failed_messages,
            connection_times: self.connection_times,
            response_times: self.response_times,
            errors: self.errors,
            start_time,
            end_time,
            duration: elapsed.as_secs_f64(),
        }
    }
}
