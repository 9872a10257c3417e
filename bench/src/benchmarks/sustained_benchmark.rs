use super::benchmark::{Benchmarkable, LoadRun};
use super::common::{join_workers, spawn_worker};
use crate::actors::worker::WorkerConfig;
use crate::args::defaults::DEFAULT_BATCH_PAUSE;
use crate::error::ChatBenchError;
use async_trait::async_trait;
use chat_bench_report::benchmark_kind::BenchmarkKind;
use chrono::Local;
use human_repr::HumanDuration;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::unbounded_channel;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

const MESSAGES_PER_SUSTAINED_CONNECTION: u32 = 1;

/// Sustained mode: batches of `rate` single-command connections, each batch
/// joined before a short pause, until `duration` has passed.
///
/// The resulting connection rate is approximate. The clock is only checked
/// between batches, so the last batch may run past the duration.
pub struct SustainedBenchmark {
    duration: Duration,
    rate: u32,
    worker_config: Arc<WorkerConfig>,
    batch_pause: Duration,
}

impl SustainedBenchmark {
    pub fn new(duration: Duration, rate: u32, worker_config: Arc<WorkerConfig>) -> Self {
        Self {
            duration,
            rate,
            worker_config,
            batch_pause: DEFAULT_BATCH_PAUSE,
        }
    }

    pub fn with_batch_pause(mut self, batch_pause: Duration) -> Self {
        self.batch_pause = batch_pause;
        self
    }

    pub fn worker_config(
        server_address: String,
        operation_timeout: Duration,
        consume_welcome: bool,
    ) -> WorkerConfig {
        WorkerConfig {
            server_address,
            messages_per_connection: MESSAGES_PER_SUSTAINED_CONNECTION,
            message_delay: Duration::ZERO,
            operation_timeout,
            consume_welcome,
        }
    }
}

#[async_trait]
impl Benchmarkable for SustainedBenchmark {
    async fn run(&mut self) -> Result<LoadRun, ChatBenchError> {
        let (sender, receiver) = unbounded_channel();
        let start_time = Local::now();
        let started = Instant::now();
        let deadline = started.checked_add(self.duration).ok_or_else(|| {
            ChatBenchError::InvalidArgument(format!(
                "sustained duration of {}s is too long",
                self.duration.as_secs()
            ))
        })?;

        let mut launched: u64 = 0;
        let mut batches: u64 = 0;
        while Instant::now() < deadline {
            let mut handles = Vec::with_capacity(self.rate as usize);
            for _ in 0..self.rate {
                handles.push(spawn_worker(launched, &self.worker_config, &sender));
                launched += 1;
            }
            join_workers(handles).await?;
            batches += 1;
            debug!("Batch #{batches} finished, {launched} connections launched so far");

            sleep(self.batch_pause).await;
        }
        drop(sender);

        let elapsed = started.elapsed();
        info!(
            "Sustained test finished: {batches} batches, {launched} connections in {}",
            elapsed.human_duration()
        );

        Ok(LoadRun {
            outcomes: receiver,
            total_connections: launched,
            total_messages: launched * self.worker_config.messages_per_connection as u64,
            start_time,
            end_time: Local::now(),
            elapsed,
        })
    }

    fn kind(&self) -> BenchmarkKind {
        BenchmarkKind::Sustained
    }

    fn print_info(&self) {
        info!(
            "Starting sustained load test: {} duration, {} connections per batch, server: {}",
            self.duration.human_duration(),
            self.rate,
            self.worker_config.server_address
        );
    }
}
