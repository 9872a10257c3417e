use super::benchmark::{Benchmarkable, LoadRun};
use super::common::{join_workers, spawn_worker};
use crate::actors::worker::WorkerConfig;
use crate::args::defaults::DEFAULT_LAUNCH_STAGGER;
use crate::error::ChatBenchError;
use async_trait::async_trait;
use chat_bench_report::benchmark_kind::BenchmarkKind;
use chrono::Local;
use human_repr::HumanDuration;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::unbounded_channel;
use tokio::time::{sleep, Instant};
use tracing::info;

/// Burst mode: every connection launched together and joined once.
pub struct ConcurrentBenchmark {
    connections: u32,
    worker_config: Arc<WorkerConfig>,
    launch_stagger: Duration,
}

impl ConcurrentBenchmark {
    pub fn new(connections: u32, worker_config: Arc<WorkerConfig>) -> Self {
        Self {
            connections,
            worker_config,
            launch_stagger: DEFAULT_LAUNCH_STAGGER,
        }
    }

    pub fn with_launch_stagger(mut self, launch_stagger: Duration) -> Self {
        self.launch_stagger = launch_stagger;
        self
    }

    pub fn total_messages(&self) -> u64 {
        self.connections as u64 * self.worker_config.messages_per_connection as u64
    }
}

#[async_trait]
impl Benchmarkable for ConcurrentBenchmark {
    async fn run(&mut self) -> Result<LoadRun, ChatBenchError> {
        let (sender, receiver) = unbounded_channel();
        let start_time = Local::now();
        let started = Instant::now();

        let mut handles = Vec::with_capacity(self.connections as usize);
        for worker_id in 0..self.connections as u64 {
            handles.push(spawn_worker(worker_id, &self.worker_config, &sender));
            // Keeps the server's accept queue from overflowing.
            if !self.launch_stagger.is_zero() {
                sleep(self.launch_stagger).await;
            }
        }
        drop(sender);

        info!("All {} connections launched, waiting for workers...", self.connections);
        join_workers(handles).await?;

        let elapsed = started.elapsed();
        info!("All workers finished in {}", elapsed.human_duration());

        Ok(LoadRun {
            outcomes: receiver,
            total_connections: self.connections as u64,
            total_messages: self.total_messages(),
            start_time,
            end_time: Local::now(),
            elapsed,
        })
    }

    fn kind(&self) -> BenchmarkKind {
        BenchmarkKind::Concurrent
    }

    fn print_info(&self) {
        info!(
            "Starting concurrent test: {} connections, {} messages each, delay: {}, server: {}",
            self.connections,
            self.worker_config.messages_per_connection,
            self.worker_config.message_delay.human_duration(),
            self.worker_config.server_address
        );
    }
}
