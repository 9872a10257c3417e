use crate::actors::outcome::WorkerOutcome;
use crate::actors::worker::{BenchmarkWorker, WorkerConfig};
use crate::error::ChatBenchError;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub fn spawn_worker(
    worker_id: u64,
    config: &Arc<WorkerConfig>,
    outcomes: &UnboundedSender<WorkerOutcome>,
) -> JoinHandle<()> {
    let worker = BenchmarkWorker::new(worker_id, config.clone(), outcomes.clone());
    tokio::spawn(worker.run())
}

/// Waits for every handle, then fails if any worker task panicked.
pub async fn join_workers(handles: Vec<JoinHandle<()>>) -> Result<(), ChatBenchError> {
    for result in join_all(handles).await {
        result?;
    }
    Ok(())
}
