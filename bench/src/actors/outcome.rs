use std::time::Duration;

/// Single event reported by a worker for one phase of its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerOutcome {
    ConnectionSuccess(Duration),
    ConnectionFailure(String),
    MessageSuccess(Duration),
    MessageFailure(String),
}
