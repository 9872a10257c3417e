use std::time::Duration;
use thiserror::Error;
use tokio::io;

#[derive(Debug, Error)]
pub enum ChatBenchError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Cannot connect to chat server at {address}: {reason}")]
    ServerUnreachable { address: String, reason: String },
    #[error("Cannot write results to file: {0}")]
    CannotWriteResults(String),
    #[error("Benchmark worker failure: {0}")]
    WorkerFailure(#[from] tokio::task::JoinError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Failure of a single worker socket operation, reported as an outcome reason.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("{0}")]
    Connect(io::Error),
    #[error("connect timed out after {0:?}")]
    ConnectTimeout(Duration),
    #[error("send failed: {0}")]
    Send(io::Error),
    #[error("send timed out after {0:?}")]
    SendTimeout(Duration),
    #[error("receive failed: {0}")]
    Receive(io::Error),
    #[error("timed out after {0:?} waiting for response")]
    ReceiveTimeout(Duration),
    #[error("No response")]
    NoResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_keeps_the_cause() {
        let error: ChatBenchError =
            io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe").into();
        assert_eq!(error.to_string(), "IO error: broken pipe");
    }
}
