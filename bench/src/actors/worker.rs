use super::command::ChatCommand;
use super::outcome::WorkerOutcome;
use crate::error::WorkerError;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{sleep, timeout, Instant};
use tracing::{debug, warn};

const RESPONSE_BUFFER_SIZE: usize = 1024;

/// Settings shared by every worker of a load run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerConfig {
    pub server_address: String,
    pub messages_per_connection: u32,
    pub message_delay: Duration,
    pub operation_timeout: Duration,
    pub consume_welcome: bool,
}

/// One connection driven through a fixed command cycle.
///
/// Every attempted phase produces exactly one outcome: a connection outcome,
/// then one message outcome per command until the first failure. The socket
/// is dropped, and therefore closed, on every return path.
pub struct BenchmarkWorker {
    worker_id: u64,
    config: Arc<WorkerConfig>,
    outcomes: UnboundedSender<WorkerOutcome>,
}

impl BenchmarkWorker {
    pub fn new(
        worker_id: u64,
        config: Arc<WorkerConfig>,
        outcomes: UnboundedSender<WorkerOutcome>,
    ) -> Self {
        Self {
            worker_id,
            config,
            outcomes,
        }
    }

    pub async fn run(self) {
        let mut stream = match self.connect().await {
            Ok((stream, latency)) => {
                self.report(WorkerOutcome::ConnectionSuccess(latency));
                stream
            }
            Err(error) => {
                debug!("Worker #{} → connection failed: {error}", self.worker_id);
                self.report(WorkerOutcome::ConnectionFailure(error.to_string()));
                return;
            }
        };

        if self.config.consume_welcome {
            self.skip_welcome(&mut stream).await;
        }

        let mut buffer = [0u8; RESPONSE_BUFFER_SIZE];
        for index in 0..self.config.messages_per_connection {
            let command = ChatCommand::for_message(self.worker_id, index);
            let started = Instant::now();
            match self.round_trip(&mut stream, &command, &mut buffer).await {
                Ok(()) => self.report(WorkerOutcome::MessageSuccess(started.elapsed())),
                Err(error) => {
                    debug!(
                        "Worker #{} → command '{command}' failed: {error}",
                        self.worker_id
                    );
                    self.report(WorkerOutcome::MessageFailure(error.to_string()));
                    return;
                }
            }

            if !self.config.message_delay.is_zero() {
                sleep(self.config.message_delay).await;
            }
        }

        self.disconnect(&mut stream).await;
    }

    async fn connect(&self) -> Result<(TcpStream, Duration), WorkerError> {
        let operation_timeout = self.config.operation_timeout;
        let started = Instant::now();
        let stream = timeout(
            operation_timeout,
            TcpStream::connect(self.config.server_address.as_str()),
        )
        .await
        .map_err(|_| WorkerError::ConnectTimeout(operation_timeout))?
        .map_err(WorkerError::Connect)?;
        Ok((stream, started.elapsed()))
    }

    async fn round_trip(
        &self,
        stream: &mut TcpStream,
        command: &ChatCommand,
        buffer: &mut [u8],
    ) -> Result<(), WorkerError> {
        let operation_timeout = self.config.operation_timeout;
        timeout(operation_timeout, stream.write_all(command.to_line().as_bytes()))
            .await
            .map_err(|_| WorkerError::SendTimeout(operation_timeout))?
            .map_err(WorkerError::Send)?;

        let read = timeout(operation_timeout, stream.read(buffer))
            .await
            .map_err(|_| WorkerError::ReceiveTimeout(operation_timeout))?
            .map_err(WorkerError::Receive)?;
        if read == 0 {
            return Err(WorkerError::NoResponse);
        }
        Ok(())
    }

    async fn skip_welcome(&self, stream: &mut TcpStream) {
        let mut buffer = [0u8; RESPONSE_BUFFER_SIZE];
        match timeout(self.config.operation_timeout, stream.read(&mut buffer)).await {
            Ok(Ok(read)) if read > 0 => {}
            Ok(Ok(_)) => debug!("Worker #{} → connection closed before welcome", self.worker_id),
            Ok(Err(error)) => debug!("Worker #{} → cannot read welcome: {error}", self.worker_id),
            Err(_) => debug!("Worker #{} → no welcome received", self.worker_id),
        }
    }

    async fn disconnect(&self, stream: &mut TcpStream) {
        let quit = ChatCommand::Quit.to_line();
        match timeout(self.config.operation_timeout, stream.write_all(quit.as_bytes())).await {
            Ok(Ok(())) => {
                if let Err(error) = stream.shutdown().await {
                    debug!("Worker #{} → socket shutdown failed: {error}", self.worker_id);
                }
            }
            Ok(Err(error)) => debug!("Worker #{} → cannot send QUIT: {error}", self.worker_id),
            Err(_) => debug!("Worker #{} → QUIT send timed out", self.worker_id),
        }
    }

    fn report(&self, outcome: WorkerOutcome) {
        if self.outcomes.send(outcome).is_err() {
            warn!(
                "Worker #{} → outcome channel closed, outcome dropped",
                self.worker_id
            );
        }
    }
}
