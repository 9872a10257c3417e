use crate::error::ChatBenchError;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{sleep, timeout};
use tracing::{debug, info};

const PROBE_BUFFER_SIZE: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResponse {
    Data(Vec<u8>),
    Timeout,
    Closed,
}

impl ProbeResponse {
    pub fn decoded(&self) -> Option<String> {
        match self {
            ProbeResponse::Data(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeExchange {
    pub command: String,
    pub response: ProbeResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProbeTranscript {
    /// `None` when the welcome line was not waited for.
    pub welcome: Option<ProbeResponse>,
    pub exchanges: Vec<ProbeExchange>,
}

impl ProbeTranscript {
    pub fn print(&self) {
        match &self.welcome {
            Some(ProbeResponse::Data(bytes)) => {
                println!("WELCOME: {:?}", String::from_utf8_lossy(bytes))
            }
            Some(ProbeResponse::Timeout) => println!("TIMEOUT waiting for welcome message"),
            Some(ProbeResponse::Closed) => println!("CLOSED before welcome message"),
            None => {}
        }

        for exchange in &self.exchanges {
            println!();
            println!("Sending {}...", exchange.command);
            match &exchange.response {
                ProbeResponse::Data(bytes) => {
                    println!("RESPONSE (raw bytes): b\"{}\"", bytes.escape_ascii());
                    println!(
                        "RESPONSE (decoded): {:?}",
                        String::from_utf8_lossy(bytes)
                    );
                }
                ProbeResponse::Timeout => {
                    println!("TIMEOUT waiting for {} response", exchange.command)
                }
                ProbeResponse::Closed => println!("CLOSED by server"),
            }
        }
    }
}

/// Sends commands one by one over a single connection and records the raw
/// response to each of them.
#[derive(Debug, Clone)]
pub struct ConnectionProbe {
    server_address: String,
    commands: Vec<String>,
    pause: Duration,
    operation_timeout: Duration,
    read_welcome: bool,
}

impl ConnectionProbe {
    pub fn new(
        server_address: String,
        commands: Vec<String>,
        pause: Duration,
        operation_timeout: Duration,
        read_welcome: bool,
    ) -> Self {
        Self {
            server_address,
            commands,
            pause,
            operation_timeout,
            read_welcome,
        }
    }

    /// A missing response is recorded as a timeout and the probe moves on;
    /// a closed connection ends the probe.
    pub async fn run(&self) -> Result<ProbeTranscript, ChatBenchError> {
        if self.commands.is_empty() {
            return Err(ChatBenchError::InvalidArgument(
                "at least one command is required".to_owned(),
            ));
        }

        let mut stream = timeout(
            self.operation_timeout,
            TcpStream::connect(self.server_address.as_str()),
        )
        .await
        .map_err(|_| ChatBenchError::ServerUnreachable {
            address: self.server_address.clone(),
            reason: format!("timed out after {:?}", self.operation_timeout),
        })?
        .map_err(|error| ChatBenchError::ServerUnreachable {
            address: self.server_address.clone(),
            reason: error.to_string(),
        })?;
        info!("Connected to {}", self.server_address);

        let mut transcript = ProbeTranscript::default();
        let mut buffer = vec![0u8; PROBE_BUFFER_SIZE];

        if self.read_welcome {
            let welcome = self.read_response(&mut stream, &mut buffer).await?;
            let closed = welcome == ProbeResponse::Closed;
            transcript.welcome = Some(welcome);
            if closed {
                return Ok(transcript);
            }
        }

        for command in &self.commands {
            debug!("Sending {command}...");
            stream.write_all(format!("{command}\n").as_bytes()).await?;
            sleep(self.pause).await;

            let response = self.read_response(&mut stream, &mut buffer).await?;
            let closed = response == ProbeResponse::Closed;
            transcript.exchanges.push(ProbeExchange {
                command: command.clone(),
                response,
            });
            if closed {
                break;
            }
        }

        Ok(transcript)
    }

    async fn read_response(
        &self,
        stream: &mut TcpStream,
        buffer: &mut [u8],
    ) -> Result<ProbeResponse, ChatBenchError> {
        match timeout(self.operation_timeout, stream.read(buffer)).await {
            Err(_) => Ok(ProbeResponse::Timeout),
            Ok(Ok(0)) => Ok(ProbeResponse::Closed),
            Ok(Ok(read)) => Ok(ProbeResponse::Data(buffer[..read].to_vec())),
            Ok(Err(error)) => Err(error.into()),
        }
    }
}
