use crate::error::ChatBenchError;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

pub mod logging;

/// Opens and immediately closes a connection to make sure the server accepts them.
pub async fn check_server_reachable(
    server_address: &str,
    connect_timeout: Duration,
) -> Result<(), ChatBenchError> {
    let unreachable_error = |reason: String| ChatBenchError::ServerUnreachable {
        address: server_address.to_owned(),
        reason,
    };

    let mut stream = timeout(connect_timeout, TcpStream::connect(server_address))
        .await
        .map_err(|_| unreachable_error(format!("timed out after {connect_timeout:?}")))?
        .map_err(|error| unreachable_error(error.to_string()))?;
    let _ = stream.shutdown().await;
    Ok(())
}
