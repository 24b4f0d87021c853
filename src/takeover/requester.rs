//! Requester role: ask a predecessor instance to stop.

use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

/// How long to wait for a live predecessor to acknowledge before giving up
/// and continuing with startup.
pub const ACK_TIMEOUT: Duration = Duration::from_secs(30);

/// Ask whatever instance is listening on `127.0.0.1:shutdown_port` to stop,
/// and wait until it has.
///
/// Never surfaces an error: an unreachable port means no predecessor is
/// running, which is the normal case. When a predecessor is present, this
/// returns only after it has acknowledged with one byte (its HTTP port is
/// free at that point) or closed the connection.
pub async fn request_predecessor_stop(shutdown_port: u16) {
    let mut stream = match TcpStream::connect(("127.0.0.1", shutdown_port)).await {
        Ok(stream) => stream,
        Err(e) => {
            tracing::debug!(port = shutdown_port, error = %e, "No predecessor instance");
            return;
        }
    };

    tracing::info!(
        port = shutdown_port,
        "Predecessor instance detected, waiting for it to stop"
    );

    let mut ack = [0u8; 1];
    match tokio::time::timeout(ACK_TIMEOUT, stream.read(&mut ack)).await {
        Ok(Ok(1)) => {
            tracing::info!("Predecessor stopped and released its ports");
        }
        Ok(Ok(_)) => {
            // EOF without an ack byte; the peer is gone either way
            tracing::info!("Predecessor closed the connection");
        }
        Ok(Err(e)) => {
            tracing::debug!(error = %e, "Handshake connection failed; treating predecessor as gone");
        }
        Err(_) => {
            tracing::warn!(
                timeout_secs = ACK_TIMEOUT.as_secs(),
                "Predecessor did not acknowledge in time; continuing startup"
            );
        }
    }
}
