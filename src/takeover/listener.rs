//! Listener role: wait for a successor's stop request and service it.

use std::future::Future;
use std::io;
use std::net::Ipv4Addr;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// The acknowledgement byte sent once the server has stopped.
pub const ACK_BYTE: u8 = 0x00;

/// How long [`TakeoverHandle::stop`] waits for an in-flight handshake to
/// finish acknowledging before aborting the task.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

/// A bound, not-yet-running takeover listener.
///
/// Binding is separate from spawning so a bind failure surfaces on the
/// startup path instead of inside a background task.
pub struct TakeoverListener {
    listener: TcpListener,
}

impl TakeoverListener {
    /// Bind the takeover listener on the loopback interface.
    pub async fn bind(shutdown_port: u16) -> io::Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, shutdown_port)).await?;
        tracing::info!(
            port = listener.local_addr()?.port(),
            "Waiting for shutdown requests"
        );
        Ok(Self { listener })
    }

    /// The port actually bound; useful when bound with port 0.
    pub fn local_port(&self) -> io::Result<u16> {
        Ok(self.listener.local_addr()?.port())
    }

    /// Move the listener onto a background task that services exactly one
    /// stop request, then ends.
    ///
    /// On accept, the listening socket is closed *first* so the successor's
    /// own listener can claim the port, then `on_shutdown` is awaited to
    /// completion (its future must resolve only once the HTTP server has
    /// fully stopped), and only then is the acknowledgement byte written.
    pub fn spawn<F, Fut>(self, on_shutdown: F) -> TakeoverHandle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let TakeoverListener { listener } = self;

        let task = tokio::spawn(async move {
            let (mut stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    // Ordinary teardown, not a fault
                    tracing::debug!(error = %e, "Takeover listener closed without a request");
                    return;
                }
            };

            tracing::info!(peer = %peer, "Shutdown requested by a new instance");

            // Release the shutdown port before stopping the server so the
            // successor can bind its own takeover listener.
            drop(listener);

            on_shutdown().await;

            if let Err(e) = stream.write_all(&[ACK_BYTE]).await {
                tracing::warn!(error = %e, "Failed to acknowledge shutdown request");
                return;
            }
            if let Err(e) = stream.flush().await {
                tracing::warn!(error = %e, "Failed to flush acknowledgement");
                return;
            }
            let _ = stream.shutdown().await;

            tracing::info!("Acknowledged shutdown request");
        });

        TakeoverHandle { task }
    }
}

/// Handle to the running takeover listener task.
pub struct TakeoverHandle {
    task: JoinHandle<()>,
}

impl TakeoverHandle {
    /// True once the task has serviced its request (or was aborted).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Tear the listener down.
    ///
    /// If a handshake is mid-acknowledgement the task gets a short grace
    /// period to finish; otherwise the task is parked in `accept()` and is
    /// aborted, which closes the listening socket.
    pub async fn stop(mut self) {
        if tokio::time::timeout(DRAIN_TIMEOUT, &mut self.task)
            .await
            .is_err()
        {
            self.task.abort();
            let _ = self.task.await;
        }
    }
}
