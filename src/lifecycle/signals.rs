//! OS signal handling.

/// Wait for an interrupt from the operating system.
///
/// Resolves on Ctrl+C everywhere, and additionally on SIGTERM on unix so
/// `kill` works as expected during development.
pub async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = match signal(SignalKind::terminate()) {
            Ok(sig) => Some(sig),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler; only Ctrl+C will work");
                None
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = async {
                match term.as_mut() {
                    Some(sig) => { sig.recv().await; }
                    None => std::future::pending::<()>().await,
                }
            } => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
