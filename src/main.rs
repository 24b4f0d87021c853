//! Development server entry point.
//!
//! Startup order matters here:
//! 1. Ask any predecessor instance to stop and wait for its acknowledgement.
//! 2. Bind the HTTP listener (the predecessor's port is free by now).
//! 3. Bind the takeover listener so the *next* instance can do the same.
//! 4. Serve until a takeover request or an OS signal arrives.

use std::net::Ipv4Addr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devserve::browser;
use devserve::config::{self, ServerConfig};
use devserve::http::DevServer;
use devserve::lifecycle::{signals, Shutdown};
use devserve::takeover::{self, TakeoverListener};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devserve=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("devserve v{} starting", env!("CARGO_PKG_VERSION"));

    let args = config::parse_arguments(std::env::args().skip(1));
    let config = ServerConfig::from_args(&args)?;

    tracing::info!(
        http_port = config.http_port,
        shutdown_port = config.shutdown_port,
        webroot = %config.webroot.display(),
        "Configuration loaded"
    );

    // If an older instance still holds the ports, ask it to leave first.
    takeover::request_predecessor_stop(config.shutdown_port).await;

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.http_port)).await?;

    let shutdown = Shutdown::new();

    // Listen for the next instance's stop request. The acknowledgement goes
    // out only once our own server lifecycle has fully ended.
    let takeover_listener = TakeoverListener::bind(config.shutdown_port).await?;
    let coordinator = shutdown.clone();
    let takeover_handle = takeover_listener.spawn(move || async move {
        coordinator.trigger();
        coordinator.stopped().await;
    });

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        tracing::info!("Shutdown signal received");
        signal_shutdown.trigger();
    });

    let url = config.url();
    tracing::info!(%url, "Development server running");

    if config.gui {
        browser::open(&url);
    }

    let server = DevServer::new(config);
    server.run(listener, shutdown.clone()).await?;

    // The HTTP port is free now; release any handshake waiting on us, then
    // tear the takeover listener down.
    shutdown.mark_stopped();
    takeover_handle.stop().await;

    tracing::info!("Shutdown complete");
    Ok(())
}
