//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the Axum router serving the configured webroot
//! - Mount the webroot under the context path when one is set
//! - Wire up middleware (request tracing, timeout)
//! - Run the optional TLS listener on its fixed port
//! - Drain and stop when the shutdown coordinator fires

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, TLS_PORT};
use crate::lifecycle::Shutdown;
use crate::net::tls::{self, TlsError};

/// Per-request timeout. Generous; a dev server may sit behind a debugger.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Grace period for in-flight TLS requests once shutdown is triggered.
const TLS_DRAIN: Duration = Duration::from_secs(5);

/// Error type for server startup and serving.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Failed to bind the TLS listener port.
    #[error("failed to bind TLS listener on port {port}: {source}")]
    TlsBind {
        port: u16,
        source: std::io::Error,
    },

    /// Failed to load TLS certificate material.
    #[error(transparent)]
    Tls(#[from] TlsError),

    /// The HTTP listener failed.
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
}

/// The development HTTP server.
pub struct DevServer {
    config: ServerConfig,
    router: Router,
}

impl DevServer {
    /// Create a new server for the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the Axum router with the static file service and middleware.
    fn build_router(config: &ServerConfig) -> Router {
        let webroot = ServeDir::new(&config.webroot).append_index_html_on_directories(true);

        let context = config.context_path();
        let router = if context.is_empty() {
            Router::new().fallback_service(webroot)
        } else {
            Router::new().nest_service(&context, webroot)
        };

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
    }

    /// Run the server on the given listener until shutdown is triggered.
    ///
    /// Returns once the HTTP listener has drained. The caller is expected to
    /// call [`Shutdown::mark_stopped`] afterwards so handshake waiters learn
    /// the port is free.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), ServeError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            webroot = %self.config.webroot.display(),
            "HTTP server starting"
        );

        if let Some(tls_config) = self.config.tls.clone() {
            self.start_tls_listener(&tls_config, &shutdown).await?;
        }

        let mut rx = shutdown.subscribe();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = rx.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Bind and spawn the TLS listener on its fixed port.
    ///
    /// Binding happens eagerly so a busy port or bad certificate is fatal at
    /// startup rather than a background log line.
    async fn start_tls_listener(
        &self,
        tls_config: &crate::config::TlsConfig,
        shutdown: &Shutdown,
    ) -> Result<(), ServeError> {
        let rustls = tls::load_tls_config(&tls_config.cert_path, &tls_config.key_path).await?;

        let tls_addr = SocketAddr::from(([0, 0, 0, 0], TLS_PORT));
        let tls_listener = TcpListener::bind(tls_addr)
            .await
            .map_err(|source| ServeError::TlsBind {
                port: TLS_PORT,
                source,
            })?
            .into_std()?;

        let handle = axum_server::Handle::new();

        let mut rx = shutdown.subscribe();
        let watcher = handle.clone();
        tokio::spawn(async move {
            let _ = rx.recv().await;
            watcher.graceful_shutdown(Some(TLS_DRAIN));
        });

        let app = self.router.clone();
        tokio::spawn(async move {
            if let Err(e) = axum_server::from_tcp_rustls(tls_listener, rustls)
                .handle(handle)
                .serve(app.into_make_service())
                .await
            {
                tracing::error!(error = %e, "TLS listener failed");
            }
        });

        tracing::info!(port = TLS_PORT, "TLS listener enabled");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
