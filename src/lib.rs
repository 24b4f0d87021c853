//! Development HTTP server with single-instance takeover.
//!
//! Serves a static webroot during development and coordinates with any
//! previously running instance over a loopback handshake so a restart never
//! fails on a busy port: the new process asks the old one to stop, waits for
//! the acknowledgement, and only then binds.

pub mod browser;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod takeover;

pub use config::ServerConfig;
pub use http::DevServer;
pub use lifecycle::Shutdown;
