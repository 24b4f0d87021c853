//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → ServeDir (webroot lookup, index.html on directories)
//!     → Response
//! ```

pub mod server;

pub use server::{DevServer, ServeError};
