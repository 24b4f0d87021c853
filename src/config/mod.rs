//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line tokens
//!     → args.rs (--key=value → ArgMap, everything else ignored)
//!     → schema.rs (defaults ← optional TOML file ← CLI overrides)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; changing it means restarting the
//!   server, and the takeover handshake makes restarts cheap
//! - Every field has a default so `devserve` with no arguments works
//! - Malformed numeric arguments warn and fall back rather than fail

pub mod args;
pub mod loader;
pub mod schema;
pub mod validation;

pub use args::{parse_arguments, ArgMap};
pub use loader::ConfigError;
pub use schema::{ServerConfig, TlsConfig, TLS_PORT};
