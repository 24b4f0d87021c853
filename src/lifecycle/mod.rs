//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     takeover handshake or OS signal → trigger()
//!     → HTTP listener drains and returns → mark_stopped()
//!     → stopped() waiters released (the handshake ack path)
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Two gates, not one: "start stopping" and "fully stopped" are distinct
//!   events, and the takeover ack must wait for the second

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
