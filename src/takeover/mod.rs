//! Single-instance takeover handshake.
//!
//! Restarting the development server must not fail with "address already in
//! use". Instead of making the operator hunt down the old process, the new
//! instance asks it to leave: a minimal two-role protocol over a loopback
//! TCP port.
//!
//! # Data Flow
//! ```text
//! new process                         old process
//! ───────────                         ───────────
//! connect 127.0.0.1:shutdownPort ──▶  accept()
//!                                     close listening socket   (port free)
//!                                     stop HTTP server         (port free)
//! read one byte  ◀──────────────────  write 0x00, flush, close
//! proceed to bind HTTP port
//! ```
//!
//! The wire protocol is exactly one byte, server to client, no framing and
//! no versioning. A refused connection means "no predecessor" and is not an
//! error.
//!
//! # Design Decisions
//! - The listener is single-shot: Idle → Listening → HandlingRequest →
//!   Stopped. One predecessor handshake per process lifetime
//! - The listening socket closes before the server stops, so the shutdown
//!   port is already free when the acknowledgement is sent
//! - The requester bounds its wait for the acknowledgement; a wedged
//!   predecessor delays startup, it does not prevent it

pub mod listener;
pub mod requester;

pub use listener::{TakeoverHandle, TakeoverListener, ACK_BYTE};
pub use requester::request_predecessor_stop;
