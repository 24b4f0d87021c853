//! Network layer subsystem.
//!
//! Listener sockets themselves are bound by the startup path and handed to
//! the HTTP layer; what lives here is the TLS material loading for the
//! optional HTTPS listener.

pub mod tls;
