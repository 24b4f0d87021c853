//! Configuration schema definitions.
//!
//! The complete configuration for the development server. All types derive
//! Serde traits so a partial TOML file can fill in any subset of fields.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::args::ArgMap;
use crate::config::loader::{self, ConfigError};
use crate::config::validation::validate_config;

/// Port for the optional TLS listener. Fixed, like the keystore-backed
/// extra connector it replaces; not reachable from the CLI surface.
pub const TLS_PORT: u16 = 8444;

/// Root configuration for the development server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port the HTTP listener binds (all interfaces).
    pub http_port: u16,

    /// Loopback port for the instance-takeover handshake.
    pub shutdown_port: u16,

    /// Directory served as the web root.
    pub webroot: PathBuf,

    /// Context path the webroot is mounted under ("" = root).
    pub context: String,

    /// Launch a browser at the served URL once the server is up.
    pub gui: bool,

    /// Optional TLS listener configuration.
    pub tls: Option<TlsConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8888,
            shutdown_port: 8889,
            webroot: PathBuf::from("WebContent"),
            context: String::new(),
            gui: false,
            tls: None,
        }
    }
}

/// TLS listener configuration (PEM certificate/key pair).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TlsConfig {
    /// Path to the certificate chain file (PEM).
    pub cert_path: PathBuf,

    /// Path to the private key file (PEM).
    pub key_path: PathBuf,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            cert_path: PathBuf::from("certs/devserve-cert.pem"),
            key_path: PathBuf::from("certs/devserve-key.pem"),
        }
    }
}

impl ServerConfig {
    /// Build the effective configuration from parsed command line arguments.
    ///
    /// Precedence, lowest to highest: built-in defaults, the TOML file named
    /// by `--config=` (if any), individual `--key=value` overrides. A config
    /// file that was asked for but cannot be loaded is a fatal error;
    /// malformed numeric overrides merely fall back to the current value.
    pub fn from_args(args: &ArgMap) -> Result<Self, ConfigError> {
        let mut config = match args.get("config") {
            Some(path) => loader::load_config(path.as_ref())?,
            None => Self::default(),
        };
        config.apply_args(args);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Overlay command line arguments onto this configuration.
    pub fn apply_args(&mut self, args: &ArgMap) {
        if let Some(port) = args.get_port("httpPort") {
            self.http_port = port;
        }
        if let Some(port) = args.get_port("shutdownPort") {
            self.shutdown_port = port;
        }
        if let Some(webroot) = args.get("webroot") {
            self.webroot = PathBuf::from(webroot);
        }
        if let Some(context) = args.get("context") {
            self.context = context.to_string();
        }
        if args.contains("gui") {
            self.gui = true;
        }
        if args.contains("withssl") && self.tls.is_none() {
            self.tls = Some(TlsConfig::default());
        }
    }

    /// The context path in mountable form: empty for the root, otherwise
    /// with a leading slash and no trailing slash.
    pub fn context_path(&self) -> String {
        let trimmed = self.context.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        }
    }

    /// The URL the served application is reachable at.
    pub fn url(&self) -> String {
        format!("http://localhost:{}{}", self.http_port, self.context_path())
    }
}
