//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Catch port clashes before any socket is bound
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: ServerConfig -> Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("httpPort must be a positive port number")]
    HttpPortZero,

    #[error("shutdownPort must be a positive port number")]
    ShutdownPortZero,

    #[error("httpPort and shutdownPort are both {0}; the takeover listener would clash with the HTTP listener")]
    PortClash(u16),

    #[error("webroot must not be empty")]
    EmptyWebroot,
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.http_port == 0 {
        errors.push(ValidationError::HttpPortZero);
    }
    if config.shutdown_port == 0 {
        errors.push(ValidationError::ShutdownPortZero);
    }
    if config.http_port != 0 && config.http_port == config.shutdown_port {
        errors.push(ValidationError::PortClash(config.http_port));
    }
    if config.webroot.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyWebroot);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_port_clash_rejected() {
        let mut config = ServerConfig::default();
        config.shutdown_port = config.http_port;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::PortClash(8888)]);
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = ServerConfig::default();
        config.http_port = 0;
        config.shutdown_port = 0;
        config.webroot = Default::default();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
