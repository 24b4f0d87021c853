//! TLS configuration and certificate loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;

/// Error type for TLS material loading.
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("certificate file not found: {0}")]
    MissingCert(String),

    #[error("private key file not found: {0}")]
    MissingKey(String),

    #[error("no certificates found in {0}")]
    EmptyChain(String),

    #[error("failed to load TLS material: {0}")]
    Io(#[from] std::io::Error),
}

/// Load TLS configuration from a PEM certificate chain and private key.
///
/// The chain is parsed up front so a bad certificate file fails at startup
/// with a readable message instead of at the first handshake.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, TlsError> {
    if !cert_path.exists() {
        return Err(TlsError::MissingCert(cert_path.display().to_string()));
    }
    if !key_path.exists() {
        return Err(TlsError::MissingKey(key_path.display().to_string()));
    }

    let mut reader = BufReader::new(File::open(cert_path)?);
    let certs = rustls_pemfile::certs(&mut reader).collect::<Result<Vec<_>, _>>()?;
    if certs.is_empty() {
        return Err(TlsError::EmptyChain(cert_path.display().to_string()));
    }

    tracing::debug!(
        cert = %cert_path.display(),
        chain_len = certs.len(),
        "Loaded certificate chain"
    );

    Ok(RustlsConfig::from_pem_file(cert_path, key_path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_cert_reported() {
        let err = load_tls_config(Path::new("/nonexistent/cert.pem"), Path::new("/nonexistent/key.pem"))
            .await
            .unwrap_err();
        assert!(matches!(err, TlsError::MissingCert(_)));
    }

    #[tokio::test]
    async fn test_empty_chain_reported() {
        let cert = tempfile::NamedTempFile::new().unwrap();
        let key = tempfile::NamedTempFile::new().unwrap();
        let err = load_tls_config(cert.path(), key.path()).await.unwrap_err();
        assert!(matches!(err, TlsError::EmptyChain(_)));
    }
}
