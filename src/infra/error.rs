//! Error handling types and result definitions for digest operations.

use thiserror::Error;

use crate::domain::crypto::DigestBytesError;

/// Result type for digest operations
pub type DigestResult<T> = Result<T, DigestError>;

/// Error types surfaced by the registry, digest computation and configuration
#[derive(Error, Debug, miette::Diagnostic)]
pub enum DigestError {
    #[error("Invalid input: {0}")]
    #[diagnostic(code(hybrid_digest::invalid_input))]
    InvalidInput(String),

    #[error("Digest length mismatch (expected {expected}, actual {actual})")]
    #[diagnostic(code(hybrid_digest::length_mismatch))]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Unsupported digest algorithm: {0}")]
    #[diagnostic(
        code(hybrid_digest::unsupported_algorithm),
        help("supported algorithms: sha1, sha224, sha256, sha384, sha512, gcm")
    )]
    UnsupportedAlgorithm(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(hybrid_digest::configuration))]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(hybrid_digest::io))]
    IoError(String),

    #[error("Cryptographic provider error: {0}")]
    #[diagnostic(code(hybrid_digest::provider))]
    ProviderError(String),
}

impl From<DigestBytesError> for DigestError {
    fn from(error: DigestBytesError) -> Self {
        match error {
            DigestBytesError::LengthMismatch { expected, actual } => {
                DigestError::LengthMismatch { expected, actual }
            }
            DigestBytesError::InvalidEncoding(msg) => DigestError::InvalidInput(msg),
        }
    }
}

impl From<std::io::Error> for DigestError {
    fn from(error: std::io::Error) -> Self {
        DigestError::IoError(error.to_string())
    }
}

#[cfg(feature = "openssl")]
impl From<openssl::error::ErrorStack> for DigestError {
    fn from(error: openssl::error::ErrorStack) -> Self {
        DigestError::ProviderError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DigestError::InvalidInput("stream closed".to_string());
        assert_eq!(error.to_string(), "Invalid input: stream closed");

        let error = DigestError::UnsupportedAlgorithm("md5".to_string());
        assert_eq!(error.to_string(), "Unsupported digest algorithm: md5");
    }

    #[test]
    fn test_error_conversion() {
        let error: DigestError = DigestBytesError::LengthMismatch {
            expected: 32,
            actual: 0,
        }
        .into();
        match error {
            DigestError::LengthMismatch { expected, actual } => {
                assert_eq!(expected, 32);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(DigestError::from(io), DigestError::IoError(_)));
    }
}
