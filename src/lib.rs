//! Hybrid Digest Library
//!
//! Digest algorithm registry for RSA signing and hybrid (RSA + symmetric)
//! encryption. Each [`Algorithm`] resolves to a digest length, a native
//! one-shot hash engine, a PKCS#1 v1.5 signature pairing and an OAEP +
//! symmetric cipher encryption pairing; [`digest`] hashes buffers with it.
//!
//! With the `openssl` feature the same selections map onto OpenSSL's
//! `MessageDigest`, `rsa::Padding` and `symm::Cipher` handles.

pub mod adapters;
pub mod domain;
pub mod infra;
pub mod services;

pub use domain::crypto::{
    Algorithm, AlgorithmProfile, DigestBytes, DigestBytesError, EncryptionPadding,
    EncryptionPairing, HashFamily, OneShotDigest, SignaturePadding, SignaturePairing,
    SymmetricCipher,
};
pub use infra::config::{ConfigManager, DigestConfiguration, ExportFormat, OutputEncoding};
pub use infra::error::{DigestError, DigestResult};
pub use services::digest::{digest, digest_reader, verify_digest};

#[cfg(feature = "openssl")]
pub use adapters::openssl::provider_digest;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_properties() {
        assert_eq!(Algorithm::Sha256.as_str(), "sha256");
        assert_eq!(Algorithm::Sha256.length(), 32);

        assert_eq!(Algorithm::Sha512.as_str(), "sha512");
        assert_eq!(Algorithm::Sha512.length(), 64);
        assert_eq!(
            Algorithm::Sha512.encryption_pairing().cipher,
            SymmetricCipher::Aes128Gcm
        );

        assert_eq!(Algorithm::Gcm.as_str(), "gcm");
        assert_eq!(Algorithm::Gcm.length(), Algorithm::Sha1.length());
    }
}
