//! OpenSSL provider adapter.
//!
//! Translates registry selections into the handles OpenSSL's RSA and
//! symmetric APIs expect, so signing and hybrid-encryption code can pass
//! `algorithm.signature_pairing()` / `encryption_pairing()` straight through.

use openssl::hash::MessageDigest;
use openssl::rsa::Padding;
use openssl::symm::Cipher;

use crate::domain::crypto::{
    Algorithm, DigestBytes, EncryptionPadding, HashFamily, SignaturePadding, SymmetricCipher,
};
use crate::infra::error::DigestResult;

impl HashFamily {
    #[must_use]
    pub fn message_digest(&self) -> MessageDigest {
        match self {
            HashFamily::Sha1 => MessageDigest::sha1(),
            HashFamily::Sha224 => MessageDigest::sha224(),
            HashFamily::Sha256 => MessageDigest::sha256(),
            HashFamily::Sha384 => MessageDigest::sha384(),
            HashFamily::Sha512 => MessageDigest::sha512(),
        }
    }
}

impl SignaturePadding {
    #[must_use]
    pub fn to_openssl(&self) -> Padding {
        match self {
            SignaturePadding::Pkcs1v15 => Padding::PKCS1,
        }
    }
}

impl EncryptionPadding {
    #[must_use]
    pub fn to_openssl(&self) -> Padding {
        match self {
            EncryptionPadding::Oaep => Padding::PKCS1_OAEP,
        }
    }
}

impl SymmetricCipher {
    #[must_use]
    pub fn to_openssl(&self) -> Cipher {
        match self {
            SymmetricCipher::Aes256Cbc => Cipher::aes_256_cbc(),
            SymmetricCipher::Aes128Gcm => Cipher::aes_128_gcm(),
        }
    }
}

/// Compute the digest through OpenSSL instead of the native engines.
pub fn provider_digest(data: &[u8], algorithm: Algorithm) -> DigestResult<DigestBytes> {
    let md = algorithm.hash_family().message_digest();
    let bytes = openssl::hash::hash(md, data)?;
    log::debug!("OpenSSL computed {algorithm} digest over {} bytes", data.len());
    Ok(DigestBytes::new(algorithm, bytes.to_vec())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::digest;

    #[test]
    fn test_message_digest_sizes_match_registry() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.hash_family().message_digest().size(),
                algorithm.length()
            );
        }
    }

    #[test]
    fn test_provider_matches_native_engines() {
        let inputs: [&[u8]; 3] = [b"", b"abc", &[0xFF; 300]];
        for algorithm in Algorithm::ALL {
            for input in inputs {
                assert_eq!(
                    provider_digest(input, algorithm).unwrap(),
                    digest(input, algorithm).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_cipher_parameters_match_openssl() {
        for cipher in [SymmetricCipher::Aes256Cbc, SymmetricCipher::Aes128Gcm] {
            let handle = cipher.to_openssl();
            assert_eq!(handle.key_len(), cipher.key_len());
            assert_eq!(handle.iv_len(), Some(cipher.iv_len()));
        }
    }

    #[test]
    fn test_paddings() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.signature_pairing().padding.to_openssl(),
                Padding::PKCS1
            );
            assert_eq!(
                algorithm.encryption_pairing().padding.to_openssl(),
                Padding::PKCS1_OAEP
            );
        }
    }
}
