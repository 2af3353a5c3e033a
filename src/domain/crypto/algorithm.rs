//! Digest algorithm registry.
//!
//! `Algorithm` is the closed set of digest selections callers can make. Every
//! variant resolves, through a single exhaustive table, to an
//! [`AlgorithmProfile`]: output length, hash family (and thereby the native
//! one-shot engine), the RSA signature pairing and the hybrid encryption
//! pairing.
//!
//! Two independent axes are encoded here. The *hash family* decides how bytes
//! are hashed; the *cipher pairing* decides which symmetric cipher a hybrid
//! encryptor uses. [`Algorithm::Gcm`] only moves along the second axis: it
//! hashes with SHA-1 and selects AES-128-GCM for encryption.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{EncryptionPairing, HashFamily, OneShotDigest, SignaturePairing, SymmetricCipher};
use crate::infra::error::DigestError;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    /// Selects AES-128-GCM for hybrid encryption while hashing with SHA-1.
    ///
    /// This is not a GCM digest. Its length and digest output are identical
    /// to [`Algorithm::Sha1`].
    Gcm,
}

/// Derived, immutable metadata for one [`Algorithm`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmProfile {
    pub length: usize,
    pub hash: HashFamily,
    pub signature: SignaturePairing,
    pub encryption: EncryptionPairing,
}

impl Algorithm {
    /// Every variant, in declaration order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Gcm,
    ];

    /// The dispatch table.
    #[must_use]
    pub const fn profile(&self) -> AlgorithmProfile {
        use super::{HashFamily as H, SymmetricCipher as C};

        let (length, hash, cipher) = match self {
            Algorithm::Sha1 => (20, H::Sha1, C::Aes256Cbc),
            Algorithm::Sha224 => (28, H::Sha224, C::Aes256Cbc),
            Algorithm::Sha256 => (32, H::Sha256, C::Aes256Cbc),
            Algorithm::Sha384 => (48, H::Sha384, C::Aes256Cbc),
            Algorithm::Sha512 => (64, H::Sha512, C::Aes128Gcm),
            Algorithm::Gcm => (20, H::Sha1, C::Aes128Gcm),
        };

        AlgorithmProfile {
            length,
            hash,
            signature: SignaturePairing::pkcs1v15(hash),
            encryption: EncryptionPairing::oaep(hash, cipher),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            Algorithm::Gcm => "gcm",
        }
    }

    /// Digest output size in bytes.
    #[must_use]
    pub fn length(&self) -> usize {
        self.profile().length
    }

    #[must_use]
    pub fn hash_family(&self) -> HashFamily {
        self.profile().hash
    }

    /// Native one-shot hash routine for this variant.
    #[must_use]
    pub fn hash_primitive(&self) -> &'static dyn OneShotDigest {
        self.hash_family().engine()
    }

    #[must_use]
    pub fn signature_pairing(&self) -> SignaturePairing {
        self.profile().signature
    }

    #[must_use]
    pub fn encryption_pairing(&self) -> EncryptionPairing {
        self.profile().encryption
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Algorithm::Sha1),
            "sha224" | "sha-224" => Ok(Algorithm::Sha224),
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            "sha384" | "sha-384" => Ok(Algorithm::Sha384),
            "sha512" | "sha-512" => Ok(Algorithm::Sha512),
            "gcm" => Ok(Algorithm::Gcm),
            _ => Err(DigestError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
