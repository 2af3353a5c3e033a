//! Hash/padding/cipher pairings handed to the external RSA provider.

use super::{EncryptionPadding, HashFamily, SignaturePadding, SymmetricCipher};

/// Hash and padding for RSA signature generation and verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignaturePairing {
    pub hash: HashFamily,
    pub padding: SignaturePadding,
}

/// Hash, bulk cipher and key-wrap padding for hybrid RSA + symmetric encryption.
///
/// `hash` is the OAEP hash; `cipher` encrypts the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncryptionPairing {
    pub hash: HashFamily,
    pub cipher: SymmetricCipher,
    pub padding: EncryptionPadding,
}

impl SignaturePairing {
    #[must_use]
    pub const fn pkcs1v15(hash: HashFamily) -> Self {
        Self {
            hash,
            padding: SignaturePadding::Pkcs1v15,
        }
    }
}

impl EncryptionPairing {
    #[must_use]
    pub const fn oaep(hash: HashFamily, cipher: SymmetricCipher) -> Self {
        Self {
            hash,
            cipher,
            padding: EncryptionPadding::Oaep,
        }
    }
}
