//! Symmetric ciphers paired with RSA-OAEP key wrapping for hybrid encryption.

use std::fmt;

/// Symmetric cipher used for the bulk data in hybrid encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetricCipher {
    Aes256Cbc,
    Aes128Gcm,
}

impl SymmetricCipher {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SymmetricCipher::Aes256Cbc => "AES-256-CBC",
            SymmetricCipher::Aes128Gcm => "AES-128-GCM",
        }
    }

    /// Key size in bytes.
    #[must_use]
    pub fn key_len(&self) -> usize {
        match self {
            SymmetricCipher::Aes256Cbc => 32,
            SymmetricCipher::Aes128Gcm => 16,
        }
    }

    /// IV (CBC) or nonce (GCM) size in bytes.
    #[must_use]
    pub fn iv_len(&self) -> usize {
        match self {
            SymmetricCipher::Aes256Cbc => 16,
            SymmetricCipher::Aes128Gcm => 12,
        }
    }

    /// Authentication tag size, `None` for unauthenticated modes.
    #[must_use]
    pub fn tag_len(&self) -> Option<usize> {
        match self {
            SymmetricCipher::Aes256Cbc => None,
            SymmetricCipher::Aes128Gcm => Some(16),
        }
    }

    #[must_use]
    pub fn is_aead(&self) -> bool {
        self.tag_len().is_some()
    }
}

impl fmt::Display for SymmetricCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cipher_parameters() {
        assert_eq!(SymmetricCipher::Aes256Cbc.key_len(), 32);
        assert_eq!(SymmetricCipher::Aes256Cbc.iv_len(), 16);
        assert!(!SymmetricCipher::Aes256Cbc.is_aead());

        assert_eq!(SymmetricCipher::Aes128Gcm.key_len(), 16);
        assert_eq!(SymmetricCipher::Aes128Gcm.iv_len(), 12);
        assert_eq!(SymmetricCipher::Aes128Gcm.tag_len(), Some(16));
        assert!(SymmetricCipher::Aes128Gcm.is_aead());
    }
}
