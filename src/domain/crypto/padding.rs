//! RSA padding schemes used by the two downstream consumers of the registry.

use std::fmt;

/// Padding applied when generating or verifying an RSA signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignaturePadding {
    /// RSASSA-PKCS1-v1_5 (RFC 8017 §8.2)
    Pkcs1v15,
}

/// Padding applied when wrapping a symmetric key with RSA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionPadding {
    /// RSAES-OAEP (RFC 8017 §7.1)
    Oaep,
}

impl SignaturePadding {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SignaturePadding::Pkcs1v15 => "PKCS#1 v1.5",
        }
    }
}

impl EncryptionPadding {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionPadding::Oaep => "OAEP",
        }
    }
}

impl fmt::Display for SignaturePadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EncryptionPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
