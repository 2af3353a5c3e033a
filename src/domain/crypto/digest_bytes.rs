use std::fmt;

use base64::Engine;

use super::Algorithm;

/// Digest output paired with the algorithm that produced it.
///
/// Invariant: `bytes.len() == algo.length()`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct DigestBytes {
    algo: Algorithm,
    bytes: Box<[u8]>,
}

impl DigestBytes {
    pub fn new(algo: Algorithm, bytes: Vec<u8>) -> Result<Self, DigestBytesError> {
        if bytes.len() != algo.length() {
            return Err(DigestBytesError::LengthMismatch {
                expected: algo.length(),
                actual: bytes.len(),
            });
        }
        Ok(Self {
            algo,
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Parse a hex string (either case) produced elsewhere for `algo`.
    pub fn from_hex(algo: Algorithm, encoded: &str) -> Result<Self, DigestBytesError> {
        let bytes = hex::decode(encoded.trim())
            .map_err(|e| DigestBytesError::InvalidEncoding(e.to_string()))?;
        Self::new(algo, bytes)
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algo
    }
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into()
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    #[must_use]
    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(&self.bytes)
    }

    #[must_use]
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

impl AsRef<[u8]> for DigestBytes {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for DigestBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DigestBytes(algo={:?}, len={})",
            self.algo,
            self.bytes.len()
        )
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DigestBytesError {
    #[error("digest length mismatch (expected {expected}, actual {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("digest is not valid hex: {0}")]
    InvalidEncoding(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_length() {
        let err = DigestBytes::new(Algorithm::Sha256, vec![0; 20]).unwrap_err();
        assert_eq!(
            err,
            DigestBytesError::LengthMismatch {
                expected: 32,
                actual: 20
            }
        );
    }

    #[test]
    fn test_gcm_accepts_sha1_sized_buffer() {
        let d = DigestBytes::new(Algorithm::Gcm, vec![0x11; 20]).expect("valid size");
        assert_eq!(d.algorithm(), Algorithm::Gcm);
        assert_eq!(d.len(), 20);
    }

    #[test]
    fn test_encodings() {
        let d = DigestBytes::new(Algorithm::Sha1, vec![0xAB; 20]).unwrap();
        assert_eq!(d.to_hex(), "ab".repeat(20));
        assert_eq!(d.to_hex_upper(), "AB".repeat(20));
        assert_eq!(d.to_base64(), "q6urq6urq6urq6urq6urq6urq6s=");
        assert_eq!(DigestBytes::from_hex(Algorithm::Sha1, &d.to_hex_upper()).unwrap(), d);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(
            DigestBytes::from_hex(Algorithm::Sha1, "zz"),
            Err(DigestBytesError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_debug_hides_bytes() {
        let d = DigestBytes::new(Algorithm::Sha1, vec![0xAB; 20]).unwrap();
        assert_eq!(format!("{d:?}"), "DigestBytes(algo=Sha1, len=20)");
    }
}
