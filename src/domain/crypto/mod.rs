//! Digest algorithm registry and the cryptographic value types it resolves to.
//!
//! - `Algorithm`: closed set of digest selections with a pure dispatch table
//! - `HashFamily` and the `OneShotDigest` engines behind it
//! - Signature and hybrid-encryption pairings (padding, symmetric cipher)
//! - `DigestBytes`: digest output with a length invariant

mod algorithm;
mod cipher;
mod digest_bytes;
mod hash;
mod padding;
mod pairing;

pub use algorithm::{Algorithm, AlgorithmProfile};
pub use cipher::SymmetricCipher;
pub use digest_bytes::{DigestBytes, DigestBytesError};
pub use hash::{
    HashFamily, OneShotDigest, Sha1Engine, Sha224Engine, Sha256Engine, Sha384Engine,
    Sha512Engine,
};
pub use padding::{EncryptionPadding, SignaturePadding};
pub use pairing::{EncryptionPairing, SignaturePairing};
