//! Hash family domain type.
//!
//! A `HashFamily` names the concrete hash function behind an
//! [`Algorithm`](super::Algorithm). Each family owns exactly one native
//! one-shot engine, exposed through the [`OneShotDigest`] capability.

use std::fmt;

use sha2::digest::DynDigest;
use sha2::Digest;

/// Hash functions backing the digest algorithm registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFamily {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashFamily {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HashFamily::Sha1 => "SHA-1",
            HashFamily::Sha224 => "SHA-224",
            HashFamily::Sha256 => "SHA-256",
            HashFamily::Sha384 => "SHA-384",
            HashFamily::Sha512 => "SHA-512",
        }
    }

    /// Digest output size in bytes.
    #[must_use]
    pub fn output_len(&self) -> usize {
        match self {
            HashFamily::Sha1 => 20,
            HashFamily::Sha224 => 28,
            HashFamily::Sha256 => 32,
            HashFamily::Sha384 => 48,
            HashFamily::Sha512 => 64,
        }
    }

    /// The native one-shot engine for this family.
    #[must_use]
    pub fn engine(&self) -> &'static dyn OneShotDigest {
        match self {
            HashFamily::Sha1 => &SHA1_ENGINE,
            HashFamily::Sha224 => &SHA224_ENGINE,
            HashFamily::Sha256 => &SHA256_ENGINE,
            HashFamily::Sha384 => &SHA384_ENGINE,
            HashFamily::Sha512 => &SHA512_ENGINE,
        }
    }

    /// Fresh incremental hasher, used when input arrives in chunks.
    #[must_use]
    pub fn new_hasher(&self) -> Box<dyn DynDigest> {
        match self {
            HashFamily::Sha1 => Box::new(sha1::Sha1::new()),
            HashFamily::Sha224 => Box::new(sha2::Sha224::new()),
            HashFamily::Sha256 => Box::new(sha2::Sha256::new()),
            HashFamily::Sha384 => Box::new(sha2::Sha384::new()),
            HashFamily::Sha512 => Box::new(sha2::Sha512::new()),
        }
    }
}

impl fmt::Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-shot digest function: `bytes -> fixed-length bytes`.
///
/// Implementations are stateless, so a single shared instance may be used
/// from any number of threads at once.
pub trait OneShotDigest: Send + Sync {
    /// Family this engine implements.
    fn family(&self) -> HashFamily;

    /// Number of bytes returned by [`OneShotDigest::digest`].
    fn output_len(&self) -> usize {
        self.family().output_len()
    }

    /// Hash `data` in a single pass.
    fn digest(&self, data: &[u8]) -> Vec<u8>;
}

macro_rules! one_shot_engine {
    ($name:ident, $hasher:ty, $family:expr) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl OneShotDigest for $name {
            fn family(&self) -> HashFamily {
                $family
            }

            fn digest(&self, data: &[u8]) -> Vec<u8> {
                <$hasher>::digest(data).to_vec()
            }
        }
    };
}

one_shot_engine!(Sha1Engine, sha1::Sha1, HashFamily::Sha1);
one_shot_engine!(Sha224Engine, sha2::Sha224, HashFamily::Sha224);
one_shot_engine!(Sha256Engine, sha2::Sha256, HashFamily::Sha256);
one_shot_engine!(Sha384Engine, sha2::Sha384, HashFamily::Sha384);
one_shot_engine!(Sha512Engine, sha2::Sha512, HashFamily::Sha512);

static SHA1_ENGINE: Sha1Engine = Sha1Engine;
static SHA224_ENGINE: Sha224Engine = Sha224Engine;
static SHA256_ENGINE: Sha256Engine = Sha256Engine;
static SHA384_ENGINE: Sha384Engine = Sha384Engine;
static SHA512_ENGINE: Sha512Engine = Sha512Engine;

#[cfg(test)]
mod tests {
    use super::*;

    const FAMILIES: [HashFamily; 5] = [
        HashFamily::Sha1,
        HashFamily::Sha224,
        HashFamily::Sha256,
        HashFamily::Sha384,
        HashFamily::Sha512,
    ];

    #[test]
    fn test_engine_reports_its_family() {
        for family in FAMILIES {
            assert_eq!(family.engine().family(), family);
            assert_eq!(family.engine().output_len(), family.output_len());
        }
    }

    #[test]
    fn test_engine_output_length() {
        for family in FAMILIES {
            assert_eq!(family.engine().digest(b"").len(), family.output_len());
            assert_eq!(
                family.engine().digest(&[0x5a; 1000]).len(),
                family.output_len()
            );
        }
    }

    #[test]
    fn test_incremental_hasher_matches_one_shot() {
        let data = b"The quick brown fox jumps over the lazy dog";
        for family in FAMILIES {
            let mut hasher = family.new_hasher();
            hasher.update(&data[..10]);
            hasher.update(&data[10..]);
            let streamed = hasher.finalize();
            assert_eq!(&streamed[..], &family.engine().digest(data)[..]);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(HashFamily::Sha1.to_string(), "SHA-1");
        assert_eq!(HashFamily::Sha512.to_string(), "SHA-512");
    }
}
