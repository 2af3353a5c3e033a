//! Digest computation service.
//!
//! Hashes in-memory buffers with the one-shot engine selected by an
//! [`Algorithm`], and streams arbitrary readers through the matching
//! incremental hasher. Every result is a [`DigestBytes`] whose length equals
//! `algorithm.length()`; nothing here returns a zero-filled placeholder.

use std::io::{ErrorKind, Read};

use crate::domain::crypto::{Algorithm, DigestBytes};
use crate::infra::error::{DigestError, DigestResult};

/// Compute the digest of `data` using `algorithm`.
///
/// `data` may be empty. The output is deterministic and exactly
/// `algorithm.length()` bytes long.
pub fn digest(data: &[u8], algorithm: Algorithm) -> DigestResult<DigestBytes> {
    log::debug!("Computing {algorithm} digest over {} bytes", data.len());

    let bytes = algorithm.hash_primitive().digest(data);
    Ok(DigestBytes::new(algorithm, bytes)?)
}

/// Compute the digest of everything `reader` yields, `buffer_size` bytes at a time.
///
/// Read failures surface as [`DigestError::InvalidInput`]; the partial
/// state is discarded.
pub fn digest_reader<R: Read>(
    mut reader: R,
    algorithm: Algorithm,
    buffer_size: usize,
) -> DigestResult<DigestBytes> {
    if buffer_size == 0 {
        return Err(DigestError::InvalidInput(
            "buffer size must be greater than 0".to_string(),
        ));
    }

    let mut hasher = algorithm.hash_family().new_hasher();
    let mut buffer = vec![0u8; buffer_size];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(DigestError::InvalidInput(format!(
                    "failed to read input after {total} bytes: {e}"
                )))
            }
        };
        hasher.update(&buffer[..n]);
        total += n as u64;
    }

    log::debug!("Computed {algorithm} digest over {total} streamed bytes");
    Ok(DigestBytes::new(algorithm, hasher.finalize().into_vec())?)
}

/// Recompute the digest of `data` with `expected`'s algorithm and compare.
pub fn verify_digest(data: &[u8], expected: &DigestBytes) -> DigestResult<bool> {
    let actual = digest(data, expected.algorithm())?;
    Ok(actual.as_slice() == expected.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that fails after yielding a prefix.
    struct FailingReader {
        remaining: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.remaining == 0 {
                return Err(std::io::Error::new(ErrorKind::BrokenPipe, "pipe closed"));
            }
            let n = buf.len().min(self.remaining);
            buf[..n].fill(0x42);
            self.remaining -= n;
            Ok(n)
        }
    }

    /// Reader that reports `Interrupted` once before every chunk.
    struct InterruptingReader {
        inner: Cursor<Vec<u8>>,
        interrupt_next: bool,
    }

    impl Read for InterruptingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupt_next = !self.interrupt_next;
            if self.interrupt_next {
                return Err(std::io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn test_digest_length_for_every_algorithm() {
        for algorithm in Algorithm::ALL {
            let d = digest(b"payload", algorithm).unwrap();
            assert_eq!(d.len(), algorithm.length());
            assert_eq!(d.algorithm(), algorithm);
        }
    }

    #[test]
    fn test_reader_matches_buffer_digest() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        for algorithm in Algorithm::ALL {
            let expected = digest(&data, algorithm).unwrap();
            for buffer_size in [1, 7, 4096, 1 << 20] {
                let streamed = digest_reader(Cursor::new(&data), algorithm, buffer_size).unwrap();
                assert_eq!(streamed, expected);
            }
        }
    }

    #[test]
    fn test_reader_empty_input() {
        let streamed = digest_reader(std::io::empty(), Algorithm::Sha256, 16).unwrap();
        assert_eq!(streamed, digest(b"", Algorithm::Sha256).unwrap());
    }

    #[test]
    fn test_reader_failure_is_invalid_input() {
        let err = digest_reader(FailingReader { remaining: 10 }, Algorithm::Sha1, 4).unwrap_err();
        match err {
            DigestError::InvalidInput(msg) => assert!(msg.contains("after 10 bytes"), "{msg}"),
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_reader_retries_interrupted() {
        let reader = InterruptingReader {
            inner: Cursor::new(b"abc".to_vec()),
            interrupt_next: false,
        };
        let streamed = digest_reader(reader, Algorithm::Sha256, 2).unwrap();
        assert_eq!(streamed, digest(b"abc", Algorithm::Sha256).unwrap());
    }

    #[test]
    fn test_reader_rejects_zero_buffer() {
        let err = digest_reader(std::io::empty(), Algorithm::Sha1, 0).unwrap_err();
        assert!(matches!(err, DigestError::InvalidInput(_)));
    }

    #[test]
    fn test_verify_digest() {
        let expected = digest(b"message", Algorithm::Sha384).unwrap();
        assert!(verify_digest(b"message", &expected).unwrap());
        assert!(!verify_digest(b"messagf", &expected).unwrap());
    }
}
