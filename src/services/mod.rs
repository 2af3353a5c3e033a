//! Service layer module root.
//! Contains digest computation over buffers and readers.

pub mod digest;

pub use digest::{digest, digest_reader, verify_digest};
