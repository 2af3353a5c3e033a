//! Adapter layer modules for external system integration.
//!
//! - OpenSSL handles for the registry's hash, padding and cipher selections

#[cfg(feature = "openssl")]
pub mod openssl;
