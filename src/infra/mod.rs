//! Infrastructure layer for cross-cutting concerns.
//!
//! - Error handling and result types
//! - Configuration files and validation

pub mod config;
pub mod error;
