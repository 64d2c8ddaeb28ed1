//! Error types for the I/O surface

pub mod analyzer_error;

pub use analyzer_error::*;
