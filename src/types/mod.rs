//! Core data types and structures

pub mod analysis;
pub mod metrics;
pub mod reports;

pub use analysis::*;
pub use metrics::*;
pub use reports::*;
