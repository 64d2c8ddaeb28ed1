//! Pool Risk Analyzer - Risk scoring engine for DEX liquidity pools
//!
//! Converts raw pool metrics (liquidity, volume, transaction counts
//! across trailing windows, token prices and shares) into a normalized
//! 0-100 risk score, a risk category, per-factor component scores, and
//! diagnostic warnings. The scoring core is a pure function; the
//! binary around it batch-analyzes pool records from a JSON file and
//! persists JSONL reports.

pub mod config;
pub mod errors;
pub mod risk;
pub mod storage;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{AnalyzerError, AnalyzerResult};
pub use risk::{analyze_pool_risk, analyze_pools};
pub use types::*;
