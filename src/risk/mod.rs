//! Pool risk scoring engine

pub mod analyzer;
pub mod normalize;

pub use analyzer::*;
pub use normalize::*;
