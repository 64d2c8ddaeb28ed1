//! Pool metrics input record as served by the upstream metrics API

use serde::{Deserialize, Serialize};

/// One liquidity pool's observed on-chain state at a point in time.
///
/// Every numeric field is optional; absent values are coerced to 0 at
/// read time through [`value_or_zero`](crate::risk::value_or_zero). The
/// trailing windows are independent totals (7d is not "7d minus 24h"),
/// and nothing enforces internal consistency between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolMetrics {
    pub blockchain: Option<String>,
    pub pair_address: Option<String>,
    pub protocol: Option<String>,
    pub token0: Option<String>,
    pub token1: Option<String>,
    pub token0_price: Option<f64>,
    pub token1_price: Option<f64>,
    pub token0_reserve: Option<f64>,
    pub token1_reserve: Option<f64>,
    pub token0_share: Option<f64>,
    pub token1_share: Option<f64>,
    pub token0_tvl: Option<f64>,
    pub token1_tvl: Option<f64>,
    pub total_tvl: Option<f64>,
    pub transactions_24hrs: Option<f64>,
    pub transactions_7d: Option<f64>,
    pub transactions_30d: Option<f64>,
    pub transactions_90d: Option<f64>,
    pub transactions_all: Option<f64>,
    pub volume_24hrs: Option<f64>,
    pub volume_7d: Option<f64>,
    pub volume_30d: Option<f64>,
    pub volume_90d: Option<f64>,
    pub volume_all: Option<f64>,
}

impl PoolMetrics {
    /// Human-readable identifier for logs and reports.
    pub fn display_name(&self) -> &str {
        self.pair_address.as_deref().unwrap_or("unknown pool")
    }
}
