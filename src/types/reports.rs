//! Persisted risk report records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PoolMetrics, RiskAnalysis};

/// A [`RiskAnalysis`] wrapped with pool identity and a timestamp, the
/// shape appended to the daily JSONL report file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub analyzed_at: DateTime<Utc>,
    pub blockchain: Option<String>,
    pub pair_address: Option<String>,
    pub protocol: Option<String>,
    pub analysis: RiskAnalysis,
}

impl RiskReport {
    pub fn new(pool: &PoolMetrics, analysis: RiskAnalysis) -> Self {
        Self {
            analyzed_at: Utc::now(),
            blockchain: pool.blockchain.clone(),
            pair_address: pool.pair_address.clone(),
            protocol: pool.protocol.clone(),
            analysis,
        }
    }
}
