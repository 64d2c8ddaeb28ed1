//! Pool metrics input loading

use serde::Deserialize;
use std::fs;
use tracing::info;

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::types::PoolMetrics;

/// Paginated envelope shape returned by the upstream metrics API.
#[derive(Deserialize)]
struct MetricsEnvelope {
    data: Vec<PoolMetrics>,
}

/// Load pool metric records from a JSON file.
///
/// Accepts a bare array of records, a single record, or a saved API
/// response envelope (`{"data": [...]}`).
pub fn load_pool_metrics(path: &str) -> AnalyzerResult<Vec<PoolMetrics>> {
    let raw = fs::read_to_string(path).map_err(|source| AnalyzerError::InputRead {
        path: path.to_string(),
        source,
    })?;

    let pools = parse_pool_metrics(&raw).map_err(|source| AnalyzerError::InputParse {
        path: path.to_string(),
        source,
    })?;

    info!("Loaded {} pool metric records from {}", pools.len(), path);
    Ok(pools)
}

fn parse_pool_metrics(raw: &str) -> Result<Vec<PoolMetrics>, serde_json::Error> {
    if let Ok(list) = serde_json::from_str::<Vec<PoolMetrics>>(raw) {
        return Ok(list);
    }
    if let Ok(envelope) = serde_json::from_str::<MetricsEnvelope>(raw) {
        return Ok(envelope.data);
    }
    serde_json::from_str::<PoolMetrics>(raw).map(|single| vec![single])
}
