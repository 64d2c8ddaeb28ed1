//! Risk analysis output records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Risk classification bands over the 0-100 score.
///
/// Band boundaries are inclusive-low: a score of exactly 20.0 is
/// `Low`, not `VeryLow`. The top band is open-ended upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Very Low Risk")]
    VeryLow,
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Very High Risk")]
    VeryHigh,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::VeryLow,
        RiskCategory::Low,
        RiskCategory::Medium,
        RiskCategory::High,
        RiskCategory::VeryHigh,
    ];

    /// Classify an unrounded 0-100 risk score.
    pub fn from_score(score: f64) -> Self {
        if score < 20.0 {
            RiskCategory::VeryLow
        } else if score < 40.0 {
            RiskCategory::Low
        } else if score < 60.0 {
            RiskCategory::Medium
        } else if score < 80.0 {
            RiskCategory::High
        } else {
            RiskCategory::VeryHigh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::VeryLow => "Very Low Risk",
            RiskCategory::Low => "Low Risk",
            RiskCategory::Medium => "Medium Risk",
            RiskCategory::High => "High Risk",
            RiskCategory::VeryHigh => "Very High Risk",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "very low risk" | "very low" => Ok(RiskCategory::VeryLow),
            "low risk" | "low" => Ok(RiskCategory::Low),
            "medium risk" | "medium" => Ok(RiskCategory::Medium),
            "high risk" | "high" => Ok(RiskCategory::High),
            "very high risk" | "very high" => Ok(RiskCategory::VeryHigh),
            other => Err(format!("unknown risk category: {other}")),
        }
    }
}

/// Per-factor sub-scores, each in [0, 100] rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub tvl_score: f64,
    pub volume_score: f64,
    pub activity_score: f64,
    pub price_stability_score: f64,
    pub balance_score: f64,
}

/// Raw transaction counts per trailing window, keyed the way the
/// dashboard charts expect them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTrend {
    #[serde(rename = "24h")]
    pub h24: f64,
    #[serde(rename = "7d")]
    pub d7: f64,
    #[serde(rename = "30d")]
    pub d30: f64,
    #[serde(rename = "90d")]
    pub d90: f64,
}

/// Derived summary echoed alongside the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolMetricsSummary {
    pub tvl: f64,
    pub daily_volume: f64,
    pub total_volume: f64,
    pub daily_transactions: f64,
    pub total_transactions: f64,
    /// Rounded to 4 decimals; 0.0 when both token shares are zero.
    pub liquidity_balance_ratio: f64,
    pub activity_trend: ActivityTrend,
}

/// Full analysis result for one pool. Constructed fresh per call and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub risk_score: f64,
    pub risk_category: RiskCategory,
    pub component_scores: ComponentScores,
    pub warnings: Vec<String>,
    pub pool_metrics: PoolMetricsSummary,
}
