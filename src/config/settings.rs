//! Analyzer settings and environment variable handling

use std::env;

use crate::types::RiskCategory;

// Configuration defaults
pub const DEFAULT_INPUT_PATH: &str = "pools.json";
pub const DEFAULT_REPORT_DIR: &str = "output/reports";
pub const DEFAULT_ALERT_CATEGORY: RiskCategory = RiskCategory::High;

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file with pool metric records; overridden by the first CLI argument.
    pub input_path: String,
    /// Directory for the daily JSONL report files.
    pub report_dir: String,
    /// Append each analysis to the report file.
    pub save_reports: bool,
    /// Pools at or above this category are logged as alerts.
    pub alert_category: RiskCategory,
}

impl Config {
    pub fn load() -> Self {
        Self {
            input_path: env::var("INPUT_PATH").unwrap_or_else(|_| DEFAULT_INPUT_PATH.to_string()),
            report_dir: env::var("REPORT_DIR").unwrap_or_else(|_| DEFAULT_REPORT_DIR.to_string()),
            save_reports: env::var("SAVE_REPORTS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            alert_category: env::var("ALERT_CATEGORY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_ALERT_CATEGORY),
        }
    }
}
