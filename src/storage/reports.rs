//! Risk report persistence

use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::types::RiskReport;

/// Append one report to the day's JSONL file under `report_dir`.
pub fn save_risk_report(report: &RiskReport, report_dir: &str) -> AnalyzerResult<()> {
    let filename = format!(
        "{}/risk_analysis_{}.jsonl",
        report_dir,
        Utc::now().format("%Y-%m-%d")
    );

    let line = serde_json::to_string(report)
        .map_err(|source| AnalyzerError::ReportEncode { source })?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)
        .map_err(|source| AnalyzerError::ReportWrite {
            path: filename.clone(),
            source,
        })?;

    writeln!(file, "{}", line).map_err(|source| AnalyzerError::ReportWrite {
        path: filename.clone(),
        source,
    })?;

    info!(
        pool = report.pair_address.as_deref().unwrap_or("unknown"),
        risk_score = report.analysis.risk_score,
        category = %report.analysis.risk_category,
        "Saved risk report"
    );

    Ok(())
}
