//! Pool Risk Analyzer - Main Entry Point
//!
//! Batch-analyzes pool metric records from a JSON file and writes
//! per-pool risk reports.

use anyhow::Result;
use pool_risk_analyzer::*;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{error, info};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let config = CONFIG.clone();
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories(&config.report_dir)?;

    info!("📊 Pool Risk Analyzer v0.1.0");
    info!("📋 Configuration:");
    info!("   Input: {}", config.input_path);
    info!("   Report Dir: {}", config.report_dir);
    info!("   Save Reports: {}", config.save_reports);
    info!("   Alert Category: {}", config.alert_category);

    // First CLI argument overrides the configured input path
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.input_path.clone());

    let pools = storage::load_pool_metrics(&input_path)?;
    if pools.is_empty() {
        return Err(anyhow::anyhow!(
            "No pool metric records found in {}",
            input_path
        ));
    }

    let start_time = Instant::now();
    let mut category_counts: HashMap<RiskCategory, usize> = HashMap::new();
    let mut flagged = 0usize;
    let mut save_failures = 0usize;

    for pool in &pools {
        let analysis = analyze_pool_risk(pool);

        utils::print_risk_report(pool, &analysis, config.alert_category);

        *category_counts.entry(analysis.risk_category).or_insert(0) += 1;
        if analysis.risk_category >= config.alert_category {
            flagged += 1;
        }

        if config.save_reports {
            let report = RiskReport::new(pool, analysis);
            if let Err(e) = storage::save_risk_report(&report, &config.report_dir) {
                save_failures += 1;
                error!("Failed to save risk report for {}: {}", pool.display_name(), e);
            }
        }
    }

    utils::print_session_stats(start_time, pools.len(), &category_counts, flagged);

    if save_failures > 0 {
        return Err(anyhow::anyhow!("{} report(s) failed to save", save_failures));
    }

    Ok(())
}
