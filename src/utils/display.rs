//! Display and printing utilities

use std::collections::HashMap;
use std::time::Instant;
use tracing::{info, warn};

use crate::types::{PoolMetrics, RiskAnalysis, RiskCategory};

pub fn print_risk_report(pool: &PoolMetrics, analysis: &RiskAnalysis, alert_category: RiskCategory) {
    if analysis.risk_category >= alert_category {
        warn!(
            "🚨 {} flagged as {} (score {:.2})",
            pool.display_name(),
            analysis.risk_category,
            analysis.risk_score
        );
    }

    info!("\n📊 RISK ANALYSIS: {}", pool.display_name());
    if let Some(blockchain) = &pool.blockchain {
        info!("   Network: {}", blockchain);
    }
    if let Some(protocol) = &pool.protocol {
        info!("   Protocol: {}", protocol);
    }
    info!(
        "   Risk Score: {:.2}/100 ({})",
        analysis.risk_score, analysis.risk_category
    );

    let scores = &analysis.component_scores;
    info!("   Component Scores:");
    info!("     TVL:             {:.2}", scores.tvl_score);
    info!("     Volume:          {:.2}", scores.volume_score);
    info!("     Activity:        {:.2}", scores.activity_score);
    info!("     Price Stability: {:.2}", scores.price_stability_score);
    info!("     Balance:         {:.2}", scores.balance_score);

    let summary = &analysis.pool_metrics;
    info!("   Pool Snapshot:");
    info!("     TVL: ${:.2}", summary.tvl);
    info!(
        "     Volume: ${:.2} (24h) / ${:.2} (all-time)",
        summary.daily_volume, summary.total_volume
    );
    info!(
        "     Transactions: {} (24h) / {} (all-time)",
        summary.daily_transactions, summary.total_transactions
    );
    info!(
        "     Liquidity Balance Ratio: {:.4}",
        summary.liquidity_balance_ratio
    );

    for warning in &analysis.warnings {
        warn!("   ⚠️  {}", warning);
    }
}

pub fn print_session_stats(
    start_time: Instant,
    pools_analyzed: usize,
    category_counts: &HashMap<RiskCategory, usize>,
    flagged: usize,
) {
    info!("\n📊 Session Statistics ({:?})", start_time.elapsed());
    info!("   Pools analyzed: {}", pools_analyzed);
    info!("   Category breakdown:");
    for category in RiskCategory::ALL {
        if let Some(count) = category_counts.get(&category) {
            info!("     {}: {}", category, count);
        }
    }
    info!("   Flagged at or above alert threshold: {}", flagged);
    info!("");
}
