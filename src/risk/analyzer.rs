//! Risk analyzer entry point
//!
//! Stateless pure function over one [`PoolMetrics`] record. Total over
//! its input domain: every field defaults to zero before use, the two
//! ratio denominators are guarded against zero, and no code path
//! returns an error or panics. Safe to call concurrently from any
//! number of threads.

use crate::risk::{normalize, round2, round4, value_or_zero};
use crate::types::{
    ActivityTrend, ComponentScores, PoolMetrics, PoolMetricsSummary, RiskAnalysis, RiskCategory,
};

// Aggregate weights. They sum to 0.90, not 1.0, so the score ceiling
// is 90 on both the weighted path and the all-empty path. Do not
// "fix" the sum without re-baselining every downstream threshold.
const WEIGHT_TVL: f64 = 0.25;
const WEIGHT_VOLUME: f64 = 0.20;
const WEIGHT_ACTIVITY: f64 = 0.15;
const WEIGHT_PRICE: f64 = 0.15;
const WEIGHT_BALANCE: f64 = 0.15;

// Trailing-window blend weights, 24h first. Accumulation order matters
// for bit-exact results.
const PERIOD_WEIGHTS: [f64; 4] = [0.4, 0.3, 0.2, 0.1];
const PERIOD_DAYS: [f64; 4] = [1.0, 7.0, 30.0, 90.0];

const TVL_RANGE_MAX: f64 = 1_000_000.0;
const VOLUME_RANGE_MAX: f64 = 100_000.0;
const ACTIVITY_RANGE_MAX: f64 = 50.0;

/// Daily-equivalent rates for the four trailing windows: 24h as-is,
/// the longer windows divided by their day count.
fn periodic_rates(
    w24h: Option<f64>,
    w7d: Option<f64>,
    w30d: Option<f64>,
    w90d: Option<f64>,
) -> [f64; 4] {
    let mut rates = [
        value_or_zero(w24h),
        value_or_zero(w7d),
        value_or_zero(w30d),
        value_or_zero(w90d),
    ];
    for (rate, days) in rates.iter_mut().zip(PERIOD_DAYS) {
        *rate /= days;
    }
    rates
}

/// Weighted blend of per-window rates, each normalized over
/// `[0, range_max]`. If the pool has any all-time total but every
/// window rate is zero, it is historically active but currently dead:
/// the blend is bypassed and the score forced to maximum risk.
fn windowed_score(rates: [f64; 4], range_max: f64, all_time_total: Option<f64>) -> f64 {
    let has_history = value_or_zero(all_time_total) > 0.0;
    let has_recent = rates.iter().any(|rate| *rate > 0.0);

    if has_history && !has_recent {
        return 1.0;
    }

    rates
        .iter()
        .zip(PERIOD_WEIGHTS)
        .fold(0.0, |score, (rate, weight)| {
            score + normalize(*rate, 0.0, range_max) * weight
        })
}

/// min/max of the two token prices, or 0.0 when either price is
/// missing or zero. The zero result then scores maximum risk through
/// `normalize`, same policy as missing data.
fn price_ratio(token0_price: Option<f64>, token1_price: Option<f64>) -> f64 {
    let p0 = value_or_zero(token0_price);
    let p1 = value_or_zero(token1_price);
    if p0 == 0.0 || p1 == 0.0 {
        return 0.0;
    }

    let max_price = p0.max(p1);
    if max_price == 0.0 {
        return 0.0;
    }

    p0.min(p1) / max_price
}

/// Smaller absolute share over half the combined absolute share: 1.0
/// for a perfectly even pool, approaching 0.0 as it drains one-sided.
/// Guarded to 0.0 when both shares are zero so NaN never enters the
/// normalization path.
fn balance_ratio(token0_share: Option<f64>, token1_share: Option<f64>) -> f64 {
    let s0 = value_or_zero(token0_share).abs();
    let s1 = value_or_zero(token1_share).abs();
    let total_share = s0 + s1;
    if total_share == 0.0 {
        return 0.0;
    }

    s0.min(s1) / (total_share / 2.0)
}

/// Score one pool's relative risk.
///
/// Returns the 0-100 aggregate score (2-decimal rounded), its category
/// band, the five component scores, diagnostic warnings in a fixed
/// display order, and a derived metrics summary.
pub fn analyze_pool_risk(pool: &PoolMetrics) -> RiskAnalysis {
    let tvl = value_or_zero(pool.total_tvl).abs();
    let tvl_score = normalize(tvl, 0.0, TVL_RANGE_MAX);

    let volume_rates = periodic_rates(
        pool.volume_24hrs,
        pool.volume_7d,
        pool.volume_30d,
        pool.volume_90d,
    );
    let volume_score = windowed_score(volume_rates, VOLUME_RANGE_MAX, pool.volume_all);

    let activity_rates = periodic_rates(
        pool.transactions_24hrs,
        pool.transactions_7d,
        pool.transactions_30d,
        pool.transactions_90d,
    );
    let activity_score = windowed_score(activity_rates, ACTIVITY_RANGE_MAX, pool.transactions_all);

    let price_score = normalize(
        price_ratio(pool.token0_price, pool.token1_price),
        0.0,
        1.0,
    );

    let balance_ratio = balance_ratio(pool.token0_share, pool.token1_share);
    let balance_score = normalize(balance_ratio, 0.0, 1.0);

    let final_score = (WEIGHT_TVL * tvl_score
        + WEIGHT_VOLUME * volume_score
        + WEIGHT_ACTIVITY * activity_score
        + WEIGHT_PRICE * price_score
        + WEIGHT_BALANCE * balance_score)
        * 100.0;

    // Fixed evaluation order; the dashboard renders these verbatim.
    let mut warnings = Vec::new();
    if tvl < 1e-6 {
        warnings.push("Extremely low TVL".to_string());
    }
    if volume_score > 0.8 {
        warnings.push("No significant recent trading volume".to_string());
    }
    if activity_score > 0.8 {
        warnings.push("No significant recent transactions".to_string());
    }
    if balance_ratio.abs() < 0.1 {
        warnings.push("Highly imbalanced liquidity".to_string());
    }
    if value_or_zero(pool.transactions_all) > 0.0 && value_or_zero(pool.transactions_24hrs) == 0.0 {
        warnings.push(
            "Pool appears inactive - historical activity but no recent transactions".to_string(),
        );
    }
    if value_or_zero(pool.volume_all) > 0.0 && value_or_zero(pool.volume_24hrs) == 0.0 {
        warnings.push("Pool appears illiquid - historical volume but no recent trades".to_string());
    }

    RiskAnalysis {
        risk_score: round2(final_score),
        // category is classified on the unrounded score
        risk_category: RiskCategory::from_score(final_score),
        component_scores: ComponentScores {
            tvl_score: round2(tvl_score * 100.0),
            volume_score: round2(volume_score * 100.0),
            activity_score: round2(activity_score * 100.0),
            price_stability_score: round2(price_score * 100.0),
            balance_score: round2(balance_score * 100.0),
        },
        warnings,
        pool_metrics: PoolMetricsSummary {
            tvl,
            daily_volume: value_or_zero(pool.volume_24hrs),
            total_volume: value_or_zero(pool.volume_all),
            daily_transactions: value_or_zero(pool.transactions_24hrs),
            total_transactions: value_or_zero(pool.transactions_all),
            liquidity_balance_ratio: round4(balance_ratio),
            activity_trend: ActivityTrend {
                h24: value_or_zero(pool.transactions_24hrs),
                d7: value_or_zero(pool.transactions_7d),
                d30: value_or_zero(pool.transactions_30d),
                d90: value_or_zero(pool.transactions_90d),
            },
        },
    }
}

/// Analyze a page of pool records, one result per input in order.
pub fn analyze_pools(pools: &[PoolMetrics]) -> Vec<RiskAnalysis> {
    pools.iter().map(analyze_pool_risk).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_pool() -> PoolMetrics {
        PoolMetrics::default()
    }

    #[test]
    fn empty_pool_scores_maximum_everywhere() {
        let analysis = analyze_pool_risk(&empty_pool());

        assert_eq!(analysis.risk_score, 90.0);
        assert_eq!(analysis.risk_category, RiskCategory::VeryHigh);
        assert_eq!(analysis.component_scores.tvl_score, 100.0);
        assert_eq!(analysis.component_scores.volume_score, 100.0);
        assert_eq!(analysis.component_scores.activity_score, 100.0);
        assert_eq!(analysis.component_scores.price_stability_score, 100.0);
        assert_eq!(analysis.component_scores.balance_score, 100.0);
        assert_eq!(analysis.pool_metrics.liquidity_balance_ratio, 0.0);
    }

    #[test]
    fn empty_pool_warning_order() {
        let analysis = analyze_pool_risk(&empty_pool());
        assert_eq!(
            analysis.warnings,
            vec![
                "Extremely low TVL".to_string(),
                "No significant recent trading volume".to_string(),
                "No significant recent transactions".to_string(),
                "Highly imbalanced liquidity".to_string(),
            ]
        );
    }

    #[test]
    fn dormant_pool_forces_maximum_activity_score() {
        let pool = PoolMetrics {
            transactions_all: Some(100.0),
            transactions_24hrs: Some(0.0),
            transactions_7d: Some(0.0),
            transactions_30d: Some(0.0),
            transactions_90d: Some(0.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        assert_eq!(analysis.component_scores.activity_score, 100.0);
        assert!(analysis
            .warnings
            .contains(&"Pool appears inactive - historical activity but no recent transactions".to_string()));
    }

    #[test]
    fn dormant_pool_forces_maximum_volume_score() {
        let pool = PoolMetrics {
            volume_all: Some(1_000_000.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        assert_eq!(analysis.component_scores.volume_score, 100.0);
        assert!(analysis
            .warnings
            .contains(&"Pool appears illiquid - historical volume but no recent trades".to_string()));
    }

    #[test]
    fn volume_blend_weights_the_window_rates() {
        // rates normalize to 0.5 / 0.25 / 0.1 / 0.05 over [0, 100_000]
        let pool = PoolMetrics {
            volume_24hrs: Some(50_000.0),
            volume_7d: Some(175_000.0),
            volume_30d: Some(300_000.0),
            volume_90d: Some(450_000.0),
            volume_all: Some(925_000.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        // 0.5*0.4 + 0.25*0.3 + 0.1*0.2 + 0.05*0.1 = 0.30
        assert_eq!(analysis.component_scores.volume_score, 30.0);
    }

    #[test]
    fn activity_blend_normalizes_against_fifty_daily() {
        let pool = PoolMetrics {
            transactions_24hrs: Some(25.0),
            transactions_7d: Some(87.5),
            transactions_30d: Some(150.0),
            transactions_90d: Some(225.0),
            transactions_all: Some(500.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        // 0.5*0.4 + 0.25*0.3 + 0.1*0.2 + 0.05*0.1 = 0.30
        assert_eq!(analysis.component_scores.activity_score, 30.0);
    }

    #[test]
    fn zero_total_share_does_not_produce_nan() {
        let pool = PoolMetrics {
            token0_share: Some(0.0),
            token1_share: Some(0.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        assert_eq!(analysis.component_scores.balance_score, 100.0);
        assert_eq!(analysis.pool_metrics.liquidity_balance_ratio, 0.0);
        assert!(analysis.risk_score.is_finite());
    }

    #[test]
    fn missing_price_scores_maximum_price_risk() {
        let pool = PoolMetrics {
            token0_price: Some(1.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        assert_eq!(analysis.component_scores.price_stability_score, 100.0);

        let pool = PoolMetrics {
            token0_price: Some(1.0),
            token1_price: Some(0.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        assert_eq!(analysis.component_scores.price_stability_score, 100.0);
    }

    #[test]
    fn near_equal_prices_score_low_price_risk() {
        let pool = PoolMetrics {
            token0_price: Some(1.0),
            token1_price: Some(1.02),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        // 1 / 1.02 = 0.98039... -> 98.04
        assert_eq!(analysis.component_scores.price_stability_score, 98.04);
    }

    #[test]
    fn lopsided_shares_trigger_imbalance_warning() {
        let pool = PoolMetrics {
            token0_share: Some(99.0),
            token1_share: Some(1.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        // 1 / 50 = 0.02, below the 0.1 warning threshold
        assert_eq!(analysis.pool_metrics.liquidity_balance_ratio, 0.02);
        assert!(analysis
            .warnings
            .contains(&"Highly imbalanced liquidity".to_string()));
    }

    #[test]
    fn negative_tvl_is_scored_by_magnitude() {
        let pool = PoolMetrics {
            total_tvl: Some(-500_000.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        assert_eq!(analysis.component_scores.tvl_score, 50.0);
        assert_eq!(analysis.pool_metrics.tvl, 500_000.0);
    }

    #[test]
    fn tvl_normalization_saturates_above_range() {
        let half = analyze_pool_risk(&PoolMetrics {
            total_tvl: Some(500_000.0),
            ..PoolMetrics::default()
        });
        let full = analyze_pool_risk(&PoolMetrics {
            total_tvl: Some(1_000_000.0),
            ..PoolMetrics::default()
        });
        let beyond = analyze_pool_risk(&PoolMetrics {
            total_tvl: Some(5_000_000.0),
            ..PoolMetrics::default()
        });
        assert_eq!(half.component_scores.tvl_score, 50.0);
        assert_eq!(full.component_scores.tvl_score, 100.0);
        assert_eq!(beyond.component_scores.tvl_score, 100.0);
    }

    #[test]
    fn summary_echoes_raw_window_counts() {
        let pool = PoolMetrics {
            transactions_24hrs: Some(80.0),
            transactions_7d: Some(500.0),
            transactions_30d: Some(2000.0),
            transactions_90d: Some(6000.0),
            transactions_all: Some(10_000.0),
            volume_24hrs: Some(200_000.0),
            volume_all: Some(9_000_000.0),
            ..PoolMetrics::default()
        };
        let analysis = analyze_pool_risk(&pool);
        let summary = &analysis.pool_metrics;
        assert_eq!(summary.daily_volume, 200_000.0);
        assert_eq!(summary.total_volume, 9_000_000.0);
        assert_eq!(summary.daily_transactions, 80.0);
        assert_eq!(summary.total_transactions, 10_000.0);
        assert_eq!(summary.activity_trend.h24, 80.0);
        assert_eq!(summary.activity_trend.d7, 500.0);
        assert_eq!(summary.activity_trend.d30, 2000.0);
        assert_eq!(summary.activity_trend.d90, 6000.0);
    }

    #[test]
    fn batch_analysis_preserves_input_order() {
        let pools = vec![
            PoolMetrics::default(),
            PoolMetrics {
                total_tvl: Some(500_000.0),
                ..PoolMetrics::default()
            },
        ];
        let analyses = analyze_pools(&pools);
        assert_eq!(analyses.len(), 2);
        assert_eq!(analyses[0].component_scores.tvl_score, 100.0);
        assert_eq!(analyses[1].component_scores.tvl_score, 50.0);
    }
}
