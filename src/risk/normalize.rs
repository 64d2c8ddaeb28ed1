//! Numeric primitives shared by the scoring engine
//!
//! The normalization policy is deliberately asymmetric: a value of
//! exactly zero scores the MAXIMUM normalized risk, not the minimum.
//! "No data" and "literally nothing happened" are both treated as the
//! riskiest possible observation, and since absent fields are coerced
//! to zero before normalization the two cases collapse into one rule.

/// Coerce an optional metric to a number. The single defaulting point
/// for the whole engine; field reads must go through here rather than
/// defaulting ad hoc at each site.
pub fn value_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Map `value` into [0, 1] against the `[min_val, max_val]` range.
///
/// Zero returns 1.0 (maximum risk contribution); anything else is
/// linearly scaled and clamped into [0, 1].
pub fn normalize(value: f64, min_val: f64, max_val: f64) -> f64 {
    if value == 0.0 {
        return 1.0;
    }
    ((value - min_val) / (max_val - min_val)).clamp(0.0, 1.0)
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places, half away from zero.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
