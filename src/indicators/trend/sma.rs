//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::error::AnalysisError;

/// Trailing arithmetic mean of `period` values per position.
///
/// The first `period - 1` positions are `NaN`; a period of zero or longer
/// than the series yields an all-`NaN` series.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    math::rolling_mean(values, period)
}

/// Fast-over-slow moving-average ratio, the dashboard's "SMA 10/50 ratio"
/// style column. A crossing through 1.0 is equivalent to the averages
/// crossing each other.
pub fn ma_ratio(fast: &[f64], slow: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    math::ratio(fast, slow)
}
