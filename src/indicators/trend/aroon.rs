//! Aroon indicator

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::AroonSeries;

/// Aroon Up / Down over a trailing `period + 1` bar window.
///
/// Up = 100 * (arg-index of the highest high, measured from the window's
/// oldest end) / period, and Down likewise with the lowest low. Ties
/// resolve to the earliest bar. This is the raw arg-index convention, not
/// the textbook "bars since extreme" form; regression tests pin the exact
/// values. The first `period` positions are `NaN`.
pub fn aroon(high: &[f64], low: &[f64], period: usize) -> Result<AroonSeries, AnalysisError> {
    if high.len() != low.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: high.len(),
            actual: low.len(),
        });
    }
    if period == 0 {
        let nan = vec![f64::NAN; high.len()];
        return Ok(AroonSeries {
            up: nan.clone(),
            down: nan,
        });
    }
    let window = period + 1;
    let scale = |idx: f64| 100.0 * idx / period as f64;
    let up = math::rolling_arg_max(high, window)
        .into_iter()
        .map(scale)
        .collect();
    let down = math::rolling_arg_min(low, window)
        .into_iter()
        .map(scale)
        .collect();
    Ok(AroonSeries { up, down })
}
