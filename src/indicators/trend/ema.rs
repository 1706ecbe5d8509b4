//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Exponential moving average with the span convention,
/// alpha = 2 / (period + 1).
///
/// The recursion runs from position 0 (`e[0] = x[0]`), but output is masked
/// `NaN` until `period - 1` prior observations exist, so the first defined
/// value already carries the full seed history. Note the MACD family uses
/// alpha = 2 / period instead; see [`crate::indicators::momentum::macd`].
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let len = values.len();
    if period == 0 || period > len {
        return vec![f64::NAN; len];
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = math::ewm_mean(values, alpha);
    for value in out.iter_mut().take(period - 1) {
        *value = f64::NAN;
    }
    out
}
