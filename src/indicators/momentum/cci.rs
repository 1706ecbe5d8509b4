//! CCI (Commodity Channel Index) indicator

use crate::common::math;
use crate::error::AnalysisError;

/// CCI = (tp - SMA(tp, period)) / (0.015 * MAD), where tp is the typical
/// price.
///
/// The mean absolute deviation is a single scalar taken over the whole
/// series (skipping the undefined warm-up positions), not the textbook
/// rolling-window MAD. That is the literal behavior of the system this
/// engine reproduces; do not "correct" it without a data-compatibility
/// review. A zero or undefined MAD yields an all-`NaN` series.
pub fn cci(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
) -> Result<Vec<f64>, AnalysisError> {
    if high.len() != close.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: close.len(),
            actual: high.len(),
        });
    }
    if low.len() != close.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: close.len(),
            actual: low.len(),
        });
    }

    let tp = math::typical_price(high, low, close);
    let tp_sma = math::rolling_mean(&tp, period);
    let deviation: Vec<f64> = tp.iter().zip(&tp_sma).map(|(t, m)| t - m).collect();

    let abs_deviation: Vec<f64> = deviation.iter().map(|d| d.abs()).collect();
    let mad = math::mean_skip_nan(&abs_deviation);
    let denominator = 0.015 * mad;

    Ok(deviation
        .into_iter()
        .map(|d| {
            if denominator == 0.0 || denominator.is_nan() {
                f64::NAN
            } else {
                d / denominator
            }
        })
        .collect())
}
