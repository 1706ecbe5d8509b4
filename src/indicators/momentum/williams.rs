//! Williams %R oscillator

use crate::common::math;
use crate::error::AnalysisError;

/// %R = (max(high, period) - close) / (max(high, period) - min(low,
/// period)) * -100, bounded in [-100, 0] where defined.
///
/// A flat range yields `NaN`; the first `period - 1` positions are `NaN`.
pub fn williams_r(
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

    let highest = math::rolling_max(high, period);
    let lowest = math::rolling_min(low, period);

    Ok(close
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(c, (hh, ll))| {
            let range = hh - ll;
            if range == 0.0 {
                f64::NAN
            } else {
                (hh - c) / range * -100.0
            }
        })
        .collect())
}
