//! Bollinger Bands indicator

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::BollingerSeries;

/// Bands around SMA(close, period) at `multiplier` standard deviations of
/// the typical price.
///
/// The deviation is the rolling *population* standard deviation (ddof = 0)
/// of (H+L+C)/3, not of the close. Also derives %b =
/// (close - lower) / (upper - lower) and bandwidth =
/// (upper - lower) / SMA(close, period). The first `period - 1` positions
/// of every output are `NaN`.
pub fn bollinger(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    multiplier: f64,
) -> Result<BollingerSeries, AnalysisError> {
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
    let deviation = math::rolling_std(&tp, period);
    let middle = math::rolling_mean(close, period);

    let upper: Vec<f64> = middle
        .iter()
        .zip(&deviation)
        .map(|(m, d)| m + multiplier * d)
        .collect();
    let lower: Vec<f64> = middle
        .iter()
        .zip(&deviation)
        .map(|(m, d)| m - multiplier * d)
        .collect();

    let percent_b = close
        .iter()
        .zip(upper.iter().zip(&lower))
        .map(|(c, (u, l))| {
            let width = u - l;
            if width == 0.0 {
                f64::NAN
            } else {
                (c - l) / width
            }
        })
        .collect();
    let bandwidth = upper
        .iter()
        .zip(lower.iter().zip(&middle))
        .map(|(u, (l, m))| if *m == 0.0 { f64::NAN } else { (u - l) / m })
        .collect();

    Ok(BollingerSeries {
        upper,
        lower,
        percent_b,
        bandwidth,
    })
}
