//! Stochastic oscillator

use crate::common::math;
use crate::error::AnalysisError;
use crate::models::StochasticSeries;

/// %K = 100 * (close - min(low, period)) / (max(high, period) - min(low,
/// period)), %D = SMA(%K, d_period).
///
/// A flat range (zero denominator) yields `NaN` for that position, and the
/// `NaN` propagates into any %D window containing it.
pub fn stochastic(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    d_period: usize,
) -> Result<StochasticSeries, AnalysisError> {
    check_len(close.len(), high.len())?;
    check_len(close.len(), low.len())?;

    let lowest = math::rolling_min(low, period);
    let highest = math::rolling_max(high, period);

    let k: Vec<f64> = close
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(c, (hh, ll))| {
            let range = hh - ll;
            if range == 0.0 {
                f64::NAN
            } else {
                (c - ll) / range * 100.0
            }
        })
        .collect();
    let d = math::rolling_mean(&k, d_period);

    Ok(StochasticSeries { k, d })
}

fn check_len(expected: usize, actual: usize) -> Result<(), AnalysisError> {
    if expected == actual {
        Ok(())
    } else {
        Err(AnalysisError::LengthMismatch { expected, actual })
    }
}
