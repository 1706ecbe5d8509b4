//! Windowed-pass primitives shared by the indicator implementations.
//!
//! Every rolling function returns a series of the same length as its input
//! with the first `period - 1` positions set to `NaN`. A window containing
//! `NaN` produces `NaN` (propagation, never silent skipping). A `period` of
//! zero or one larger than the series yields an all-`NaN` series rather
//! than an error.

use crate::error::AnalysisError;

/// Trailing arithmetic mean over `period` values.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    rolling_apply(values, period, |window| {
        window.iter().sum::<f64>() / window.len() as f64
    })
}

/// Trailing population standard deviation (ddof = 0) over `period` values.
///
/// The population convention divides by `period`, not `period - 1`. This is
/// fixed for the whole crate; Bollinger band widths depend on it.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<f64> {
    rolling_apply(values, period, |window| {
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        let variance =
            window.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / window.len() as f64;
        variance.sqrt()
    })
}

/// Trailing maximum over `period` values.
pub fn rolling_max(values: &[f64], period: usize) -> Vec<f64> {
    rolling_apply(values, period, |window| {
        window.iter().fold(f64::NEG_INFINITY, |acc, &v| acc.max(v))
    })
}

/// Trailing minimum over `period` values.
pub fn rolling_min(values: &[f64], period: usize) -> Vec<f64> {
    rolling_apply(values, period, |window| {
        window.iter().fold(f64::INFINITY, |acc, &v| acc.min(v))
    })
}

/// Index of the maximum within each trailing window, measured from the
/// window's oldest end. Ties resolve to the earliest position.
pub fn rolling_arg_max(values: &[f64], period: usize) -> Vec<f64> {
    rolling_apply(values, period, |window| arg_extreme(window, |a, b| a > b))
}

/// Index of the minimum within each trailing window, measured from the
/// window's oldest end. Ties resolve to the earliest position.
pub fn rolling_arg_min(values: &[f64], period: usize) -> Vec<f64> {
    rolling_apply(values, period, |window| arg_extreme(window, |a, b| a < b))
}

/// Recursive exponential pass: `s[0] = x[0]`, then
/// `s[i] = alpha * x[i] + (1 - alpha) * s[i - 1]`.
///
/// Defined from position 0; callers that need a warm-up mask apply it
/// themselves (see the EMA overlay).
pub fn ewm_mean(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut state = f64::NAN;
    for (i, &value) in values.iter().enumerate() {
        state = if i == 0 {
            value
        } else {
            alpha * value + (1.0 - alpha) * state
        };
        out.push(state);
    }
    out
}

/// (High + Low + Close) / 3 per bar.
pub fn typical_price(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    high.iter()
        .zip(low)
        .zip(close)
        .map(|((h, l), c)| (h + l + c) / 3.0)
        .collect()
}

/// Positionwise `numerator / denominator`; `NaN` propagates, a zero
/// denominator yields `NaN`.
pub fn ratio(numerator: &[f64], denominator: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    if numerator.len() != denominator.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: numerator.len(),
            actual: denominator.len(),
        });
    }
    Ok(numerator
        .iter()
        .zip(denominator)
        .map(|(n, d)| if *d == 0.0 { f64::NAN } else { n / d })
        .collect())
}

/// Mean over all finite values; `NaN` if none are finite.
pub fn mean_skip_nan(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in values {
        if v.is_finite() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

fn rolling_apply<F>(values: &[f64], period: usize, f: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let len = values.len();
    if period == 0 || period > len {
        return vec![f64::NAN; len];
    }
    let mut out = vec![f64::NAN; len];
    for i in (period - 1)..len {
        let window = &values[i + 1 - period..=i];
        out[i] = if window.iter().any(|v| v.is_nan()) {
            f64::NAN
        } else {
            f(window)
        };
    }
    out
}

fn arg_extreme<F>(window: &[f64], better: F) -> f64
where
    F: Fn(f64, f64) -> bool,
{
    let mut best = 0usize;
    for (i, &v) in window.iter().enumerate() {
        if better(v, window[best]) {
            best = i;
        }
    }
    best as f64
}
