//! Crossover-style rules: two series (or a series and zero) changing
//! relative order between consecutive bars.
//!
//! Every rule emits `Hold` at position 0 (no prior bar) and whenever a
//! `NaN` is involved. `NaN` comparisons are false, so undefined warm-up
//! stretches can never fire an event.

use crate::error::AnalysisError;
use crate::models::Signal;

/// Buy when the fast average crosses above the slow one this bar, Sell on
/// the opposite crossing.
pub fn moving_average_crossover(
    fast: &[f64],
    slow: &[f64],
) -> Result<Vec<Signal>, AnalysisError> {
    if fast.len() != slow.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: fast.len(),
            actual: slow.len(),
        });
    }
    Ok((0..fast.len())
        .map(|i| {
            if i == 0 {
                Signal::Hold
            } else if slow[i - 1] > fast[i - 1] && slow[i] < fast[i] {
                Signal::Buy
            } else if slow[i - 1] < fast[i - 1] && slow[i] > fast[i] {
                Signal::Sell
            } else {
                Signal::Hold
            }
        })
        .collect())
}

/// Buy when the histogram crosses from <= 0 to > 0, Sell on the reverse.
pub fn macd_signal(histogram: &[f64]) -> Vec<Signal> {
    (0..histogram.len())
        .map(|i| {
            if i == 0 {
                Signal::Hold
            } else if histogram[i] > 0.0 && histogram[i - 1] <= 0.0 {
                Signal::Buy
            } else if histogram[i] < 0.0 && histogram[i - 1] >= 0.0 {
                Signal::Sell
            } else {
                Signal::Hold
            }
        })
        .collect()
}

/// Mean-reversion band rule: Buy when the close crosses upward back inside
/// from below the lower band, Sell when it crosses downward back inside
/// from above the upper band.
pub fn bollinger_signal(
    close: &[f64],
    upper: &[f64],
    lower: &[f64],
) -> Result<Vec<Signal>, AnalysisError> {
    if upper.len() != close.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: close.len(),
            actual: upper.len(),
        });
    }
    if lower.len() != close.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: close.len(),
            actual: lower.len(),
        });
    }
    Ok((0..close.len())
        .map(|i| {
            if i == 0 {
                Signal::Hold
            } else if close[i - 1] < lower[i - 1] && close[i] > lower[i] {
                Signal::Buy
            } else if close[i - 1] > upper[i - 1] && close[i] < upper[i] {
                Signal::Sell
            } else {
                Signal::Hold
            }
        })
        .collect())
}

/// Buy when Aroon Up crosses upward through `threshold`. The Sell branch
/// compares the current Down value against `threshold` but the prior Down
/// value against `down_threshold`; the asymmetry is intentional and flagged
/// for product review in DESIGN.md.
pub fn aroon_signal(
    up: &[f64],
    down: &[f64],
    threshold: f64,
    down_threshold: f64,
) -> Result<Vec<Signal>, AnalysisError> {
    if up.len() != down.len() {
        return Err(AnalysisError::LengthMismatch {
            expected: up.len(),
            actual: down.len(),
        });
    }
    Ok((0..up.len())
        .map(|i| {
            if i == 0 {
                Signal::Hold
            } else if up[i] > threshold && up[i - 1] < threshold {
                Signal::Buy
            } else if down[i] > threshold && down[i - 1] < down_threshold {
                Signal::Sell
            } else {
                Signal::Hold
            }
        })
        .collect())
}
