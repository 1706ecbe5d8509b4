//! Engine error types.

use std::fmt;

/// Failures that abort a computation for one asset.
///
/// Per-position numeric edge cases (insufficient history, flat ranges) are
/// represented as `NaN` in the output series and never surface here; only
/// misaligned inputs and unrecognized names are hard errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Two series that must be positionally aligned have different lengths.
    LengthMismatch { expected: usize, actual: usize },
    /// A candlestick pattern name the engine does not implement.
    UnknownPattern(String),
    /// A signal rule name the engine does not implement.
    UnknownSignal(String),
    /// An indicator name the engine does not implement.
    UnknownIndicator(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::LengthMismatch { expected, actual } => {
                write!(f, "series length mismatch: expected {expected}, got {actual}")
            }
            AnalysisError::UnknownPattern(name) => {
                write!(f, "unknown candlestick pattern: '{name}'")
            }
            AnalysisError::UnknownSignal(name) => write!(f, "unknown signal rule: '{name}'"),
            AnalysisError::UnknownIndicator(name) => write!(f, "unknown indicator: '{name}'"),
        }
    }
}

impl std::error::Error for AnalysisError {}
