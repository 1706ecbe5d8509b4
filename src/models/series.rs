//! Aligned OHLCV column store.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::models::candle::Candle;

/// One asset's history as five positionally aligned columns, oldest first.
///
/// Construction enforces equal lengths; everything downstream may then
/// index columns in lockstep without re-checking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhlcvSeries {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

impl OhlcvSeries {
    /// Build from raw columns, rejecting misaligned inputs.
    pub fn new(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Result<Self, AnalysisError> {
        let expected = open.len();
        for actual in [high.len(), low.len(), close.len(), volume.len()] {
            if actual != expected {
                return Err(AnalysisError::LengthMismatch { expected, actual });
            }
        }
        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
        })
    }

    pub fn from_candles(candles: &[Candle]) -> Self {
        Self {
            open: candles.iter().map(|c| c.open).collect(),
            high: candles.iter().map(|c| c.high).collect(),
            low: candles.iter().map(|c| c.low).collect(),
            close: candles.iter().map(|c| c.close).collect(),
            volume: candles.iter().map(|c| c.volume).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Derived (High + Low + Close) / 3 column.
    pub fn typical_price(&self) -> Vec<f64> {
        crate::common::math::typical_price(&self.high, &self.low, &self.close)
    }
}
