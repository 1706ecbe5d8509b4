//! Named indicator output series and the persisted set.

use serde::{Deserialize, Serialize};

/// One moving-average column, e.g. "SMA 20" or "EMA 50".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingAverageSeries {
    pub period: u32,
    pub values: Vec<f64>,
}

/// Fast-over-slow moving-average ratio column, e.g. "SMA 10/50 ratio".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioSeries {
    pub fast_period: u32,
    pub slow_period: u32,
    pub values: Vec<f64>,
}

/// Bollinger band columns plus the derived %b and bandwidth series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    pub percent_b: Vec<f64>,
    pub bandwidth: Vec<f64>,
}

/// MACD line, signal line, and histogram columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Stochastic %K and %D columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochasticSeries {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

/// Aroon Up and Down columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AroonSeries {
    pub up: Vec<f64>,
    pub down: Vec<f64>,
}

/// Every derived column computed for one asset, ready to persist alongside
/// the raw history. All member series are aligned to the source length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub smas: Vec<MovingAverageSeries>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sma_ratios: Vec<RatioSeries>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub emas: Vec<MovingAverageSeries>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ema_ratios: Vec<RatioSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stochastic: Option<StochasticSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub williams_r: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cci: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aroon: Option<AroonSeries>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bollinger(mut self, bollinger: BollingerSeries) -> Self {
        self.bollinger = Some(bollinger);
        self
    }

    pub fn with_rsi(mut self, rsi: Vec<f64>) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: MacdSeries) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_stochastic(mut self, stochastic: StochasticSeries) -> Self {
        self.stochastic = Some(stochastic);
        self
    }

    pub fn with_williams_r(mut self, williams_r: Vec<f64>) -> Self {
        self.williams_r = Some(williams_r);
        self
    }

    pub fn with_cci(mut self, cci: Vec<f64>) -> Self {
        self.cci = Some(cci);
        self
    }

    pub fn with_aroon(mut self, aroon: AroonSeries) -> Self {
        self.aroon = Some(aroon);
        self
    }

    /// Look up a stored SMA column by period.
    pub fn sma(&self, period: u32) -> Option<&[f64]> {
        self.smas
            .iter()
            .find(|s| s.period == period)
            .map(|s| s.values.as_slice())
    }

    /// Look up a stored EMA column by period.
    pub fn ema(&self, period: u32) -> Option<&[f64]> {
        self.emas
            .iter()
            .find(|s| s.period == period)
            .map(|s| s.values.as_slice())
    }

    /// Serialize for caller-side persistence.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
