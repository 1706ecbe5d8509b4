//! Engine defaults and environment lookup.

use serde::{Deserialize, Serialize};

/// Periods and parameters for the indicator engine.
///
/// The defaults match the dashboard's standard column set; callers may
/// deserialize overrides from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Periods computed for both the SMA and EMA overlay families.
    pub ma_periods: Vec<u32>,
    /// (fast, slow) pairs for the "SMA 10/50 ratio"-style columns.
    pub ratio_pairs: Vec<(u32, u32)>,
    pub bollinger_period: u32,
    pub bollinger_multiplier: f64,
    pub rsi_period: u32,
    pub macd_slow_period: u32,
    pub macd_fast_period: u32,
    pub macd_signal_period: u32,
    pub stochastic_period: u32,
    pub stochastic_d_period: u32,
    pub williams_period: u32,
    pub cci_period: u32,
    pub aroon_period: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ma_periods: vec![10, 20, 50, 100, 200],
            ratio_pairs: vec![(10, 50), (20, 100), (50, 200)],
            bollinger_period: 20,
            bollinger_multiplier: 2.0,
            rsi_period: 14,
            macd_slow_period: 26,
            macd_fast_period: 12,
            macd_signal_period: 9,
            stochastic_period: 10,
            stochastic_d_period: 3,
            williams_period: 14,
            cci_period: 20,
            aroon_period: 25,
        }
    }
}

/// Thresholds for the signal engine's crossing rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub stochastic_low: f64,
    pub stochastic_high: f64,
    pub williams_low: f64,
    pub williams_high: f64,
    pub cci_low: f64,
    pub cci_high: f64,
    pub aroon_threshold: f64,
    /// Prior-bar threshold for the Aroon Sell branch. Asymmetric with
    /// `aroon_threshold` on purpose; see DESIGN.md.
    pub aroon_down_threshold: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            stochastic_low: 20.0,
            stochastic_high: 80.0,
            williams_low: -80.0,
            williams_high: -20.0,
            cci_low: -100.0,
            cci_high: 100.0,
            aroon_threshold: 70.0,
            aroon_down_threshold: 30.0,
        }
    }
}

/// Deployment environment, read from `ENVIRONMENT` (via `.env` when
/// present). Anything other than "production"/"prod" is treated as sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    pub fn detect() -> Self {
        dotenvy::dotenv().ok();
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Sandbox,
        }
    }
}
