//! Ternary event value.

use serde::{Deserialize, Serialize};

/// One entry of a signal or pattern series: bullish, bearish, or nothing.
///
/// Persists as its integer value (1 / -1 / 0), matching the dashboard's
/// event columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum Signal {
    Buy = 1,
    Sell = -1,
    #[default]
    Hold = 0,
}

impl Signal {
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    pub fn is_event(self) -> bool {
        self != Signal::Hold
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> Self {
        signal.as_i8()
    }
}

impl TryFrom<i8> for Signal {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Signal::Buy),
            -1 => Ok(Signal::Sell),
            0 => Ok(Signal::Hold),
            other => Err(format!("invalid signal value: {other}")),
        }
    }
}
