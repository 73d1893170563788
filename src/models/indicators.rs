use serde::{Deserialize, Serialize};

/// Chronological closing prices, most recent last.
pub type PriceSeries = Vec<f64>;

/// RSI reported when there is not enough history to compute one.
pub const NEUTRAL_RSI: f64 = 50.0;

/// Indicator values computed from one price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub rsi: f64,
    pub atr: f64,
}

impl IndicatorSnapshot {
    /// The "insufficient data" snapshot: zeros everywhere, RSI at 50.
    pub const fn neutral() -> Self {
        Self {
            ema_fast: 0.0,
            ema_slow: 0.0,
            macd: 0.0,
            macd_signal: 0.0,
            rsi: NEUTRAL_RSI,
            atr: 0.0,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    pub fn is_finite(&self) -> bool {
        [
            self.ema_fast,
            self.ema_slow,
            self.macd,
            self.macd_signal,
            self.rsi,
            self.atr,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for IndicatorSnapshot {
    fn default() -> Self {
        Self::neutral()
    }
}
