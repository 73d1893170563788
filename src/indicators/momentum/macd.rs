//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::error::IndicatorError;
use crate::indicators::trend::calculate_ema;

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValues {
    pub macd: f64,
    pub signal: f64,
}

impl MacdValues {
    pub fn histogram(&self) -> f64 {
        self.macd - self.signal
    }
}

/// Calculate MACD indicator
///
/// MACD = EMA(last 12, 12) - EMA(last 26, 26)
/// Signal = EMA(last 9, 9) of the closes themselves, not of the MACD series
pub fn calculate_macd(closes: &[f64]) -> Result<MacdValues, IndicatorError> {
    let fast = calculate_ema(closes, MACD_FAST_PERIOD)?;
    let slow = calculate_ema(closes, MACD_SLOW_PERIOD)?;
    let signal = calculate_ema(closes, MACD_SIGNAL_PERIOD)?;

    Ok(MacdValues {
        macd: fast - slow,
        signal,
    })
}
