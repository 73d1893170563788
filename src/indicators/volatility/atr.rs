//! ATR (Average True Range) indicator, close-to-close variant

use crate::common::math;
use crate::indicators::error::IndicatorError;

pub const ATR_PERIOD: usize = 14;

/// Mean absolute change between consecutive closes over the last `period`
/// closes.
///
/// Only closing prices are available, so this stands in for the
/// high/low/close true range.
pub fn calculate_close_atr(closes: &[f64], period: usize) -> Result<f64, IndicatorError> {
    IndicatorError::require("atr", 2, closes.len().min(period))?;

    let window = math::tail(closes, period);
    let moves: Vec<f64> = math::diffs(window).into_iter().map(f64::abs).collect();

    math::mean(&moves).ok_or(IndicatorError::InsufficientData {
        indicator: "atr",
        required: 2,
        actual: window.len(),
    })
}

/// Calculate ATR with default period (14)
pub fn calculate_close_atr_default(closes: &[f64]) -> Result<f64, IndicatorError> {
    calculate_close_atr(closes, ATR_PERIOD)
}
