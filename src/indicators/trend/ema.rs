//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::indicators::error::IndicatorError;

pub const FAST_EMA_PERIOD: usize = 20;
pub const SLOW_EMA_PERIOD: usize = 50;

/// EMA of the last `period` closes, cold-started on that window.
///
/// The average is recomputed from scratch every call instead of being
/// carried across cycles, so two calls on overlapping windows do not agree
/// with a continuously maintained EMA.
pub fn calculate_ema(closes: &[f64], period: usize) -> Result<f64, IndicatorError> {
    IndicatorError::require("ema", period.max(1), closes.len())?;

    let window = math::tail(closes, period);
    let value = math::ema(window, period).ok_or(IndicatorError::InsufficientData {
        indicator: "ema",
        required: period,
        actual: window.len(),
    })?;

    if !value.is_finite() {
        return Err(IndicatorError::NonFinite { indicator: "ema" });
    }
    Ok(value)
}

/// Fast/slow pair used for trend confirmation.
pub fn calculate_ema_pair(closes: &[f64]) -> Result<(f64, f64), IndicatorError> {
    Ok((
        calculate_ema(closes, FAST_EMA_PERIOD)?,
        calculate_ema(closes, SLOW_EMA_PERIOD)?,
    ))
}
