//! RSI (Relative Strength Index) indicator

use crate::common::math;

pub const RSI_PERIOD: usize = 14;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss, or 0 when there is no average loss
///
/// Gains and losses are taken from the first differences of the whole
/// series, with the opposite side counted as zero. Each average covers the
/// most recent `period` differences and is 0 when fewer exist.
pub fn calculate_rsi(closes: &[f64], period: usize) -> f64 {
    let deltas = math::diffs(closes);

    let gains: Vec<f64> = deltas.iter().map(|&d| if d > 0.0 { d } else { 0.0 }).collect();
    let losses: Vec<f64> = deltas.iter().map(|&d| if d < 0.0 { -d } else { 0.0 }).collect();

    let avg_gain = trailing_average(&gains, period);
    let avg_loss = trailing_average(&losses, period);

    let rs = if avg_loss > 0.0 { avg_gain / avg_loss } else { 0.0 };
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> f64 {
    calculate_rsi(closes, RSI_PERIOD)
}

fn trailing_average(values: &[f64], period: usize) -> f64 {
    if period == 0 || values.len() < period {
        return 0.0;
    }
    math::mean(math::tail(values, period)).unwrap_or(0.0)
}
