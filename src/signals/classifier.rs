//! Threshold rules mapping an indicator snapshot to a signal

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::Signal;

/// Minimum ATR for any directional signal.
pub const VOLATILITY_FLOOR: f64 = 0.0005;
pub const RSI_MIDLINE: f64 = 50.0;

/// Classify a snapshot against the last traded price.
///
/// BUY needs volatility above the floor, RSI above 50, price above a fast EMA
/// that sits above the slow EMA, and MACD above its signal line. SELL is the
/// mirror image. Everything else is HOLD, including the neutral snapshot.
pub fn classify(snapshot: &IndicatorSnapshot, last_price: f64) -> Signal {
    if is_buy(snapshot, last_price) {
        Signal::Buy
    } else if is_sell(snapshot, last_price) {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

fn is_buy(s: &IndicatorSnapshot, last_price: f64) -> bool {
    s.atr > VOLATILITY_FLOOR
        && s.rsi > RSI_MIDLINE
        && last_price > s.ema_fast
        && s.ema_fast > s.ema_slow
        && s.macd > s.macd_signal
}

fn is_sell(s: &IndicatorSnapshot, last_price: f64) -> bool {
    s.atr > VOLATILITY_FLOOR
        && s.rsi < RSI_MIDLINE
        && last_price < s.ema_fast
        && s.ema_fast < s.ema_slow
        && s.macd < s.macd_signal
}
