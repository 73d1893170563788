//! Unit tests for the signal classifier

use fxsignal::models::indicators::IndicatorSnapshot;
use fxsignal::models::signal::Signal;
use fxsignal::signals::classify;

fn bullish() -> IndicatorSnapshot {
    IndicatorSnapshot {
        ema_fast: 1.15,
        ema_slow: 1.14,
        macd: 0.002,
        macd_signal: 0.001,
        rsi: 60.0,
        atr: 0.001,
    }
}

fn bearish() -> IndicatorSnapshot {
    IndicatorSnapshot {
        ema_fast: 1.15,
        ema_slow: 1.16,
        macd: -0.002,
        macd_signal: -0.001,
        rsi: 40.0,
        atr: 0.001,
    }
}

#[test]
fn test_buy_when_all_conditions_hold() {
    assert_eq!(classify(&bullish(), 1.16), Signal::Buy);
}

#[test]
fn test_sell_when_all_conditions_hold() {
    assert_eq!(classify(&bearish(), 1.14), Signal::Sell);
}

#[test]
fn test_each_buy_condition_is_required() {
    let cases = [
        IndicatorSnapshot { atr: 0.0005, ..bullish() },
        IndicatorSnapshot { rsi: 50.0, ..bullish() },
        IndicatorSnapshot { ema_slow: 1.15, ..bullish() },
        IndicatorSnapshot { macd_signal: 0.002, ..bullish() },
    ];
    for snapshot in cases {
        assert_eq!(classify(&snapshot, 1.16), Signal::Hold, "{:?}", snapshot);
    }
    // Price not above the fast EMA
    assert_eq!(classify(&bullish(), 1.15), Signal::Hold);
}

#[test]
fn test_each_sell_condition_is_required() {
    let cases = [
        IndicatorSnapshot { atr: 0.0004, ..bearish() },
        IndicatorSnapshot { rsi: 50.0, ..bearish() },
        IndicatorSnapshot { ema_slow: 1.15, ..bearish() },
        IndicatorSnapshot { macd_signal: -0.002, ..bearish() },
    ];
    for snapshot in cases {
        assert_eq!(classify(&snapshot, 1.14), Signal::Hold, "{:?}", snapshot);
    }
    assert_eq!(classify(&bearish(), 1.15), Signal::Hold);
}

#[test]
fn test_neutral_snapshot_is_hold() {
    let neutral = IndicatorSnapshot::neutral();
    for price in [0.0, 1.1, -1.0, 1000.0] {
        assert_eq!(classify(&neutral, price), Signal::Hold);
    }
}

#[test]
fn test_volatility_gate_dominates() {
    let quiet_bull = IndicatorSnapshot { atr: 0.0, ..bullish() };
    let quiet_bear = IndicatorSnapshot { atr: 0.0, ..bearish() };
    assert_eq!(classify(&quiet_bull, 1.16), Signal::Hold);
    assert_eq!(classify(&quiet_bear, 1.14), Signal::Hold);
}

#[test]
fn test_classification_is_deterministic() {
    let snapshot = bullish();
    let first = classify(&snapshot, 1.16);
    for _ in 0..100 {
        assert_eq!(classify(&snapshot, 1.16), first);
    }
}

#[test]
fn test_signal_display() {
    assert_eq!(Signal::Buy.to_string(), "BUY");
    assert_eq!(Signal::Sell.to_string(), "SELL");
    assert_eq!(Signal::Hold.to_string(), "HOLD");
    assert!(Signal::Buy.is_actionable());
    assert!(!Signal::Hold.is_actionable());
}
