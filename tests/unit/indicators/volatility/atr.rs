//! Unit tests for the close-to-close ATR

use fxsignal::indicators::volatility::{calculate_close_atr, calculate_close_atr_default};

#[test]
fn test_atr_insufficient_data() {
    assert!(calculate_close_atr_default(&[1.0]).is_err());
    assert!(calculate_close_atr_default(&[]).is_err());
    assert!(calculate_close_atr(&[1.0, 2.0, 3.0], 1).is_err());
}

#[test]
fn test_atr_mean_absolute_change() {
    let atr = calculate_close_atr_default(&[1.0, 1.5, 1.0, 2.0]).unwrap();
    assert!((atr - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_atr_ignores_prices_outside_window() {
    let closes: Vec<f64> = (0..20)
        .map(|i| if i < 6 { (i * 10) as f64 } else { 100.0 + 0.25 * i as f64 })
        .collect();
    assert_eq!(calculate_close_atr(&closes, 14).unwrap(), 0.25);
}

#[test]
fn test_atr_flat_series_is_zero() {
    assert_eq!(calculate_close_atr_default(&[1.1; 60]).unwrap(), 0.0);
}
