//! Unit tests for MACD indicator

use fxsignal::indicators::momentum::calculate_macd;

#[test]
fn test_macd_insufficient_data() {
    let closes = vec![1.0; 25];
    assert!(calculate_macd(&closes).is_err());
}

#[test]
fn test_macd_flat_series() {
    let closes = vec![2.0; 30];
    let macd = calculate_macd(&closes).unwrap();
    assert_eq!(macd.macd, 0.0);
    // The signal line is an EMA of prices, so it sits at the price level.
    assert_eq!(macd.signal, 2.0);
    assert_eq!(macd.histogram(), -2.0);
}

#[test]
fn test_macd_sign_follows_trend() {
    let up: Vec<f64> = (0..40).map(|k| 1.0 + 0.01 * k as f64).collect();
    let down: Vec<f64> = (0..40).map(|k| 2.0 - 0.01 * k as f64).collect();

    assert!(calculate_macd(&up).unwrap().macd > 0.0);
    assert!(calculate_macd(&down).unwrap().macd < 0.0);
}
