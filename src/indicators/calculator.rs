//! Turns a closing-price series into an [`IndicatorSnapshot`].

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi_default};
use crate::indicators::trend::calculate_ema_pair;
use crate::indicators::volatility::calculate_close_atr_default;
use crate::models::indicators::IndicatorSnapshot;
use tracing::{debug, error, warn};

/// Shortest series the calculator will evaluate.
pub const MIN_PRICES: usize = 50;

/// Result of one indicator computation.
///
/// Every variant carries a usable snapshot; the two failure variants carry the
/// neutral one.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOutcome {
    Computed(IndicatorSnapshot),
    InsufficientData { len: usize },
    Degenerate { reason: String },
}

impl IndicatorOutcome {
    pub fn snapshot(&self) -> IndicatorSnapshot {
        match self {
            IndicatorOutcome::Computed(snapshot) => *snapshot,
            IndicatorOutcome::InsufficientData { .. } | IndicatorOutcome::Degenerate { .. } => {
                IndicatorSnapshot::neutral()
            }
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, IndicatorOutcome::Computed(_))
    }
}

/// Compute every indicator for `closes`.
///
/// Never fails: short series and numeric failures are reported through the
/// outcome and the log, and map to the neutral snapshot.
pub fn calculate_indicators(closes: &[f64]) -> IndicatorOutcome {
    if closes.len() < MIN_PRICES {
        warn!(
            len = closes.len(),
            min = MIN_PRICES,
            "Not enough prices to compute indicators ({} < {})",
            closes.len(),
            MIN_PRICES
        );
        return IndicatorOutcome::InsufficientData { len: closes.len() };
    }

    match compute_snapshot(closes) {
        Ok(snapshot) => {
            let last_price = closes[closes.len() - 1];
            debug!(
                last_price,
                ema_fast = snapshot.ema_fast,
                ema_slow = snapshot.ema_slow,
                macd = snapshot.macd,
                macd_signal = snapshot.macd_signal,
                rsi = snapshot.rsi,
                atr = snapshot.atr,
                "Indicators: last={:.4} EMA20={:.4} EMA50={:.4} MACD={:.4} signal={:.4} RSI={:.2} ATR={:.5}",
                last_price,
                snapshot.ema_fast,
                snapshot.ema_slow,
                snapshot.macd,
                snapshot.macd_signal,
                snapshot.rsi,
                snapshot.atr
            );
            IndicatorOutcome::Computed(snapshot)
        }
        Err(IndicatorError::InsufficientData { .. }) => {
            warn!(len = closes.len(), "Indicator window shorter than required");
            IndicatorOutcome::InsufficientData { len: closes.len() }
        }
        Err(e) => {
            error!(error = %e, len = closes.len(), "Failed to compute indicators");
            IndicatorOutcome::Degenerate {
                reason: e.to_string(),
            }
        }
    }
}

fn compute_snapshot(closes: &[f64]) -> Result<IndicatorSnapshot, IndicatorError> {
    let (ema_fast, ema_slow) = calculate_ema_pair(closes)?;
    let macd = calculate_macd(closes)?;
    let rsi = calculate_rsi_default(closes);
    let atr = calculate_close_atr_default(closes)?;

    let snapshot = IndicatorSnapshot {
        ema_fast,
        ema_slow,
        macd: macd.macd,
        macd_signal: macd.signal,
        rsi,
        atr,
    };

    if !snapshot.is_finite() {
        return Err(IndicatorError::NonFinite {
            indicator: "snapshot",
        });
    }
    Ok(snapshot)
}
