//! Main signal evaluation engine: indicators then classification.

use crate::indicators::calculator::{calculate_indicators, IndicatorOutcome};
use crate::models::signal::Signal;
use crate::signals::classifier::classify;

pub use crate::indicators::calculator::MIN_PRICES;

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub signal: Signal,
    pub last_price: Option<f64>,
    pub outcome: IndicatorOutcome,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate a closing-price series.
    ///
    /// An empty series is HOLD without touching the calculator.
    pub fn evaluate(closes: &[f64]) -> Evaluation {
        let Some(&last_price) = closes.last() else {
            return Evaluation {
                signal: Signal::Hold,
                last_price: None,
                outcome: IndicatorOutcome::InsufficientData { len: 0 },
            };
        };

        let outcome = calculate_indicators(closes);
        let signal = classify(&outcome.snapshot(), last_price);

        Evaluation {
            signal,
            last_price: Some(last_price),
            outcome,
        }
    }
}
