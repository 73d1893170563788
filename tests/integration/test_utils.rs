//! Shared doubles for integration tests

#![allow(dead_code)]

use fxsignal::config::MarketDataConfig;
use fxsignal::core::cycle::SignalCycle;
use fxsignal::core::state::SelectedMarket;
use fxsignal::metrics::Metrics;
use fxsignal::models::indicators::PriceSeries;
use fxsignal::models::market::Market;
use fxsignal::services::market_data::{MarketDataError, MarketDataProvider};
use fxsignal::services::notifier::{Notifier, NotifyError};
use std::sync::{Arc, Mutex};

/// Serves the same closes for every ticker and records which were asked for
pub struct StaticProvider {
    closes: PriceSeries,
    pub requests: Mutex<Vec<String>>,
}

impl StaticProvider {
    pub fn new(closes: PriceSeries) -> Self {
        Self {
            closes,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for StaticProvider {
    async fn get_closes(
        &self,
        ticker: &str,
        _lookback: &str,
        _bar_interval: &str,
    ) -> Result<PriceSeries, MarketDataError> {
        self.requests.lock().unwrap().push(ticker.to_string());
        Ok(self.closes.clone())
    }
}

pub struct FailingProvider;

#[async_trait::async_trait]
impl MarketDataProvider for FailingProvider {
    async fn get_closes(
        &self,
        ticker: &str,
        _lookback: &str,
        _bar_interval: &str,
    ) -> Result<PriceSeries, MarketDataError> {
        Err(MarketDataError::Provider {
            code: "Not Found".to_string(),
            description: format!("No data found for {}", ticker),
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        self.messages.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(NotifyError::Rejected("chat not found (400)".to_string()));
        }
        Ok(())
    }
}

pub fn falling_series() -> PriceSeries {
    (0..60).map(|k| 1.159 - 0.001 * k as f64).collect()
}

pub fn build_cycle(
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
    market: Market,
) -> (Arc<SignalCycle>, Arc<Metrics>) {
    let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
    let cycle = SignalCycle::new(
        provider,
        notifier,
        SelectedMarket::new(market),
        MarketDataConfig::default(),
    )
    .with_metrics(metrics.clone());
    (Arc::new(cycle), metrics)
}
