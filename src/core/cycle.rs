//! One fetch → evaluate → notify pass

use crate::config::MarketDataConfig;
use crate::core::state::SelectedMarket;
use crate::metrics::Metrics;
use crate::models::market::Market;
use crate::models::signal::Signal;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::{format_signal_message, Notifier};
use crate::signals::engine::SignalEngine;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub market: Market,
    pub signal: Signal,
    pub price_count: usize,
    pub notified: bool,
}

pub struct SignalCycle {
    data_provider: Arc<dyn MarketDataProvider + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
    market: SelectedMarket,
    data_config: MarketDataConfig,
    metrics: Option<Arc<Metrics>>,
}

impl SignalCycle {
    pub fn new(
        data_provider: Arc<dyn MarketDataProvider + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
        market: SelectedMarket,
        data_config: MarketDataConfig,
    ) -> Self {
        Self {
            data_provider,
            notifier,
            market,
            data_config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn selected_market(&self) -> &SelectedMarket {
        &self.market
    }

    /// Run one cycle against the market selected right now.
    ///
    /// Never fails: missing data and delivery problems are logged and
    /// reflected in the report.
    pub async fn run_once(&self) -> CycleReport {
        let start = Instant::now();
        let market = self.market.get().await;
        let ticker = market.ticker();
        info!(market = %ticker, "Fetching market data for {}", ticker);

        let closes = match self
            .data_provider
            .get_closes(ticker, &self.data_config.lookback_range, &self.data_config.bar_interval)
            .await
        {
            Ok(closes) => closes,
            Err(e) => {
                warn!(market = %ticker, error = %e, "Market data unavailable for {}", ticker);
                Vec::new()
            }
        };

        if closes.is_empty() {
            warn!(market = %ticker, "No market data available, holding");
            if let Some(metrics) = &self.metrics {
                metrics.market_data_failures_total.inc();
            }
            return self.finish(market, Signal::Hold, 0, false, start);
        }

        let evaluation = SignalEngine::evaluate(&closes);
        let signal = evaluation.signal;

        if !signal.is_actionable() {
            info!(market = %ticker, "HOLD signal ignored");
            return self.finish(market, signal, closes.len(), false, start);
        }

        let message = format_signal_message(signal, market);
        info!(market = %ticker, signal = %signal, "Sending signal: {}", message.replace('\n', " | "));
        let notified = match self.notifier.notify(&message).await {
            Ok(()) => true,
            Err(e) => {
                error!(market = %ticker, signal = %signal, error = %e, "Failed to deliver signal");
                if let Some(metrics) = &self.metrics {
                    metrics.notification_failures_total.inc();
                }
                false
            }
        };

        self.finish(market, signal, closes.len(), notified, start)
    }

    fn finish(
        &self,
        market: Market,
        signal: Signal,
        price_count: usize,
        notified: bool,
        start: Instant,
    ) -> CycleReport {
        if let Some(metrics) = &self.metrics {
            metrics.signal_cycles_total.inc();
            metrics
                .signals_emitted_total
                .with_label_values(&[signal.as_str()])
                .inc();
        }
        info!(
            market = %market.ticker(),
            signal = %signal,
            prices = price_count,
            notified,
            duration_ms = start.elapsed().as_millis() as u64,
            "Signal cycle complete"
        );
        CycleReport {
            market,
            signal,
            price_count,
            notified,
        }
    }
}
