//! Yahoo Finance market data provider implementation

use crate::config::MarketDataConfig;
use crate::models::indicators::PriceSeries;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use backon::{ExponentialBuilder, Retryable};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::messages::ChartEnvelope;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; fxsignal/0.1)";

pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: String,
    backoff: ExponentialBuilder,
}

impl YahooFinanceProvider {
    pub fn new(config: &MarketDataConfig) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(config.api_url.clone(), client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            backoff: ExponentialBuilder::default()
                .with_min_delay(Duration::from_millis(500))
                .with_max_times(2),
        }
    }

    pub fn with_backoff(mut self, backoff: ExponentialBuilder) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn chart_url(&self, ticker: &str, lookback: &str, bar_interval: &str) -> Result<Url, MarketDataError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", ticker]);
        url.query_pairs_mut()
            .append_pair("range", lookback)
            .append_pair("interval", bar_interval);
        Ok(url)
    }

    async fn fetch_chart(&self, url: &Url) -> Result<PriceSeries, MarketDataError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Yahoo reports unknown tickers as a JSON error body with a 404.
        let envelope: ChartEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                return Err(MarketDataError::Decode {
                    status: status.as_u16(),
                    message: e.to_string(),
                })
            }
        };

        if let Some(error) = envelope.chart.error {
            return Err(MarketDataError::Provider {
                code: error.code,
                description: error.description,
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::Decode {
                status: status.as_u16(),
                message: "non-success status without error payload".to_string(),
            });
        }

        Ok(envelope.into_closes())
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn get_closes(
        &self,
        ticker: &str,
        lookback: &str,
        bar_interval: &str,
    ) -> Result<PriceSeries, MarketDataError> {
        let url = self.chart_url(ticker, lookback, bar_interval)?;
        debug!(ticker = %ticker, url = %url, "Fetching closing prices for {}", ticker);

        let closes = (|| self.fetch_chart(&url))
            .retry(self.backoff)
            .when(MarketDataError::is_transient)
            .notify(|err: &MarketDataError, delay: Duration| {
                warn!(
                    ticker = %ticker,
                    error = %err,
                    retry_in_ms = delay.as_millis() as u64,
                    "Market data request failed, retrying"
                );
            })
            .await?;

        debug!(ticker = %ticker, count = closes.len(), "Fetched {} closing prices for {}", closes.len(), ticker);
        Ok(closes)
    }
}
