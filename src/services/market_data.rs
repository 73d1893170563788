//! Market data provider interface.

use crate::models::indicators::PriceSeries;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid provider URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("unexpected response (status {status}): {message}")]
    Decode { status: u16, message: String },

    #[error("provider error {code}: {description}")]
    Provider { code: String, description: String },
}

impl MarketDataError {
    /// Errors worth retrying: connection failures, timeouts and 5xx/429 replies.
    pub fn is_transient(&self) -> bool {
        match self {
            MarketDataError::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status()
                        .map(|s| s.is_server_error() || s.as_u16() == 429)
                        .unwrap_or(false)
            }
            MarketDataError::Decode { status, .. } => *status >= 500 || *status == 429,
            MarketDataError::Url(_) | MarketDataError::Provider { .. } => false,
        }
    }
}

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Closing prices for `ticker`, oldest first.
    ///
    /// `lookback` and `bar_interval` use the provider's notation ("7d", "15m").
    /// An empty series means no data this cycle and is not an error.
    async fn get_closes(
        &self,
        ticker: &str,
        lookback: &str,
        bar_interval: &str,
    ) -> Result<PriceSeries, MarketDataError>;
}
