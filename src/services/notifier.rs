//! Outbound signal notifications

use crate::models::market::Market;
use crate::models::signal::Signal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("delivery rejected: {0}")]
    Rejected(String),
}

#[async_trait::async_trait]
pub trait Notifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

/// Message body sent for a BUY or SELL signal
pub fn format_signal_message(signal: Signal, market: Market) -> String {
    format!("Trading Signal: {}\nMarket: {}", signal, market.ticker())
}
