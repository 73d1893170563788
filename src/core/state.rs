//! The market the bot is currently tracking

use crate::models::market::Market;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the selected market.
///
/// Cycles take a copy at start; only the command surface writes.
#[derive(Clone, Debug, Default)]
pub struct SelectedMarket {
    inner: Arc<RwLock<Market>>,
}

impl SelectedMarket {
    pub fn new(market: Market) -> Self {
        Self {
            inner: Arc::new(RwLock::new(market)),
        }
    }

    pub async fn get(&self) -> Market {
        *self.inner.read().await
    }

    /// Replace the selection, returning the previous market
    pub async fn set(&self, market: Market) -> Market {
        let mut current = self.inner.write().await;
        std::mem::replace(&mut *current, market)
    }
}
