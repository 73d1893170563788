//! Selectable currency pairs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    EurUsd,
    UsdJpy,
    GbpUsd,
}

impl Market {
    pub const ALL: [Market; 3] = [Market::EurUsd, Market::UsdJpy, Market::GbpUsd];

    /// Ticker understood by the market data provider
    pub fn ticker(&self) -> &'static str {
        match self {
            Market::EurUsd => "EURUSD=X",
            Market::UsdJpy => "USDJPY=X",
            Market::GbpUsd => "GBPUSD=X",
        }
    }

    /// Command keyword without the leading slash
    pub fn command(&self) -> &'static str {
        match self {
            Market::EurUsd => "eurusd",
            Market::UsdJpy => "usdjpy",
            Market::GbpUsd => "gbpusd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Market::EurUsd => "EUR/USD",
            Market::UsdJpy => "USD/JPY",
            Market::GbpUsd => "GBP/USD",
        }
    }

    /// Lookup by command keyword, ticker or label (case-insensitive)
    pub fn find(value: &str) -> Option<Market> {
        let value = value.trim().trim_start_matches('/');
        Self::ALL.into_iter().find(|m| {
            m.command().eq_ignore_ascii_case(value)
                || m.ticker().eq_ignore_ascii_case(value)
                || m.label().eq_ignore_ascii_case(value)
        })
    }
}

impl Default for Market {
    fn default() -> Self {
        Market::EurUsd
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown market '{0}'")]
pub struct UnknownMarket(pub String);

impl FromStr for Market {
    type Err = UnknownMarket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Market::find(s).ok_or_else(|| UnknownMarket(s.to_string()))
    }
}
