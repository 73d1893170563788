//! Environment-driven configuration

use crate::core::scheduler::interval_to_cron;
use crate::models::market::Market;
use std::env;
use thiserror::Error;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_YAHOO_API_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_EVAL_INTERVAL_SECONDS: u64 = 120;
pub const DEFAULT_LOOKBACK_RANGE: &str = "7d";
pub const DEFAULT_BAR_INTERVAL: &str = "15m";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid Telegram bot token: expected '<id>:<secret>'")]
    InvalidToken,

    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Current deployment environment (`APP_ENV`, defaults to "sandbox")
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub api_url: String,
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    pub api_url: String,
    pub lookback_range: String,
    pub bar_interval: String,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_YAHOO_API_URL.to_string(),
            lookback_range: DEFAULT_LOOKBACK_RANGE.to_string(),
            bar_interval: DEFAULT_BAR_INTERVAL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub telegram: TelegramConfig,
    pub market_data: MarketDataConfig,
    pub eval_interval_seconds: u64,
    pub default_market: Market,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source; `from_env` reads the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("TELEGRAM_BOT_TOKEN").ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;
        validate_token(&bot_token)?;
        let chat_id = lookup("TELEGRAM_CHAT_ID").ok_or(ConfigError::Missing("TELEGRAM_CHAT_ID"))?;

        let eval_interval_seconds = parse_or(&lookup, "EVAL_INTERVAL_SECONDS", DEFAULT_EVAL_INTERVAL_SECONDS)?;
        interval_to_cron(eval_interval_seconds).map_err(|_| ConfigError::Invalid {
            name: "EVAL_INTERVAL_SECONDS",
            value: eval_interval_seconds.to_string(),
        })?;

        let default_market = match lookup("DEFAULT_MARKET") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "DEFAULT_MARKET",
                value,
            })?,
            None => Market::default(),
        };

        Ok(Self {
            environment: lookup("APP_ENV").unwrap_or_else(|| "sandbox".to_string()),
            telegram: TelegramConfig {
                api_url: lookup("TELEGRAM_API_URL").unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
                bot_token,
                chat_id,
            },
            market_data: MarketDataConfig {
                api_url: lookup("YAHOO_API_URL").unwrap_or_else(|| DEFAULT_YAHOO_API_URL.to_string()),
                lookback_range: lookup("LOOKBACK_RANGE").unwrap_or_else(|| DEFAULT_LOOKBACK_RANGE.to_string()),
                bar_interval: lookup("BAR_INTERVAL").unwrap_or_else(|| DEFAULT_BAR_INTERVAL.to_string()),
            },
            eval_interval_seconds,
            default_market,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
        })
    }
}

fn validate_token(token: &str) -> Result<(), ConfigError> {
    match token.split_once(':') {
        Some((id, secret))
            if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) && !secret.is_empty() =>
        {
            Ok(())
        }
        _ => Err(ConfigError::InvalidToken),
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
