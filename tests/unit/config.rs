//! Unit tests for configuration loading

use fxsignal::config::{Config, ConfigError};
use fxsignal::models::market::Market;
use std::collections::HashMap;

fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

const TOKEN: (&str, &str) = ("TELEGRAM_BOT_TOKEN", "123456:ABC-def_ghi");
const CHAT: (&str, &str) = ("TELEGRAM_CHAT_ID", "42");

#[test]
fn test_defaults() {
    let config = load(&[TOKEN, CHAT]).unwrap();
    assert_eq!(config.environment, "sandbox");
    assert_eq!(config.eval_interval_seconds, 120);
    assert_eq!(config.default_market, Market::EurUsd);
    assert_eq!(config.port, 8080);
    assert_eq!(config.market_data.lookback_range, "7d");
    assert_eq!(config.market_data.bar_interval, "15m");
    assert_eq!(config.market_data.api_url, "https://query1.finance.yahoo.com");
    assert_eq!(config.telegram.api_url, "https://api.telegram.org");
    assert_eq!(config.telegram.chat_id, "42");
}

#[test]
fn test_overrides() {
    let config = load(&[
        TOKEN,
        CHAT,
        ("APP_ENV", "production"),
        ("EVAL_INTERVAL_SECONDS", "300"),
        ("DEFAULT_MARKET", "usdjpy"),
        ("PORT", "9000"),
        ("BAR_INTERVAL", "5m"),
    ])
    .unwrap();
    assert_eq!(config.environment, "production");
    assert_eq!(config.eval_interval_seconds, 300);
    assert_eq!(config.default_market, Market::UsdJpy);
    assert_eq!(config.port, 9000);
    assert_eq!(config.market_data.bar_interval, "5m");
}

#[test]
fn test_missing_token() {
    assert_eq!(
        load(&[CHAT]).unwrap_err(),
        ConfigError::Missing("TELEGRAM_BOT_TOKEN")
    );
}

#[test]
fn test_missing_chat_id() {
    assert_eq!(
        load(&[TOKEN]).unwrap_err(),
        ConfigError::Missing("TELEGRAM_CHAT_ID")
    );
}

#[test]
fn test_malformed_token_is_rejected() {
    for token in ["", "no-colon", ":secret", "123:", "abc:secret"] {
        assert_eq!(
            load(&[("TELEGRAM_BOT_TOKEN", token), CHAT]).unwrap_err(),
            ConfigError::InvalidToken,
            "token {:?}",
            token
        );
    }
}

#[test]
fn test_zero_interval_is_rejected() {
    assert!(matches!(
        load(&[TOKEN, CHAT, ("EVAL_INTERVAL_SECONDS", "0")]).unwrap_err(),
        ConfigError::Invalid { name: "EVAL_INTERVAL_SECONDS", .. }
    ));
}

#[test]
fn test_interval_without_fixed_cadence_is_rejected() {
    for interval in ["45", "90", "420", "5400", "172800"] {
        assert_eq!(
            load(&[TOKEN, CHAT, ("EVAL_INTERVAL_SECONDS", interval)]).unwrap_err(),
            ConfigError::Invalid {
                name: "EVAL_INTERVAL_SECONDS",
                value: interval.to_string(),
            }
        );
    }
    assert_eq!(load(&[TOKEN, CHAT, ("EVAL_INTERVAL_SECONDS", "7200")]).unwrap().eval_interval_seconds, 7200);
}

#[test]
fn test_invalid_numbers_and_markets() {
    assert!(matches!(
        load(&[TOKEN, CHAT, ("PORT", "eighty")]).unwrap_err(),
        ConfigError::Invalid { name: "PORT", .. }
    ));
    assert!(matches!(
        load(&[TOKEN, CHAT, ("DEFAULT_MARKET", "btcusd")]).unwrap_err(),
        ConfigError::Invalid { name: "DEFAULT_MARKET", .. }
    ));
}
