//! Unit tests for chat command parsing

use fxsignal::core::commands::{market_menu, Command};
use fxsignal::models::market::Market;

#[test]
fn test_parse_known_commands() {
    assert_eq!(Command::parse("/start"), Some(Command::Start));
    assert_eq!(Command::parse("/market"), Some(Command::ListMarkets));
    assert_eq!(Command::parse("/eurusd"), Some(Command::Select(Market::EurUsd)));
    assert_eq!(Command::parse("/usdjpy"), Some(Command::Select(Market::UsdJpy)));
    assert_eq!(Command::parse("/gbpusd"), Some(Command::Select(Market::GbpUsd)));
}

#[test]
fn test_parse_ignores_case_bot_suffix_and_arguments() {
    assert_eq!(Command::parse("/GBPUSD"), Some(Command::Select(Market::GbpUsd)));
    assert_eq!(
        Command::parse("  /usdjpy@fx_signal_bot now please"),
        Some(Command::Select(Market::UsdJpy))
    );
}

#[test]
fn test_parse_rejects_other_text() {
    assert_eq!(Command::parse("hello"), None);
    assert_eq!(Command::parse("eurusd"), None);
    assert_eq!(Command::parse("/btcusd"), None);
    assert_eq!(Command::parse(""), None);
}

#[test]
fn test_market_menu_lists_every_market() {
    let menu = market_menu();
    assert!(menu.starts_with("Choose market:"));
    assert!(menu.contains("/eurusd - EUR/USD"));
    assert!(menu.contains("/usdjpy - USD/JPY"));
    assert!(menu.contains("/gbpusd - GBP/USD"));
}
