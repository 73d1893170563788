//! External collaborators: price data, notifications, chat commands.

pub mod market_data;
pub mod notifier;
pub mod telegram;
pub mod yahoo;

pub use market_data::{MarketDataError, MarketDataProvider};
pub use notifier::{format_signal_message, Notifier, NotifyError};
