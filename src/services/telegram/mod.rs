//! Telegram Bot API: signal delivery and market commands

pub mod client;
pub mod listener;
pub mod messages;

pub use client::{TelegramClient, TelegramNotifier};
pub use listener::CommandListener;
