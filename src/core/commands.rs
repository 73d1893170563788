//! Chat commands for choosing the tracked market

use crate::core::cycle::{CycleReport, SignalCycle};
use crate::models::market::Market;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

pub const START_REPLY: &str = "Bot active! Use /market to choose a market.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    ListMarkets,
    Select(Market),
}

impl Command {
    /// Parse the first word of a chat message.
    ///
    /// Accepts `/cmd` and `/cmd@botname`; anything else is `None`.
    pub fn parse(text: &str) -> Option<Command> {
        let word = text.split_whitespace().next()?;
        let name = word.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name).to_ascii_lowercase();

        match name.as_str() {
            "start" => Some(Command::Start),
            "market" | "markets" => Some(Command::ListMarkets),
            other => Market::ALL
                .into_iter()
                .find(|m| m.command() == other)
                .map(Command::Select),
        }
    }
}

/// Listing shown for `/market`
pub fn market_menu() -> String {
    let mut menu = String::from("Choose market:");
    for market in Market::ALL {
        menu.push_str(&format!("\n/{} - {}", market.command(), market.label()));
    }
    menu
}

pub struct CommandOutcome {
    pub reply: String,
    /// The extra cycle started by a market switch
    pub cycle: Option<JoinHandle<CycleReport>>,
}

pub struct CommandRouter {
    cycle: Arc<SignalCycle>,
}

impl CommandRouter {
    pub fn new(cycle: Arc<SignalCycle>) -> Self {
        Self { cycle }
    }

    pub async fn selected(&self) -> Market {
        self.cycle.selected_market().get().await
    }

    pub async fn handle(&self, command: Command) -> CommandOutcome {
        match command {
            Command::Start => CommandOutcome {
                reply: START_REPLY.to_string(),
                cycle: None,
            },
            Command::ListMarkets => CommandOutcome {
                reply: market_menu(),
                cycle: None,
            },
            Command::Select(market) => self.select(market).await,
        }
    }

    /// Switch markets and start one cycle on its own task.
    pub async fn select(&self, market: Market) -> CommandOutcome {
        let previous = self.cycle.selected_market().set(market).await;
        info!(
            from = %previous.ticker(),
            to = %market.ticker(),
            "Market changed to {}",
            market.label()
        );

        let cycle = self.cycle.clone();
        let handle = tokio::spawn(async move { cycle.run_once().await });

        CommandOutcome {
            reply: format!("Market changed to {}.", market.label()),
            cycle: Some(handle),
        }
    }
}
