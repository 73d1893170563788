//! FX Signal Bot
//!
//! Evaluates the selected currency pair on a fixed interval and posts BUY/SELL
//! signals to a Telegram chat. Chat commands switch the tracked market.

use dotenvy::dotenv;
use fxsignal::config::Config;
use fxsignal::core::commands::CommandRouter;
use fxsignal::core::cycle::SignalCycle;
use fxsignal::core::runtime::{BotRuntime, RuntimeConfig};
use fxsignal::core::state::SelectedMarket;
use fxsignal::logging;
use fxsignal::metrics::Metrics;
use fxsignal::services::market_data::MarketDataProvider;
use fxsignal::services::notifier::Notifier;
use fxsignal::services::telegram::{CommandListener, TelegramClient, TelegramNotifier};
use fxsignal::services::yahoo::YahooFinanceProvider;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env()?;
    info!("Starting FX Signal Bot");
    info!(environment = %config.environment, "Environment");
    info!(
        interval = config.eval_interval_seconds,
        lookback = %config.market_data.lookback_range,
        bar_interval = %config.market_data.bar_interval,
        "Signal evaluation: every {} seconds",
        config.eval_interval_seconds
    );
    info!(market = %config.default_market.ticker(), "Initial market: {}", config.default_market);

    let metrics = Arc::new(Metrics::new()?);

    let data_provider: Arc<dyn MarketDataProvider + Send + Sync> =
        Arc::new(YahooFinanceProvider::new(&config.market_data)?);
    let telegram = TelegramClient::new(&config.telegram)?;
    let notifier: Arc<dyn Notifier + Send + Sync> = Arc::new(TelegramNotifier::new(
        telegram.clone(),
        config.telegram.chat_id.clone(),
    ));

    let selected = SelectedMarket::new(config.default_market);
    let cycle = Arc::new(
        SignalCycle::new(data_provider, notifier, selected, config.market_data.clone())
            .with_metrics(metrics.clone()),
    );
    let commands = Arc::new(CommandRouter::new(cycle.clone()));
    let listener = CommandListener::new(telegram, commands.clone());

    let runtime = BotRuntime::new(
        RuntimeConfig {
            evaluation_interval_seconds: config.eval_interval_seconds,
            port: config.port,
            run_on_startup: true,
        },
        cycle,
        commands,
        metrics,
    );
    let handles = runtime.start(Some(listener)).await?;

    info!(port = config.port, "Bot running, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down bot...");
    handles.shutdown().await;
    info!("Bot stopped");

    Ok(())
}
