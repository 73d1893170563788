//! Starts the bot's independent tasks

use crate::core::commands::CommandRouter;
use crate::core::cycle::SignalCycle;
use crate::core::http::{start_server, AppState};
use crate::core::scheduler::{CycleScheduler, SchedulerError};
use crate::metrics::Metrics;
use crate::services::telegram::CommandListener;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Configuration for the bot runtime
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub evaluation_interval_seconds: u64,
    pub port: u16,
    pub run_on_startup: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            evaluation_interval_seconds: 120,
            port: 8080,
            run_on_startup: true,
        }
    }
}

/// Scheduler, command listener and HTTP server, each on its own task so a
/// slow data fetch never delays command handling.
pub struct BotRuntime {
    config: RuntimeConfig,
    cycle: Arc<SignalCycle>,
    commands: Arc<CommandRouter>,
    metrics: Arc<Metrics>,
}

pub struct RuntimeHandles {
    pub scheduler: CycleScheduler,
    pub tasks: Vec<JoinHandle<()>>,
}

impl RuntimeHandles {
    pub async fn shutdown(self) {
        self.scheduler.stop().await;
        for handle in self.tasks {
            handle.abort();
        }
    }
}

impl BotRuntime {
    pub fn new(
        config: RuntimeConfig,
        cycle: Arc<SignalCycle>,
        commands: Arc<CommandRouter>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            config,
            cycle,
            commands,
            metrics,
        }
    }

    pub async fn start(&self, listener: Option<CommandListener>) -> Result<RuntimeHandles, SchedulerError> {
        let mut tasks = Vec::new();

        if self.config.run_on_startup {
            let cycle = self.cycle.clone();
            tasks.push(tokio::spawn(async move {
                cycle.run_once().await;
            }));
        }

        let scheduler = CycleScheduler::new(self.cycle.clone(), self.config.evaluation_interval_seconds)?;
        scheduler.start().await;

        if let Some(listener) = listener {
            tasks.push(tokio::spawn(listener.run()));
        }

        let state = AppState::new(self.metrics.clone(), self.commands.clone());
        let port = self.config.port;
        tasks.push(tokio::spawn(async move {
            if let Err(e) = start_server(state, port).await {
                error!(error = %e, "HTTP server error");
            }
        }));

        info!(tasks = tasks.len(), "BotRuntime: all tasks started");
        Ok(RuntimeHandles { scheduler, tasks })
    }
}
