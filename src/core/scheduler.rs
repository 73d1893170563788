//! Cron-based scheduler for recurring signal cycles

use crate::core::cycle::SignalCycle;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq)]
pub enum SchedulerError {
    #[error("scheduler disabled: interval_seconds is 0")]
    Disabled,

    #[error("interval of {0}s does not divide evenly into a minute, hour or day")]
    UnsupportedInterval(u64),

    #[error("invalid cron expression '{expr}': {message}")]
    InvalidCron { expr: String, message: String },
}

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Cron expression (seconds resolution) firing every `interval_seconds`.
///
/// Cron steps restart at each minute, hour and day boundary, so only
/// intervals that divide the enclosing unit evenly keep a fixed gap between
/// ticks. Anything else is rejected.
pub fn interval_to_cron(interval_seconds: u64) -> Result<String, SchedulerError> {
    let unsupported = || SchedulerError::UnsupportedInterval(interval_seconds);
    match interval_seconds {
        0 => Err(SchedulerError::Disabled),
        s if s < MINUTE => (MINUTE % s == 0)
            .then(|| format!("*/{} * * * * *", s))
            .ok_or_else(unsupported),
        s if s < HOUR => (s % MINUTE == 0 && HOUR % s == 0)
            .then(|| format!("0 */{} * * * *", s / MINUTE))
            .ok_or_else(unsupported),
        s if s < DAY => (s % HOUR == 0 && DAY % s == 0)
            .then(|| format!("0 0 */{} * * *", s / HOUR))
            .ok_or_else(unsupported),
        DAY => Ok("0 0 0 * * *".to_string()),
        _ => Err(unsupported()),
    }
}

/// Runs the signal cycle on every cron tick
pub struct CycleScheduler {
    cycle: Arc<SignalCycle>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl CycleScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `cycle` - The cycle to run on each tick
    /// * `interval_seconds` - Evaluation interval in seconds (0 = disabled)
    pub fn new(cycle: Arc<SignalCycle>, interval_seconds: u64) -> Result<Self, SchedulerError> {
        let cron_expr = interval_to_cron(interval_seconds)?;
        let schedule = Schedule::from_str(&cron_expr).map_err(|e| SchedulerError::InvalidCron {
            expr: cron_expr.clone(),
            message: e.to_string(),
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "CycleScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            cycle,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the scheduler
    pub async fn start(&self) {
        let cycle = self.cycle.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("CycleScheduler: started, waiting for cron schedule...");

            loop {
                let next_tick = schedule.upcoming(chrono::Utc).next();
                match next_tick {
                    Some(next_tick) => {
                        let now = chrono::Utc::now();
                        if next_tick > now {
                            let duration = (next_tick - now).to_std().unwrap_or_default();
                            debug!(wait_ms = duration.as_millis() as u64, "CycleScheduler: sleeping until next tick");
                            tokio::time::sleep(duration).await;
                        }
                    }
                    None => {
                        tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                        continue;
                    }
                }

                debug!("CycleScheduler: cron tick");
                cycle.run_once().await;
            }
        });

        let mut h = self.handle.write().await;
        if let Some(previous) = h.replace(handle) {
            previous.abort();
        }
        info!("CycleScheduler: started successfully");
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("CycleScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
