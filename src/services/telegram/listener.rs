//! Long-polling loop that answers market commands

use crate::core::commands::{Command, CommandRouter};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::client::TelegramClient;
use super::messages::Update;

const POLL_TIMEOUT_SECONDS: u64 = 30;
const ERROR_BACKOFF: Duration = Duration::from_secs(5);

pub struct CommandListener {
    client: TelegramClient,
    router: Arc<CommandRouter>,
    poll_timeout_seconds: u64,
}

impl CommandListener {
    pub fn new(client: TelegramClient, router: Arc<CommandRouter>) -> Self {
        Self {
            client,
            router,
            poll_timeout_seconds: POLL_TIMEOUT_SECONDS,
        }
    }

    pub fn with_poll_timeout(mut self, seconds: u64) -> Self {
        self.poll_timeout_seconds = seconds;
        self
    }

    /// Poll forever. Errors are logged and polling resumes after a pause.
    pub async fn run(self) {
        info!("CommandListener: polling for chat commands");
        let mut offset = 0;
        loop {
            match self.poll(offset).await {
                Ok(next) => offset = next,
                Err(e) => {
                    warn!(error = %e, "CommandListener: polling failed, retrying in {:?}", ERROR_BACKOFF);
                    tokio::time::sleep(ERROR_BACKOFF).await;
                }
            }
        }
    }

    /// Fetch one batch of updates, answer them and return the next offset.
    pub async fn poll(&self, offset: i64) -> Result<i64, crate::services::notifier::NotifyError> {
        let updates = self.client.get_updates(offset, self.poll_timeout_seconds).await?;
        let mut next = offset;
        for update in updates {
            next = next.max(update.update_id + 1);
            self.handle_update(update).await;
        }
        Ok(next)
    }

    async fn handle_update(&self, update: Update) {
        let Some(message) = update.message else {
            return;
        };
        let Some(command) = message.text.as_deref().and_then(Command::parse) else {
            debug!(update_id = update.update_id, "Ignoring non-command message");
            return;
        };

        let chat_id = message.chat.id.to_string();
        debug!(chat_id = %chat_id, command = ?command, "Received command");

        // The extra cycle runs on its own task; it is not awaited here.
        let outcome = self.router.handle(command).await;
        if let Err(e) = self.client.send_message(&chat_id, &outcome.reply).await {
            error!(chat_id = %chat_id, error = %e, "Failed to reply to command");
        }
    }
}
