//! Minimal Telegram Bot API client over reqwest

use crate::config::TelegramConfig;
use crate::services::notifier::{Notifier, NotifyError};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::messages::{ApiResponse, SendMessageRequest, Update};

#[derive(Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    api_url: String,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(config: &TelegramConfig) -> Result<Self, NotifyError> {
        // Long polling holds requests open, so the timeout must outlast it.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(90))
            .build()?;
        Ok(Self::with_client(config.api_url.clone(), config.bot_token.clone(), client))
    }

    pub fn with_client(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.bot_token, method)
    }

    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?;
        let _: serde_json::Value = Self::unwrap_response(response).await?;
        Ok(())
    }

    /// Long-poll for updates newer than `offset`.
    pub async fn get_updates(&self, offset: i64, timeout_seconds: u64) -> Result<Vec<Update>, NotifyError> {
        let response = self
            .client
            .get(self.method_url("getUpdates"))
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", timeout_seconds.to_string()),
            ])
            .send()
            .await?;
        Self::unwrap_response(response).await
    }

    async fn unwrap_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, NotifyError> {
        let status = response.status();
        let body: ApiResponse<T> = match response.json().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(NotifyError::Http(e)),
            Err(_) => return Err(NotifyError::Rejected(format!("HTTP {}", status))),
        };

        if !body.ok {
            return Err(NotifyError::Rejected(format!(
                "{} ({})",
                body.description.unwrap_or_else(|| "unknown error".to_string()),
                body.error_code.unwrap_or_else(|| status.as_u16() as i64)
            )));
        }
        body.result
            .ok_or_else(|| NotifyError::Rejected("response without result".to_string()))
    }
}

/// Delivers signals to one fixed chat
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(client: TelegramClient, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            chat_id: chat_id.into(),
        }
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        self.client.send_message(&self.chat_id, text).await
    }
}
