//! Telegram Bot API client
//!
//! Wraps the single `sendMessage` call the relay needs.

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::config::AppConfig;
use crate::errors::{DeliveryError, SkipReason};

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(Client::new);

/// Process-wide HTTP client, reused across warm invocations.
#[must_use]
pub fn shared_http_client() -> &'static Client {
    &HTTP_CLIENT
}

/// JSON body of a `sendMessage` request.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'static str,
}

/// The part of Telegram's error envelope worth reporting.
#[derive(Debug, Deserialize)]
struct TelegramErrorBody {
    description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TelegramClient {
    endpoint: String,
    chat_id: String,
    timeout: Duration,
}

impl TelegramClient {
    /// # Errors
    ///
    /// Returns the [`SkipReason`] when the bot token or chat id is not configured.
    pub fn from_config(config: &AppConfig) -> Result<Self, SkipReason> {
        let token = config
            .telegram_bot_token
            .as_deref()
            .ok_or(SkipReason::MissingBotToken)?;
        let chat_id = config
            .telegram_chat_id
            .as_deref()
            .ok_or(SkipReason::MissingChatId)?;

        Ok(Self {
            endpoint: send_message_url(&config.telegram_api_base, token),
            chat_id: chat_id.to_string(),
            timeout: config.request_timeout,
        })
    }

    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send an HTML-formatted message to the configured chat. One attempt, no retries.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Http`] on connect/timeout/transport failures and
    /// [`DeliveryError::Status`] when Telegram answers with a non-2xx status.
    pub async fn send_message(&self, http: &Client, text: &str) -> Result<(), DeliveryError> {
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };

        let resp = http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        let description = serde_json::from_str::<TelegramErrorBody>(&body_text)
            .ok()
            .and_then(|b| b.description)
            .unwrap_or(body_text);

        Err(DeliveryError::Status {
            status: status.as_u16(),
            description,
        })
    }
}

fn send_message_url(api_base: &str, token: &str) -> String {
    format!("{}/bot{}/sendMessage", api_base.trim_end_matches('/'), token)
}
