use reqwest::Client as HttpClient;
use tracing::{error, info, warn};

use super::client::TelegramClient;
use crate::core::config::AppConfig;
use crate::errors::{DeliveryError, SkipReason};

/// Result of the single delivery attempt for a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    Skipped(SkipReason),
    Failed(DeliveryError),
}

impl DeliveryOutcome {
    /// Collapses the outcome into the `notified` flag of the response.
    #[must_use]
    pub fn notified(&self) -> bool {
        matches!(self, DeliveryOutcome::Sent)
    }
}

/// Relay `text` to the configured chat, recording why it did not arrive if it didn't.
///
/// Never fails: missing credentials skip the network entirely and every
/// transport or API error is logged and folded into the outcome.
pub async fn deliver_notification(
    config: &AppConfig,
    http_client: &HttpClient,
    text: &str,
) -> DeliveryOutcome {
    let client = match TelegramClient::from_config(config) {
        Ok(client) => client,
        Err(reason) => {
            warn!("Skipping Telegram notification: {}", reason);
            return DeliveryOutcome::Skipped(reason);
        }
    };

    match client.send_message(http_client, text).await {
        Ok(()) => {
            info!(chat_id = %client.chat_id(), "Telegram notification sent");
            DeliveryOutcome::Sent
        }
        Err(e) => {
            error!(chat_id = %client.chat_id(), "Failed to send Telegram notification: {}", e);
            DeliveryOutcome::Failed(e)
        }
    }
}
