use thiserror::Error;

/// Request-level errors that are surfaced to the caller as an error status.
///
/// The `Display` strings are exactly what the website form shows the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Имя и телефон обязательны")]
    MissingRequiredFields,
}

impl RequestError {
    /// HTTP status code the error is reported with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::MethodNotAllowed => 405,
            RequestError::MissingRequiredFields => 400,
        }
    }
}

/// Failures of the outbound Telegram call. Never surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Telegram API returned {status}: {description}")]
    Status { status: u16, description: String },
}

// The request URL carries the bot token, so it is stripped before the error is kept.
impl From<reqwest::Error> for DeliveryError {
    fn from(error: reqwest::Error) -> Self {
        DeliveryError::Http(error.without_url().to_string())
    }
}

/// Why delivery was not attempted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("TELEGRAM_BOT_TOKEN is not configured")]
    MissingBotToken,

    #[error("TELEGRAM_CHAT_ID is not configured")]
    MissingChatId,
}
