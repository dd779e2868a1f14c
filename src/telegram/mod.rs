//! All Telegram-specific functionality

pub mod client;
pub mod deliver;

// Re-export main types for convenience
pub use client::{SendMessageRequest, TelegramClient, shared_http_client};
pub use deliver::{DeliveryOutcome, deliver_notification};
