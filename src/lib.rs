//! send-lead - relays website lead and callback forms to a Telegram chat.
//!
//! The crate is a single API Lambda sitting behind API Gateway. Each `POST`
//! from the site's contact form is validated, formatted as an HTML message,
//! and pushed to the Telegram Bot API with one best-effort call. Delivery
//! problems never fail the request; they only flip the `notified` flag.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (`lambda_runtime`) for serverless execution
//! - reqwest for the Telegram Bot API call
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use send_lead::core::config::AppConfig;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     send_lead::setup_logging();
//!
//!     let config = AppConfig {
//!         telegram_bot_token: Some("123456:dummy".to_string()),
//!         telegram_chat_id: Some("-1001234567890".to_string()),
//!         ..AppConfig::default()
//!     };
//!
//!     let event = json!({
//!         "httpMethod": "POST",
//!         "body": r#"{"name":"Ivan","phone":"+79990000000","form_type":"callback"}"#
//!     });
//!
//!     let response = send_lead::api::handle_request(
//!         &config,
//!         send_lead::telegram::shared_http_client(),
//!         &event,
//!     )
//!     .await;
//!     println!("{}", response["body"]);
//! }
//! ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod notification;
pub mod telegram;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// send_lead::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
