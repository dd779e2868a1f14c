//! API Lambda handler for website form submissions.
//!
//! This module handles:
//! - CORS preflight (`OPTIONS`)
//! - Method validation
//! - Form validation and notification delivery (`POST`)

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::Submission;
use crate::errors::RequestError;
use crate::notification::format_notification;
use crate::telegram::{deliver_notification, shared_http_client};
use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{info, warn};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Reads the configuration from the environment on every invocation and
/// delegates to [`handle_request`].
///
/// # Errors
///
/// Never returns an error; every outcome is an HTTP-shaped response.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();
    Ok(handle_request(&config, shared_http_client(), &event.payload).await)
}

/// Route an API Gateway event to a response.
pub async fn handle_request(
    config: &AppConfig,
    http_client: &HttpClient,
    payload: &Value,
) -> Value {
    let method = parsing::extract_method(payload);
    info!(
        method = method.unwrap_or("<none>"),
        origin = parsing::get_header_value(payload, "Origin").unwrap_or(""),
        "API Lambda received request"
    );

    match method {
        Some("OPTIONS") => helpers::ok_preflight(),
        Some("POST") => handle_submission(config, http_client, payload).await,
        _ => {
            warn!("Rejecting unsupported method");
            helpers::request_error(&RequestError::MethodNotAllowed)
        }
    }
}

async fn handle_submission(
    config: &AppConfig,
    http_client: &HttpClient,
    payload: &Value,
) -> Value {
    let body = parsing::parse_json_body(payload);
    let submission = Submission::from_body(&body);

    if let Err(e) = submission.validate() {
        warn!("Rejecting submission: {}", e);
        return helpers::request_error(&e);
    }

    let text = format_notification(&submission, &config.site_name);

    #[cfg(feature = "debug-logs")]
    info!("Notification text:\n{}", text);

    #[cfg(not(feature = "debug-logs"))]
    info!(
        form_type = submission.form_type.as_str(),
        has_message = !submission.message.is_empty(),
        text_len = text.chars().count(),
        "Accepted submission"
    );

    let outcome = deliver_notification(config, http_client, &text).await;
    helpers::ok_submitted(outcome.notified())
}
