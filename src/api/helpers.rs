//! Response builders for the API handler.
//!
//! Every response is an API Gateway proxy result carrying the CORS headers
//! the website needs for cross-origin form posts.

use serde_json::{Value, json};

use crate::errors::RequestError;

// ============================================================================
// Headers
// ============================================================================

/// CORS headers attached to every response.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
    })
}

fn json_headers() -> Value {
    let mut headers = cors_headers();
    headers["Content-Type"] = Value::String("application/json".to_string());
    headers
}

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response with an empty body, for CORS preflight.
#[must_use]
pub fn ok_preflight() -> Value {
    json!({ "statusCode": 200, "headers": cors_headers(), "body": "" })
}

/// Returns a 200 OK response acknowledging an accepted submission.
#[must_use]
pub fn ok_submitted(notified: bool) -> Value {
    json_response(200, &json!({ "ok": true, "notified": notified }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Returns the error response for a rejected request.
#[must_use]
pub fn request_error(error: &RequestError) -> Value {
    err_response(error.status_code(), &error.to_string())
}

fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": json_headers(),
        "body": body.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(response: &Value) -> Value {
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_preflight_has_empty_body_and_cors() {
        let r = ok_preflight();
        assert_eq!(r["statusCode"], 200);
        assert_eq!(r["body"], "");
        assert_eq!(r["headers"]["Access-Control-Allow-Origin"], "*");
        assert!(r["headers"].get("Content-Type").is_none());
    }

    #[test]
    fn test_request_error_uses_status_and_message() {
        let r = request_error(&RequestError::MethodNotAllowed);
        assert_eq!(r["statusCode"], 405);
        assert_eq!(body_of(&r), json!({ "error": "Method not allowed" }));
        assert_eq!(r["headers"]["Content-Type"], "application/json");
        assert_eq!(r["headers"]["Access-Control-Allow-Methods"], "POST, OPTIONS");
    }

    #[test]
    fn test_ok_submitted_body() {
        let r = ok_submitted(false);
        assert_eq!(r["statusCode"], 200);
        assert_eq!(body_of(&r), json!({ "ok": true, "notified": false }));
    }
}
