use base64::{Engine as _, engine::general_purpose};
use serde_json::{Map, Value};
use tracing::warn;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of an API Gateway event, REST (v1) or HTTP API (v2) shape.
pub fn extract_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["httpMethod"])
        .or_else(|| v_str(payload, &["requestContext", "http", "method"]))
}

pub fn get_header_value<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    let headers = payload.get("headers")?;
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Raw body text, base64-decoded when the gateway flagged it as encoded.
fn raw_body(payload: &Value) -> Option<String> {
    let body = payload.get("body")?.as_str()?;
    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Some(body.to_string());
    }

    let bytes = match general_purpose::STANDARD.decode(body) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to decode base64 body: {}", e);
            return None;
        }
    };
    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Decoded body is not valid UTF-8: {}", e);
            None
        }
    }
}

/// Parse the JSON form body, falling back to an empty object.
///
/// A missing, empty, malformed, or non-object body all yield `{}`.
pub fn parse_json_body(payload: &Value) -> Value {
    let empty = || Value::Object(Map::new());

    let Some(text) = raw_body(payload) else {
        return empty();
    };
    if text.trim().is_empty() {
        return empty();
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(v) if v.is_object() => v,
        Ok(_) => {
            warn!("Request body is not a JSON object");
            empty()
        }
        Err(e) => {
            warn!("Invalid JSON body: {}", e);
            empty()
        }
    }
}
