//! Diary API Client
//!
//! Typed fetch wrappers over the backend REST endpoints. Every call
//! resolves to `Result<T, ApiError>` so call sites match on the failure
//! class instead of probing ad hoc response fields.

use std::fmt;

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{DiaryEntry, EntryPatch, NewEntry};

/// Failure classes for a backend call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, aborted, ...)
    Network(String),
    /// The response body was not the JSON shape we expect
    Decode(String),
    /// The backend answered with `ok: false`
    Rejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) | ApiError::Decode(msg) | ApiError::Rejected(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Ack envelope returned by the mutating endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Ack {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    entry: Option<DiaryEntry>,
}

/// Map an ack to the entry it carries, or the rejection it reports
fn ack_outcome(ack: Ack) -> ApiResult<Option<DiaryEntry>> {
    if ack.ok {
        Ok(ack.entry)
    } else {
        Err(ApiError::Rejected(
            ack.error.unwrap_or_else(|| "unknown".to_string()),
        ))
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "request failed".to_string())
}

/// Issue a request and parse the response body as JSON
async fn fetch_json(method: &str, url: &str, body: Option<String>) -> ApiResult<JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(js_message(&e)))?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(js_message(&e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Decode("not a Response".to_string()))?;
    let json = response.json().map_err(|e| ApiError::Decode(js_message(&e)))?;
    JsFuture::from(json)
        .await
        .map_err(|e| ApiError::Decode(js_message(&e)))
}

fn decode<T: serde::de::DeserializeOwned>(value: JsValue) -> ApiResult<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn fetch_ack(method: &str, url: &str, body: Option<String>) -> ApiResult<Option<DiaryEntry>> {
    let value = fetch_json(method, url, body).await?;
    ack_outcome(decode::<Ack>(value)?)
}

// ========================
// Diary Endpoints
// ========================

pub async fn list_entries() -> ApiResult<Vec<DiaryEntry>> {
    let value = fetch_json("GET", "/api/diary", None).await?;
    decode(value)
}

pub async fn add_entry(entry: &NewEntry) -> ApiResult<Option<DiaryEntry>> {
    let body = serde_json::to_string(entry).map_err(|e| ApiError::Decode(e.to_string()))?;
    fetch_ack("POST", "/api/diary", Some(body)).await
}

pub async fn update_entry(id: u32, patch: &EntryPatch) -> ApiResult<Option<DiaryEntry>> {
    let body = serde_json::to_string(patch).map_err(|e| ApiError::Decode(e.to_string()))?;
    fetch_ack("PATCH", &format!("/api/diary/{id}"), Some(body)).await
}

pub async fn delete_entry(id: u32) -> ApiResult<()> {
    fetch_ack("DELETE", &format!("/api/diary/{id}"), None)
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_ok_carries_entry() {
        let ack = Ack { ok: true, error: None, entry: None };
        assert_eq!(ack_outcome(ack), Ok(None));
    }

    #[test]
    fn test_ack_rejected_uses_server_text() {
        let ack = Ack { ok: false, error: Some("title is required".to_string()), entry: None };
        assert_eq!(
            ack_outcome(ack),
            Err(ApiError::Rejected("title is required".to_string()))
        );
    }

    #[test]
    fn test_ack_rejected_falls_back_to_unknown() {
        let ack = Ack { ok: false, error: None, entry: None };
        assert_eq!(ack_outcome(ack), Err(ApiError::Rejected("unknown".to_string())));
    }

    #[test]
    fn test_error_display_is_bare_message() {
        let err = ApiError::Rejected("boom".to_string());
        assert_eq!(format!("Error: {}", err), "Error: boom");
    }
}
