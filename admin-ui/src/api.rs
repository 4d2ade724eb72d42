//! Record Store HTTP client
//!
//! The settings panel never talks to `gloo_net` directly: it goes through the
//! [`RecordStore`] trait so the write coordinator can be exercised against an
//! in-memory store in native tests. [`HttpRecordStore`] is the production
//! implementation.

use async_trait::async_trait;
use gloo_net::http::Request;
use shared_types::{RecordDraft, RecordFields, RefKind, RefRecord};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    // If running on localhost, point to the API server on port 8080
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

async fn describe_http_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({error})");
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

fn kind_url(kind: RefKind) -> String {
    format!("{}/admin/reference/{}", api_base(), kind.endpoint())
}

fn record_url(kind: RefKind, code: &str) -> String {
    let encoded = js_sys::encode_uri_component(code)
        .as_string()
        .unwrap_or_else(|| code.to_string());
    format!("{}/{}", kind_url(kind), encoded)
}

pub async fn list_records(kind: RefKind) -> Result<Vec<RefRecord>, String> {
    let response = Request::get(&kind_url(kind))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn create_record(kind: RefKind, draft: &RecordDraft) -> Result<RefRecord, String> {
    let response = Request::post(&kind_url(kind))
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn update_record(
    kind: RefKind,
    code: &str,
    fields: &RecordFields,
) -> Result<RefRecord, String> {
    let response = Request::patch(&record_url(kind, code))
        .json(fields)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn delete_record(kind: RefKind, id: i64) -> Result<(), String> {
    let url = format!("{}/{}", kind_url(kind), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    Ok(())
}

/// Remote service owning reference-data persistence. All failures carry a
/// human-readable message.
///
/// WASM futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait RecordStore {
    async fn list(&self, kind: RefKind) -> Result<Vec<RefRecord>, String>;
    async fn create(&self, kind: RefKind, draft: &RecordDraft) -> Result<RefRecord, String>;
    async fn update(
        &self,
        kind: RefKind,
        code: &str,
        fields: &RecordFields,
    ) -> Result<RefRecord, String>;
    async fn delete(&self, kind: RefKind, id: i64) -> Result<(), String>;
}

/// [`RecordStore`] backed by the Record Store HTTP service.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRecordStore;

#[async_trait(?Send)]
impl RecordStore for HttpRecordStore {
    async fn list(&self, kind: RefKind) -> Result<Vec<RefRecord>, String> {
        list_records(kind).await
    }

    async fn create(&self, kind: RefKind, draft: &RecordDraft) -> Result<RefRecord, String> {
        create_record(kind, draft).await
    }

    async fn update(
        &self,
        kind: RefKind,
        code: &str,
        fields: &RecordFields,
    ) -> Result<RefRecord, String> {
        update_record(kind, code, fields).await
    }

    async fn delete(&self, kind: RefKind, id: i64) -> Result<(), String> {
        delete_record(kind, id).await
    }
}
