//! API utilities for frontend-backend communication
//!
//! Every request goes through the `ApiResponse` envelope; any failure
//! (network, HTTP status, `success: false`) is flattened to a `String`.

use contracts::shared::load_state::ApiResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path and optional query parameters.
/// Empty parameter values are skipped.
pub fn api_url(path: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        format!("{}{}", api_base(), path)
    } else {
        format!("{}{}?{}", api_base(), path, query)
    }
}

async fn read_envelope<T: DeserializeOwned + Default>(
    response: gloo_net::http::Response,
) -> Result<T, String> {
    let status = response.status();
    match response.json::<ApiResponse<T>>().await {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !response.ok() => Err(format!("HTTP {}", status)),
        Err(e) => Err(e.to_string()),
    }
}

/// GET коллекции
pub async fn fetch_collection<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, &str)],
) -> Result<Vec<T>, String> {
    let response = Request::get(&api_url(path, params))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope(response).await
}

/// DELETE записи; возвращает id удаленной записи
pub async fn delete_record(path: &str, id: &str) -> Result<String, String> {
    let url = format!("{}/{}", api_url(path, &[]), urlencoding::encode(id));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope(response).await
}
