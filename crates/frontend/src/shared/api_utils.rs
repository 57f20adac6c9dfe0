//! API utilities for frontend-backend communication
//!
//! URL construction from [`AppConfig`](super::config::AppConfig) and thin JSON
//! request helpers on top of `gloo_net`. Every request is a plain snapshot fetch:
//! no retry, timeout or caching.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::config::config;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured, otherwise the current window location
/// with the configured port. Empty string if the window is not available.
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname, api.port)
}

pub fn base_from_location(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path such as `/api/Products`
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

pub fn join_url(base: &str, path: &str) -> String {
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base, &path[1..]),
        (false, false) if !base.is_empty() => format!("{}/{}", base, path),
        _ => format!("{}{}", base, path),
    }
}

/// Path segment for an entity id, percent-encoded
pub fn id_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

async fn check(response: Response, url: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::error!("{} returned HTTP {}", url, status);
    Err(ApiError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to decode response from {}: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

fn request_failed(url: &str, e: gloo_net::Error) -> ApiError {
    log::error!("Request to {} failed: {}", url, e);
    ApiError::Request(e.to_string())
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| request_failed(&url, e))?;
    decode(check(response, &url).await?, &url).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("POST {}", url);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| request_failed(&url, e))?;
    decode(check(response, &url).await?, &url).await
}

/// PUT a JSON body; the response body is ignored
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("PUT {}", url);
    let response = Request::put(&url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| request_failed(&url, e))?;
    check(response, &url).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| request_failed(&url, e))?;
    check(response, &url).await?;
    Ok(())
}
