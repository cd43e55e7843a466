//! REST helpers for the assistant backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, non-2xx status, malformed body) maps to an
//! [`ApiError`] so callers can recover without panicking. There is no retry,
//! timeout, or cancellation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{AssistRequest, AssistResponse, TrendingItem};
use crate::config::ClientConfig;

pub const TRENDING_PATH: &str = "/api/trending";
pub const ASSIST_PATH: &str = "/api/assist";

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch trending items from `GET {base}/api/trending`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a body that is
/// not a JSON array of `{title}` objects.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn fetch_trending(config: &ClientConfig) -> Result<Vec<TrendingItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint(TRENDING_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Run one assist exchange via `POST {base}/api/assist`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a body missing
/// the `summary` field.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn post_assist(config: &ClientConfig, request: &AssistRequest) -> Result<AssistResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(ASSIST_PATH))
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
