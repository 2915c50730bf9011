//! API utilities for frontend-backend communication
//!
//! Every request to the REST backend goes through these helpers so that
//! failures are classified the same way everywhere:
//! - the fetch itself rejected → [`ApiError::Transport`]
//! - the backend answered non-2xx → [`ApiError::Rejected`] with its `{error}` text
//! - a 2xx body did not match the contract → [`ApiError::Decode`]

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the notification banner.
    ///
    /// Backend rejections are shown verbatim; transport and decode failures
    /// only get the generic `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message, .. } => format!("Error: {}", message),
            _ => fallback.to_string(),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

/// Message of a non-2xx response: the `{error}` field when present,
/// otherwise the HTTP status line
pub fn rejection_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.error;
    }
    if status_text.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {} {}", status, status_text)
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status,
        message: rejection_message(status, &status_text, &body),
    })
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    ensure_ok(response).await
}

async fn send_with_body<B>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError>
where
    B: Serialize + ?Sized,
{
    // `json` also sets Content-Type: application/json
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    ensure_ok(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    decode(send(Request::get(url)).await?).await
}

pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    decode(send_with_body(Request::post(url), body).await?).await
}

pub async fn put_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    decode(send_with_body(Request::put(url), body).await?).await
}

pub async fn patch_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    decode(send_with_body(Request::patch(url), body).await?).await
}

pub async fn delete_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    decode(send(Request::delete(url)).await?).await
}

/// Raw body of a 2xx response (the CSV export is not JSON)
pub async fn get_bytes(url: &str) -> Result<Vec<u8>, ApiError> {
    let response = send(Request::get(url)).await?;
    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_uses_backend_error_text() {
        let message = rejection_message(404, "NOT FOUND", r#"{"error": "Order not found"}"#);
        assert_eq!(message, "Order not found");
    }

    #[test]
    fn rejection_falls_back_to_status_line() {
        assert_eq!(
            rejection_message(502, "Bad Gateway", "<html>proxy</html>"),
            "HTTP 502 Bad Gateway"
        );
        assert_eq!(rejection_message(500, "", ""), "HTTP 500");
    }

    #[test]
    fn only_rejections_reach_the_user_verbatim() {
        let rejected = ApiError::Rejected {
            status: 400,
            message: "Required field: status".to_string(),
        };
        let transport = ApiError::Transport("TypeError: Failed to fetch".to_string());

        assert_eq!(
            rejected.user_message("Error updating the order"),
            "Error: Required field: status"
        );
        assert_eq!(
            transport.user_message("Error updating the order"),
            "Error updating the order"
        );
    }
}
