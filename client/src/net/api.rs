//! REST helpers for the remote auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each aborted after
//! a fixed timeout so a hung request cannot leave a form stuck in loading.
//! Server-side (SSR) and native tests: calls return `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginRequest, ResetPasswordRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::MessageResponse;

/// Login endpoint path, relative to the configured base URL.
pub const LOGIN_PATH: &str = "/auth/login";
/// Password reset endpoint path, relative to the configured base URL.
pub const RESET_PASSWORD_PATH: &str = "/auth/reset-password";

#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Submit credentials via `POST /auth/login`.
///
/// The request is sent with `credentials: include` so the service can set its
/// session cookie.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for a non-2xx response and a transport variant
/// when no response could be obtained.
pub async fn login(request: &LoginRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::AppConfig::load().endpoint(LOGIN_PATH);
        let (status, body) = post_json(&url, request, true).await?;
        interpret_response(status, &body).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Submit a new password and the reset token pair via `POST /auth/reset-password`.
///
/// Returns the server-supplied confirmation message, if any.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for a non-2xx response and a transport variant
/// when no response could be obtained.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::AppConfig::load().endpoint(RESET_PASSWORD_PATH);
        let (status, body) = post_json(&url, request, false).await?;
        interpret_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Classify a received response.
///
/// The body must be JSON whatever the status; an empty or non-JSON body is a
/// transport-class failure, never a success. Otherwise 2xx is success.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_response(status: u16, body: &str) -> Result<Option<String>, ApiError> {
    let message = serde_json::from_str::<MessageResponse>(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .message;
    if (200..300).contains(&status) {
        Ok(message)
    } else {
        Err(ApiError::Rejected { status, message })
    }
}

/// Treat an aborted fetch as our own timeout; anything else is a network failure.
#[cfg(any(test, feature = "hydrate"))]
fn classify_transport_error(message: &str) -> ApiError {
    let lowered = message.to_lowercase();
    if lowered.contains("abort") || lowered.contains("timeout") {
        ApiError::Timeout
    } else {
        ApiError::Network(message.to_owned())
    }
}

/// POST a JSON body and return the status and raw response text.
#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    body: &B,
    with_credentials: bool,
) -> Result<(u16, String), ApiError> {
    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use web_sys::{AbortController, RequestCredentials};

    let payload = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let controller = AbortController::new()
        .map_err(|_| ApiError::Network("failed to initialize request timeout".to_owned()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(REQUEST_TIMEOUT_MS, move || timeout_controller.abort());

    let mut builder = Request::post(url)
        .header("Content-Type", "application/json")
        .abort_signal(Some(&signal));
    if with_credentials {
        builder = builder.credentials(RequestCredentials::Include);
    }
    let response = builder
        .body(payload)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| classify_transport_error(&e.to_string()))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    log::debug!("POST {url} -> {status}");
    Ok((status, text))
}
