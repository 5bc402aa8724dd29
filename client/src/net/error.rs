//! Failure classification for auth service calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages never propagate these; they render `user_message` inline and leave
//! the form enabled for another attempt.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Text shown when no response could be obtained.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Why a call to the auth service did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected ({status})")]
    Rejected { status: u16, message: Option<String> },
    /// The request could not be sent or no response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The request was aborted by the client-side timeout.
    #[error("request timed out")]
    Timeout,
    /// A response arrived but its body was not JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// Called outside a browser (server rendering or native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// User-facing text for this failure.
    ///
    /// A server-supplied message wins; a rejection without one falls back to
    /// `fallback`. Every transport-level failure shares one generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(message), .. } if !message.is_empty() => {
                message.clone()
            }
            ApiError::Rejected { .. } => fallback.to_owned(),
            ApiError::Network(_)
            | ApiError::Timeout
            | ApiError::Decode(_)
            | ApiError::Encode(_)
            | ApiError::Unavailable => {
                NETWORK_ERROR_MESSAGE.to_owned()
            }
        }
    }
}
