//! Error taxonomy for calls to the external API.
//!
//! ERROR HANDLING
//! ==============
//! Pages never show raw transport errors. They ask for `user_message` with a
//! page-specific fallback, which surfaces the API's own `message` when it
//! sent one.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::MessageResponse;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user: the API's `message` if any, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// True when the API rejected the bearer token itself (401). A 403 means
    /// the token is valid but lacks a role, which is not a reason to log out.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Build a status error from a non-2xx response body.
///
/// The body is usually a `MessageResponse`; anything else (HTML error pages,
/// empty bodies) yields a status error without a message.
#[must_use]
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<MessageResponse>(body).ok().map(|m| m.message);
    ApiError::Status { status, message }
}
