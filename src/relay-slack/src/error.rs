//! Error types for Slack integration.
//!
//! Covers network failures, Web API error codes, authentication problems
//! and Socket Mode WebSocket issues.

use thiserror::Error;

/// Errors that can occur during Slack operations.
#[derive(Error, Debug)]
pub enum SlackError {
    /// Configuration error (missing or invalid config).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication error (invalid token, revoked, etc.).
    #[error("Authentication error: {0}")]
    Auth(String),

    /// API request failed.
    #[error("Slack API error: {0}")]
    Api(String),

    /// API rate limited.
    #[error("Rate limited: retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// WebSocket connection error.
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Operation timed out.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Channel not found or bot not in channel.
    #[error("Channel error: {0}")]
    Channel(String),

    /// Thread not found.
    #[error("Thread error: {0}")]
    Thread(String),

    /// Invalid payload received from Slack.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for SlackError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SlackError::Timeout(err.to_string())
        } else if err.is_connect() {
            SlackError::Network(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            SlackError::Json(err.to_string())
        } else {
            SlackError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SlackError {
    fn from(err: serde_json::Error) -> Self {
        SlackError::Json(err.to_string())
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for SlackError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        SlackError::WebSocket(err.to_string())
    }
}

/// Result type for Slack operations.
pub type SlackResult<T> = std::result::Result<T, SlackError>;

/// A Web API response with `"ok": false`.
#[derive(Debug, Clone)]
pub struct SlackApiError {
    /// Error code from Slack (e.g., "channel_not_found").
    pub code: String,
    /// Name of the method that failed.
    pub method: String,
}

impl SlackApiError {
    pub fn new(method: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            method: method.into(),
        }
    }
}

impl From<SlackApiError> for SlackError {
    fn from(err: SlackApiError) -> Self {
        let detail = format!("{} failed: {}", err.method, err.code);
        match err.code.as_str() {
            "ratelimited" | "rate_limited" => SlackError::RateLimited {
                retry_after_secs: 30,
            },
            "invalid_auth" | "not_authed" | "account_inactive" | "token_revoked" => {
                SlackError::Auth(detail)
            }
            "channel_not_found" | "not_in_channel" | "is_archived" => SlackError::Channel(detail),
            "thread_not_found" => SlackError::Thread(detail),
            _ => SlackError::Api(detail),
        }
    }
}
