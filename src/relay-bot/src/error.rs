//! Error types for the relay bot.

use relay_genai::GenAiError;
use relay_slack::SlackError;
use thiserror::Error;

/// Startup configuration errors. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required variables are unset or empty.
    #[error("Missing required env vars: {}", .0.join(", "))]
    MissingEnv(Vec<String>),

    /// A variable is set but cannot be used.
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Errors raised while answering a mention.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Slack(#[from] SlackError),

    #[error(transparent)]
    Completion(#[from] GenAiError),
}
