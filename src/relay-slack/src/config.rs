//! Configuration for Slack integration.
//!
//! Holds the two tokens a Socket Mode bot needs. Values are wrapped in
//! `SecretString` so they never show up in logs.

use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

use crate::error::{SlackError, SlackResult};

/// Default Slack Web API base URL.
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

/// Configuration for Slack integration.
#[derive(Clone)]
pub struct SlackConfig {
    /// Bot OAuth token (xoxb-...).
    bot_token: SecretString,
    /// App-level token for Socket Mode (xapp-...).
    app_token: SecretString,
    /// Web API base URL.
    api_base_url: String,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("bot_token", &"[REDACTED]")
            .field("app_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl SlackConfig {
    /// Create a new configuration with required tokens.
    pub fn new(bot_token: impl Into<String>, app_token: impl Into<String>) -> Self {
        let bot_token = bot_token.into();
        let app_token = app_token.into();

        if !bot_token.starts_with("xoxb-") {
            warn!("Bot token doesn't start with 'xoxb-', this may be incorrect");
        }
        if !app_token.starts_with("xapp-") {
            warn!("App token doesn't start with 'xapp-', this may be incorrect");
        }

        Self {
            bot_token: SecretString::new(bot_token.into()),
            app_token: SecretString::new(app_token.into()),
            api_base_url: DEFAULT_SLACK_API_URL.to_string(),
        }
    }

    /// Point Web API calls at a different base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the bot token.
    pub fn bot_token(&self) -> &str {
        self.bot_token.expose_secret()
    }

    /// Get the app token for Socket Mode.
    pub fn app_token(&self) -> &str {
        self.app_token.expose_secret()
    }

    /// Get the Web API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Validate the configuration.
    pub fn validate(&self) -> SlackResult<()> {
        if self.bot_token.expose_secret().is_empty() {
            return Err(SlackError::Config("Bot token is empty".to_string()));
        }
        if self.app_token.expose_secret().is_empty() {
            return Err(SlackError::Config("App token is empty".to_string()));
        }
        if !self.app_token.expose_secret().starts_with("xapp-") {
            return Err(SlackError::Config(
                "App token must start with 'xapp-'".to_string(),
            ));
        }

        Ok(())
    }
}
