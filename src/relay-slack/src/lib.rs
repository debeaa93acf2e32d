//! Slack integration for thread-relay.
//!
//! This crate provides the Slack side of the relay:
//! - Socket Mode connection for real-time `app_mention` events
//! - Web API calls used by the bot (`auth.test`, `conversations.replies`,
//!   `chat.postMessage`)
//! - Message formatting (Markdown to mrkdwn)
//!
//! # Architecture
//!
//! `SlackSocketBot` owns the WebSocket connection and acknowledges every
//! envelope before dispatching events to a `SlackEventHandler`. Handlers talk
//! back to Slack through the `SlackWebApi` trait, implemented by
//! `SlackWebClient`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use relay_slack::{SlackConfig, SlackSocketBot, SlackWebClient};
//!
//! let web = SlackWebClient::new(SlackConfig::new(bot_token, app_token))?;
//! let bot = SlackSocketBot::new(web, Arc::new(my_handler));
//! bot.run().await?;
//! ```
//!
//! # Tokens
//!
//! - Bot OAuth token (xoxb-...) for Web API calls
//! - App-level token (xapp-...) for opening Socket Mode connections

pub mod bot;
pub mod config;
pub mod error;
pub mod events;
pub mod messages;
pub mod web;

// Re-export main types
pub use bot::SlackSocketBot;
pub use config::SlackConfig;
pub use error::{SlackApiError, SlackError, SlackResult};
pub use events::{AppMentionEvent, EventContext, SlackEvent, SlackEventHandler};
pub use messages::{SlackMessageContent, markdown_to_mrkdwn};
pub use web::{AuthIdentity, SlackWebApi, SlackWebClient, ThreadMessage};
