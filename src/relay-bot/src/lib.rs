//! Thread relay bot.
//!
//! Answers Slack mentions by sending the surrounding thread to Gemini:
//!
//! 1. fetch the thread and keep the most recent messages ([`conversation`])
//! 2. map them to user/assistant turns ([`conversation`])
//! 3. ask the model, escalating to a search-grounded pass when it answers
//!    with the sentinel marker ([`escalation`])
//! 4. reply in the thread, or reply with the error ([`handler`])
//!
//! Configuration comes from the environment, see [`BotConfig::from_env`].

pub mod config;
pub mod conversation;
pub mod error;
pub mod escalation;
pub mod handler;

pub use config::BotConfig;
pub use error::{BotError, ConfigError};
pub use escalation::{EscalationPolicy, Reply, SEARCH_ANNOTATION};
pub use handler::MentionHandler;
