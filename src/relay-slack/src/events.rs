//! Event handling for Slack events.
//!
//! Only `app_mention` is dispatched to handlers; every other event type
//! parses to [`SlackEvent::Unknown`]. Events arrive wrapped in Socket Mode
//! envelopes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SlackError, SlackResult};

/// Slack event types that we handle.
#[derive(Debug, Clone)]
pub enum SlackEvent {
    /// App mention event (@bot in a channel or thread).
    AppMention(AppMentionEvent),
    /// Unknown event type (for forward compatibility).
    Unknown(String),
}

/// Event payload for app mentions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppMentionEvent {
    /// User who mentioned the bot. Absent for some bot-authored mentions.
    #[serde(default)]
    pub user: String,
    /// Text of the message (including the mention).
    #[serde(default)]
    pub text: String,
    /// Channel where the mention occurred.
    pub channel: String,
    /// Timestamp of the message.
    pub ts: String,
    /// Thread timestamp (if in a thread).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
    /// Event timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<String>,
    /// Bot ID (if the mention was posted by a bot).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
    /// Bot profile (if the mention was posted by a bot).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_profile: Option<serde_json::Value>,
}

impl AppMentionEvent {
    /// Check if another bot posted this mention (should be ignored).
    pub fn is_from_bot(&self) -> bool {
        self.bot_id.is_some() || self.bot_profile.is_some()
    }
}

/// Socket Mode envelope wrapping events.
///
/// `hello` and `disconnect` frames carry no envelope id and need no ack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocketModeEnvelope {
    /// Envelope ID for acknowledgment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope_id: Option<String>,
    /// Type of payload.
    #[serde(rename = "type")]
    pub envelope_type: String,
    /// Actual payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<EventPayload>,
    /// Disconnect reason (`refresh_requested`, `warning`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Delivery attempt, present when Slack redelivers an envelope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_attempt: Option<u32>,
}

/// Event callback payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    /// Team ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    /// API app ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_app_id: Option<String>,
    /// The actual event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<serde_json::Value>,
    /// Payload type (`event_callback`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub payload_type: Option<String>,
    /// Event ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

/// Socket Mode acknowledgment response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocketModeAck {
    /// Envelope ID being acknowledged.
    pub envelope_id: String,
}

impl SocketModeAck {
    pub fn new(envelope_id: impl Into<String>) -> Self {
        Self {
            envelope_id: envelope_id.into(),
        }
    }
}

/// Context for processing an event.
#[derive(Debug, Clone)]
pub struct EventContext {
    /// User ID who triggered the event.
    pub user_id: String,
    /// Channel ID where the event occurred.
    pub channel_id: String,
    /// Thread the reply belongs to.
    pub thread_ts: String,
    /// Original message timestamp.
    pub message_ts: String,
    /// Team ID.
    pub team_id: Option<String>,
}

impl EventContext {
    /// Create context from an app mention event.
    pub fn from_app_mention(event: &AppMentionEvent, team_id: Option<String>) -> Self {
        Self {
            user_id: event.user.clone(),
            channel_id: event.channel.clone(),
            // A top-level mention starts a new thread rooted at itself
            thread_ts: event.thread_ts.clone().unwrap_or_else(|| event.ts.clone()),
            message_ts: event.ts.clone(),
            team_id,
        }
    }
}

/// Trait for handling Slack events.
#[async_trait::async_trait]
pub trait SlackEventHandler: Send + Sync {
    /// Handle an app mention event.
    ///
    /// Handlers post their own replies; an `Err` is only logged by the bot.
    async fn handle_app_mention(
        &self,
        event: AppMentionEvent,
        context: EventContext,
    ) -> SlackResult<()>;
}

/// Parse a raw event from the Socket Mode envelope.
pub fn parse_event(payload: &EventPayload) -> SlackResult<SlackEvent> {
    let event_json = payload
        .event
        .as_ref()
        .ok_or_else(|| SlackError::InvalidPayload("Missing event field".to_string()))?;

    let event_type = event_json
        .get("type")
        .and_then(|t| t.as_str())
        .unwrap_or("unknown");

    debug!("Parsing event type: {}", event_type);

    match event_type {
        "app_mention" => {
            let event: AppMentionEvent = serde_json::from_value(event_json.clone())?;
            Ok(SlackEvent::AppMention(event))
        }
        other => Ok(SlackEvent::Unknown(other.to_string())),
    }
}
