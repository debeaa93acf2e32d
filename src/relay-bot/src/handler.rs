//! Mention handler.
//!
//! Glue between the Socket Mode bot and the completion backend. Every error
//! raised while answering ends up in the thread as a `⚠️ Error:` reply.

use std::sync::Arc;

use relay_genai::CompletionBackend;
use relay_slack::{
    AppMentionEvent, EventContext, SlackEventHandler, SlackMessageContent, SlackResult,
    SlackWebApi, markdown_to_mrkdwn,
};
use tracing::{debug, error, info};

use crate::config::BotConfig;
use crate::conversation::{recent_window, thread_to_conversation};
use crate::error::BotError;
use crate::escalation::EscalationPolicy;

/// Answers `app_mention` events in their thread.
pub struct MentionHandler {
    slack: Arc<dyn SlackWebApi>,
    completion: Arc<dyn CompletionBackend>,
    policy: EscalationPolicy,
    bot_user_id: String,
    context_window: usize,
    convert_markdown: bool,
}

impl MentionHandler {
    pub fn new(
        slack: Arc<dyn SlackWebApi>,
        completion: Arc<dyn CompletionBackend>,
        config: &BotConfig,
    ) -> Self {
        Self {
            slack,
            completion,
            policy: EscalationPolicy::from_config(config),
            bot_user_id: config.bot_user_id.clone(),
            context_window: config.context_window,
            convert_markdown: config.convert_markdown,
        }
    }

    /// Fetch, map, complete and post.
    async fn answer(&self, context: &EventContext) -> Result<(), BotError> {
        let replies = self
            .slack
            .conversation_replies(&context.channel_id, &context.thread_ts)
            .await?;
        let window = recent_window(&replies, self.context_window);
        let turns = thread_to_conversation(window, &self.bot_user_id);
        debug!(
            thread_ts = %context.thread_ts,
            fetched = replies.len(),
            sent = turns.len(),
            "Built conversation"
        );

        let reply = self.policy.respond(self.completion.as_ref(), turns).await?;

        let text = if self.convert_markdown {
            markdown_to_mrkdwn(&reply.text)
        } else {
            reply.text
        };
        let content = SlackMessageContent::new()
            .with_text(text)
            .in_thread(&context.thread_ts);
        let ts = self.slack.post_message(&context.channel_id, &content).await?;

        info!(
            channel = %context.channel_id,
            thread_ts = %context.thread_ts,
            reply_ts = %ts,
            used_search = reply.used_search,
            "Replied to mention"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl SlackEventHandler for MentionHandler {
    async fn handle_app_mention(
        &self,
        event: AppMentionEvent,
        context: EventContext,
    ) -> SlackResult<()> {
        if event.is_from_bot() {
            info!(
                channel = %context.channel_id,
                bot_id = ?event.bot_id,
                "Ignoring mention from a bot"
            );
            return Ok(());
        }

        debug!(
            user = %context.user_id,
            channel = %context.channel_id,
            team = ?context.team_id,
            message_ts = %context.message_ts,
            thread_ts = %context.thread_ts,
            "Handling mention"
        );

        if let Err(e) = self.answer(&context).await {
            error!(
                channel = %context.channel_id,
                thread_ts = %context.thread_ts,
                error = %e,
                "Failed to answer mention"
            );
            let content = SlackMessageContent::new()
                .with_text(format!("⚠️ Error: {}", e))
                .in_thread(&context.thread_ts);
            self.slack.post_message(&context.channel_id, &content).await?;
        }

        Ok(())
    }
}
