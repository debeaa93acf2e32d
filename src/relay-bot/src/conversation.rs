//! Thread history to model conversation.

use relay_genai::ConversationTurn;
use relay_slack::ThreadMessage;

/// The most recent `n` messages, in their original order.
pub fn recent_window(messages: &[ThreadMessage], n: usize) -> &[ThreadMessage] {
    &messages[messages.len().saturating_sub(n)..]
}

/// Map thread messages to conversation turns.
///
/// Messages sent by `bot_user_id` become assistant turns; everything else,
/// including messages without a sender, is a user turn.
pub fn thread_to_conversation(
    messages: &[ThreadMessage],
    bot_user_id: &str,
) -> Vec<ConversationTurn> {
    messages
        .iter()
        .map(|message| {
            let text = message.text.clone().unwrap_or_default();
            if message.user.as_deref() == Some(bot_user_id) {
                ConversationTurn::assistant(text)
            } else {
                ConversationTurn::user(text)
            }
        })
        .collect()
}
