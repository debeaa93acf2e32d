//! Two-pass completion.
//!
//! The first pass runs without tools. When its answer contains the sentinel
//! marker the same conversation is sent again to the search model with the
//! search tool declared, and the second answer is returned instead.

use relay_genai::{CompletionBackend, CompletionRequest, ConversationTurn, GenAiError};
use tracing::{debug, info};

use crate::config::BotConfig;

/// Appended to answers that came from the search pass.
pub const SEARCH_ANNOTATION: &str = "🌐 (Used web search)";

/// The final answer for a mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub used_search: bool,
}

/// Models, instruction and sentinel for the two passes.
#[derive(Debug, Clone)]
pub struct EscalationPolicy {
    pub model: String,
    pub search_model: String,
    pub system_instruction: String,
    pub sentinel: String,
}

impl EscalationPolicy {
    pub fn from_config(config: &BotConfig) -> Self {
        Self {
            model: config.model.clone(),
            search_model: config.search_model.clone(),
            system_instruction: config.system_instructions.clone(),
            sentinel: config.search_sentinel.clone(),
        }
    }

    /// Answer a conversation with one call, or two if the first asks for search.
    pub async fn respond(
        &self,
        backend: &dyn CompletionBackend,
        turns: Vec<ConversationTurn>,
    ) -> Result<Reply, GenAiError> {
        let mut request =
            CompletionRequest::new(&self.model, turns, &self.system_instruction);
        let first = backend.complete(&request).await?;

        if !first.contains(&self.sentinel) {
            debug!(model = %self.model, "Answered without search");
            return Ok(Reply {
                text: first,
                used_search: false,
            });
        }

        info!(model = %self.search_model, "Model requested web search, retrying with search");
        request.model = self.search_model.clone();
        request.use_search = true;
        let second = backend.complete(&request).await?;

        Ok(Reply {
            text: format!("{}\n\n{}", second, SEARCH_ANNOTATION).trim().to_string(),
            used_search: true,
        })
    }
}
