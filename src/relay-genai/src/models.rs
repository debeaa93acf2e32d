//! Request and response types for the Gemini API

use serde::{Deserialize, Serialize};

/// Who authored a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Role name on the Gemini wire
    pub fn as_wire(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "model",
        }
    }
}

/// One role-tagged turn of a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub text: String,
}

impl ConversationTurn {
    /// Create a user turn
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
        }
    }
}

/// Everything needed for one completion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Model to use
    pub model: String,
    /// Conversation so far, oldest first
    pub turns: Vec<ConversationTurn>,
    /// System instruction
    pub system_instruction: String,
    /// Whether to declare the server-side search tool
    pub use_search: bool,
}

impl CompletionRequest {
    /// Create a request without search
    pub fn new(
        model: impl Into<String>,
        turns: Vec<ConversationTurn>,
        system_instruction: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            turns,
            system_instruction: system_instruction.into(),
            use_search: false,
        }
    }

    /// Enable or disable the search tool
    pub fn with_search(mut self, use_search: bool) -> Self {
        self.use_search = use_search;
        self
    }
}

/// Body of `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Build the wire request for a completion
    pub fn from_completion(request: &CompletionRequest, thinking_budget: Option<u32>) -> Self {
        let contents = request
            .turns
            .iter()
            .map(|turn| Content {
                role: Some(turn.role.as_wire().to_string()),
                parts: vec![Part::text(turn.text.clone())],
            })
            .collect();

        Self {
            contents,
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::text(request.system_instruction.clone())],
            }),
            tools: request.use_search.then(|| vec![Tool::google_search()]),
            generation_config: thinking_budget.map(|budget| GenerationConfig {
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: budget,
                }),
            }),
        }
    }
}

/// A role-tagged list of parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// A text part of a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A tool declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<serde_json::Value>,
}

impl Tool {
    /// Server-side Google Search grounding
    pub fn google_search() -> Self {
        Self {
            google_search: Some(serde_json::json!({})),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

/// Response of `generateContent`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, thought parts excluded
    ///
    /// `None` when there is no candidate or it carries no text.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;

        let texts: Vec<&str> = parts
            .iter()
            .filter(|p| !p.thought.unwrap_or(false))
            .filter_map(|p| p.text.as_deref())
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    /// Why the prompt was blocked, if it was
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
}
