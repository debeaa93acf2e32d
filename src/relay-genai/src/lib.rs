//! Gemini client for thread-relay
//!
//! Talks to the Gemini `generateContent` endpoint and exposes it through the
//! [`CompletionBackend`] trait, which is all the bot needs from a model.

mod client;
mod models;

pub use client::GeminiClient;
pub use models::{
    Candidate, CandidateContent, CompletionRequest, Content, ConversationTurn,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, PromptFeedback,
    ResponsePart, ThinkingConfig, Tool, TurnRole,
};

/// Default Gemini API host
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for both the plain and the search-augmented pass
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Error types for Gemini operations
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Gemini API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for Gemini operations
pub type Result<T> = std::result::Result<T, GenAiError>;

/// A text completion service.
///
/// Returns the trimmed response text, or an empty string when the model
/// produced none. Errors are never retried.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
