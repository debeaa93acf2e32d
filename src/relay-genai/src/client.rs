//! Gemini client implementation

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::models::{CompletionRequest, GenerateContentRequest, GenerateContentResponse};
use crate::{CompletionBackend, DEFAULT_GEMINI_API_URL, GenAiError, Result};

/// Client for the Gemini `generateContent` API
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    thinking_budget: Option<u32>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("thinking_budget", &self.thinking_budget)
            .finish()
    }
}

impl GeminiClient {
    /// Create a client for the public Gemini API
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(300)) // grounded answers can be slow
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: DEFAULT_GEMINI_API_URL.to_string(),
            api_key: SecretString::new(api_key.into().into()),
            thinking_budget: None,
        }
    }

    /// Use a different API host (e.g. a proxy or a test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Cap the model's thinking tokens on every call
    pub fn with_thinking_budget(mut self, budget: Option<u32>) -> Self {
        self.thinking_budget = budget;
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Send a raw `generateContent` request
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pull `error.message` out of an error body, falling back to the raw body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait::async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        debug!(
            model = %request.model,
            use_search = request.use_search,
            turns = request.turns.len(),
            "Calling generateContent"
        );

        let wire = GenerateContentRequest::from_completion(request, self.thinking_budget);
        let response = self.generate_content(&request.model, &wire).await?;

        if let Some(reason) = response.block_reason() {
            warn!(model = %request.model, reason, "Prompt was blocked");
        }

        Ok(response.text().unwrap_or_default().trim().to_string())
    }
}
