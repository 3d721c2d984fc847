use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ModelClient, ProviderError};

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// Chat-completions endpoint.
    pub endpoint: String,
    /// Bearer token.
    pub api_key: String,
    /// Sent as `HTTP-Referer` when set; OpenRouter uses it for attribution.
    pub referer: Option<String>,
    /// Upper bound for a single completion request.
    pub timeout: Duration,
}

/// [`ModelClient`] backed by the OpenRouter chat-completions API.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: Client,
    config: OpenRouterConfig,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }
}

/// First choice's message content. Empty text is returned as-is and left to
/// the extractor to reject.
fn completion_text(response: ChatResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(ProviderError::EmptyCompletion)
}

#[async_trait]
impl ModelClient for OpenRouterClient {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, ProviderError> {
        let body = ChatRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut request = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body);
        if let Some(referer) = &self.config.referer {
            request = request.header("HTTP-Referer", referer);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %detail, "model provider rejected request");
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let completion: ChatResponse = response.json().await?;
        let text = completion_text(completion)?;
        tracing::debug!(model, raw = %text, "raw model response");
        Ok(text)
    }
}
