//! Generative-model collaborator.

pub mod openrouter;
pub mod prompt;

use async_trait::async_trait;
use thiserror::Error;

pub use openrouter::{OpenRouterClient, OpenRouterConfig};
pub use prompt::build_generation_prompt;

/// Produces raw text for a prompt. One call per creation attempt; no retries.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, ProviderError>;
}

/// The call to the model provider failed before any text came back.
///
/// Messages summarize the failure; provider payloads are logged, not embedded.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to model provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("model provider returned no completion")]
    EmptyCompletion,
}
