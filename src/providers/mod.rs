// LLM gateway boundary
//
// The external generative-AI service is reached through the LlmProvider
// trait so handlers and tests never depend on a concrete API client.

use anyhow::Result;
use async_trait::async_trait;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Trait for LLM providers
///
/// One blocking round-trip per call: prompt in, generated text out. Errors
/// are surfaced to the caller, which converts them into user-facing
/// messages rather than protocol failures.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a prompt and wait for the complete generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;

    /// Get the model this provider sends requests to
    fn default_model(&self) -> &str;
}
