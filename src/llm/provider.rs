use async_trait::async_trait;
use crate::errors::GuardError;
use super::types::LLMResponse;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Completion that asks the service to answer with a JSON document.
    /// The returned content is raw text; callers decide how to parse it.
    async fn complete_json(&self, prompt: &str) -> Result<LLMResponse, GuardError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
