use async_trait::async_trait;
use serde_json::json;
use crate::config::redact_credentials;
use crate::llm::LLMProvider;
use super::prompt::build_prompt;
use tracing::{debug, warn};

/// Answers "is upgrading this package safe?" with raw JSON text.
/// Implementations never fail; errors become an unsafe verdict.
#[async_trait]
pub trait RiskAssessmentService: Send + Sync {
    async fn search_for_issues(&self, package: &str) -> String;
}

/// Risk assessment backed by an AI completion provider.
pub struct RiskAssessor {
    provider: Box<dyn LLMProvider>,
    secrets: Vec<String>,
}

impl RiskAssessor {
    pub fn new(provider: Box<dyn LLMProvider>) -> Self {
        Self { provider, secrets: Vec::new() }
    }

    /// Register a value that must never appear in a returned reason.
    pub fn with_secret(mut self, secret: &str) -> Self {
        self.secrets.push(secret.to_string());
        self
    }
}

#[async_trait]
impl RiskAssessmentService for RiskAssessor {
    async fn search_for_issues(&self, package: &str) -> String {
        let prompt = build_prompt(package);

        match self.provider.complete_json(&prompt).await {
            Ok(response) => {
                debug!(
                    package = %package,
                    provider = self.provider.provider_name(),
                    model = %response.model,
                    input_tokens = ?response.input_tokens,
                    output_tokens = ?response.output_tokens,
                    "Assessment received"
                );
                response.content
            }
            Err(e) => {
                let secrets: Vec<&str> = self.secrets.iter().map(String::as_str).collect();
                let detail = redact_credentials(&e.to_string(), &secrets);
                warn!(
                    package = %package,
                    model = self.provider.model_name(),
                    error_type = e.classify().error_type,
                    error = %detail,
                    "Assessment request failed"
                );
                failure_response(&detail)
            }
        }
    }
}

/// Fail-closed stand-in for a service answer.
pub fn failure_response(detail: &str) -> String {
    json!({"safe": false, "reason": format!("Error during search: {}", detail)}).to_string()
}
