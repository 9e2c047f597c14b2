use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Scanner error: {0}")]
    Scanner(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
