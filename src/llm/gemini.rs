use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::config::DEFAULT_BASE_URL;
use crate::errors::GuardError;
use super::provider::LLMProvider;
use super::types::LLMResponse;

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete_json(&self, prompt: &str) -> Result<LLMResponse, GuardError> {
        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            "generationConfig": {
                "responseMimeType": "application/json",
            }
        });

        // Key goes in a header so it never shows up in URLs inside reqwest errors
        let resp = self.client.post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GuardError::Network(format!("Gemini request failed: {}", e)))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(GuardError::RateLimit("Gemini rate limit".into()));
        }
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(GuardError::Authentication(format!(
                "Gemini rejected the API key (HTTP {})",
                status.as_u16()
            )));
        }

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| text.trim().to_string());
            return Err(GuardError::LLMApi(format!(
                "Gemini returned HTTP {}: {}",
                status.as_u16(),
                detail
            )));
        }

        let data: Value = resp.json().await
            .map_err(|e| GuardError::LLMApi(format!("Parse error: {}", e)))?;

        if let Some(error) = data.get("error") {
            return Err(GuardError::LLMApi(error["message"].as_str().unwrap_or("Unknown").to_string()));
        }

        let content = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| GuardError::LLMApi("No content in Gemini response".into()))?
            .to_string();

        let input_tokens = data["usageMetadata"]["promptTokenCount"].as_u64();
        let output_tokens = data["usageMetadata"]["candidatesTokenCount"].as_u64();

        Ok(LLMResponse {
            content,
            input_tokens,
            output_tokens,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { "gemini" }
    fn model_name(&self) -> &str { &self.model }
}
