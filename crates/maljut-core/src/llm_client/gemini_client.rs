use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::GenerativeClient;
use super::config::{LlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::errors::{LlmError, LlmResult};

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for the Google Generative Language API (Gemini)
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> LlmResult<Self> {
        let api_key = config
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::InvalidConfig {
                message: "Google API key is required".to_string(),
            })?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| LlmError::InvalidConfig {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, "Submitting prompt to Gemini");

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            // The provider reports failures as {"error": {"message": ...}};
            // surface that text so callers can classify it.
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error)
                .map(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {} - {}", status, body));
            return Err(LlmError::Upstream { message });
        }

        let content_response: GenerateContentResponse = response.json().await?;

        let candidate = content_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse {
                message: "No candidates in response".to_string(),
            })?;

        let text: String = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::EmptyResponse {
                message: "Candidate contained no text parts".to_string(),
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_api_key() {
        let err = GeminiClient::new(LlmConfig::new()).err().unwrap();
        assert!(matches!(err, LlmError::InvalidConfig { .. }));

        let err = GeminiClient::new(LlmConfig::new().with_api_key("   ".to_string()))
            .err()
            .unwrap();
        assert!(matches!(err, LlmError::InvalidConfig { .. }));
    }

    #[test]
    fn new_applies_defaults() {
        let client =
            GeminiClient::new(LlmConfig::new().with_api_key("test-key".to_string())).unwrap();
        assert_eq!(client.model, DEFAULT_MODEL);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn provider_error_body_parses() {
        let body = r#"{"error": {"code": 429, "message": "Resource has been exhausted (e.g. check quota).", "status": "RESOURCE_EXHAUSTED"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.error.unwrap().message.contains("quota"));
    }
}
