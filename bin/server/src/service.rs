use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use maljut_core::{
    info::{basic_info, BusinessInfo},
    llm_client::{config::LlmConfig, gemini_client::GeminiClient},
    Assistant, AssistantError, GenerativeClient,
};

use crate::config::Settings;

/// Service layer that owns the assistant gateway and provides
/// high-level operations to the endpoint handlers.
pub struct MaljutService {
    assistant: Assistant,
    started_at: Instant,
}

impl MaljutService {
    /// Create a new MaljutService from loaded settings.
    ///
    /// Fails when the Gemini client cannot be constructed, so a missing
    /// credential is fatal at startup rather than per request.
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut llm_config = LlmConfig::new().with_api_key(settings.google_api_key.clone());
        if let Some(model) = settings.model_name.clone() {
            llm_config = llm_config.with_model(model);
        }

        let client = Arc::new(
            GeminiClient::new(llm_config)
                .map_err(|e| anyhow::anyhow!("Failed to create Gemini client: {:?}", e))?,
        );

        Ok(Self::with_client(client))
    }

    /// Create a service around an arbitrary generation client.
    pub fn with_client(client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            assistant: Assistant::new(client),
            started_at: Instant::now(),
        }
    }

    /// Consult the virtual assistant with an already validated message
    pub async fn consult(&self, message: &str) -> Result<String, AssistantError> {
        self.assistant.consult(message).await
    }

    /// Static business information
    pub fn info(&self) -> BusinessInfo {
        basic_info()
    }

    /// Seconds since the service was constructed
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
