use async_trait::async_trait;

use crate::errors::LlmResult;

/// Trait for clients that can turn a prompt into generated text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Generate a text completion for a single prompt
    async fn generate(&self, prompt: &str) -> LlmResult<String>;
}
