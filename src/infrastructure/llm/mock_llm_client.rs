use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};

/// Answers without a model; used by the `mock` llm mode.
pub struct MockLlmClient;

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError> {
        if context.is_empty() {
            return Ok(format!("Mock answer to: {}", prompt));
        }
        Ok(format!(
            "Mock answer to: {} (using {} characters of context)",
            prompt,
            context.chars().count()
        ))
    }
}
