use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmMode, Settings};

use super::{MockLlmClient, OpenAiClient};

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("missing API key: openai llm mode requires openai.api_key")]
    MissingApiKey,
}

impl LlmClientFactory {
    pub fn create(settings: &Settings) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        match settings.llm.mode {
            LlmMode::Mock => {
                tracing::info!("Using mock LLM client");
                Ok(Arc::new(MockLlmClient))
            }
            LlmMode::OpenAi => {
                if settings.openai.api_key.trim().is_empty() {
                    return Err(LlmClientFactoryError::MissingApiKey);
                }
                tracing::info!(model = %settings.openai.model, "Using OpenAI LLM client");
                Ok(Arc::new(OpenAiClient::new(&settings.openai, &settings.llm)))
            }
        }
    }
}
