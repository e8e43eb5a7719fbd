use std::sync::Arc;

use crate::application::ports::Embedder;
use crate::presentation::config::{EmbeddingMode, Settings};

use super::{MockEmbedder, OpenAiEmbedder};

pub struct EmbedderFactory;

#[derive(Debug, thiserror::Error)]
pub enum EmbedderFactoryError {
    #[error("missing API key: openai embedding mode requires openai.api_key")]
    MissingApiKey,
}

impl EmbedderFactory {
    pub fn create(settings: &Settings) -> Result<Arc<dyn Embedder>, EmbedderFactoryError> {
        match settings.embedding.mode {
            EmbeddingMode::Mock => {
                tracing::info!(dimension = settings.embedding.dimension, "Using mock embedder");
                Ok(Arc::new(MockEmbedder::new(settings.embedding.dimension)))
            }
            EmbeddingMode::OpenAi => {
                if settings.openai.api_key.trim().is_empty() {
                    return Err(EmbedderFactoryError::MissingApiKey);
                }
                tracing::info!(model = %settings.openai.embedding_model, "Using OpenAI embedder");
                Ok(Arc::new(OpenAiEmbedder::new(&settings.openai)))
            }
        }
    }
}
