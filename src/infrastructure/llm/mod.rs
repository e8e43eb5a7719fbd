mod embeder;
mod llm_client_factory;
mod mock_llm_client;
mod openai_client;

pub use embeder::{EmbedderFactory, EmbedderFactoryError, MockEmbedder, OpenAiEmbedder};
pub use llm_client_factory::{LlmClientFactory, LlmClientFactoryError};
pub use mock_llm_client::MockLlmClient;
pub use openai_client::OpenAiClient;
