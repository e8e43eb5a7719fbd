use std::sync::Arc;

use crate::application::ports::{
    Embedder, EmbedderError, LlmClient, LlmClientError, SearchResult, VectorStore,
    VectorStoreError,
};
use crate::domain::{Message, MessageRole};
use crate::infrastructure::observability::{GlobalHandler, global_handler, sanitize_prompt};

pub struct ChatService {
    llm_client: Arc<dyn LlmClient>,
    embedder: Arc<dyn Embedder>,
    vector_store: Arc<dyn VectorStore>,
    top_k: usize,
    similarity_threshold: f32,
}

impl ChatService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        embedder: Arc<dyn Embedder>,
        vector_store: Arc<dyn VectorStore>,
        top_k: usize,
        similarity_threshold: f32,
    ) -> Self {
        Self {
            llm_client,
            embedder,
            vector_store,
            top_k,
            similarity_threshold,
        }
    }

    /// Answers the last user message, optionally grounded in stored chunks.
    pub async fn chat(
        &self,
        messages: &[Message],
        use_context: bool,
    ) -> Result<ChatResponse, ChatError> {
        let prompt = messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.trim())
            .filter(|content| !content.is_empty())
            .ok_or(ChatError::EmptyPrompt)?;

        let results = if use_context {
            self.retrieve(prompt).await?
        } else {
            Vec::new()
        };

        let context = results
            .iter()
            .map(|r| r.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let answer = self.llm_client.complete(prompt, &context).await?;

        match global_handler() {
            Some(GlobalHandler::Simple) => tracing::info!(
                target: "docu_chat::llm",
                prompt = %sanitize_prompt(prompt),
                context_chunks = results.len(),
                answer_chars = answer.len(),
                "LLM completion"
            ),
            Some(GlobalHandler::Verbose) => tracing::info!(
                target: "docu_chat::llm",
                prompt = %sanitize_prompt(prompt),
                context = %sanitize_prompt(&context),
                answer = %sanitize_prompt(&answer),
                context_chunks = results.len(),
                "LLM completion"
            ),
            None => {}
        }

        let sources = results
            .into_iter()
            .map(|r| SourceChunk {
                document_id: r.chunk.document_id.to_string(),
                text: r.chunk.text,
                score: r.score,
            })
            .collect();

        Ok(ChatResponse { answer, sources })
    }

    async fn retrieve(&self, prompt: &str) -> Result<Vec<SearchResult>, ChatError> {
        let query_embedding = self.embedder.embed(prompt).await?;
        let results = self.vector_store.search(&query_embedding, self.top_k).await?;

        Ok(results
            .into_iter()
            .filter(|r| r.score >= self.similarity_threshold)
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub answer: String,
    pub sources: Vec<SourceChunk>,
}

#[derive(Debug, Clone)]
pub struct SourceChunk {
    pub document_id: String,
    pub text: String,
    pub score: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("no user message provided")]
    EmptyPrompt,
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("search: {0}")]
    Search(#[from] VectorStoreError),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}
