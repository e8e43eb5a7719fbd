//! Inert doubles for each port.
//!
//! Every stand-in answers with an empty or neutral value and records the call
//! in its [`CallLog`], so a test can bind one where it does not care about
//! the behaviour and still assert on how it was used.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    Embedder, EmbedderError, LlmClient, LlmClientError, SearchResult, TextSplitter,
    TextSplitterError, VectorStore, VectorStoreError,
};
use crate::domain::{Chunk, Document, DocumentId, Embedding};

use super::CallLog;

/// A capability with a default inert double.
pub trait StandIn: Send + Sync + 'static {
    type Double: Send + Sync + 'static;

    fn stand_in() -> Arc<Self::Double>;

    fn upcast(double: Arc<Self::Double>) -> Arc<Self>;
}

#[derive(Debug, Default)]
pub struct LlmClientStandIn {
    pub calls: CallLog,
    answer: String,
}

impl LlmClientStandIn {
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            calls: CallLog::default(),
            answer: answer.into(),
        }
    }
}

#[async_trait]
impl LlmClient for LlmClientStandIn {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError> {
        self.calls
            .record("complete", vec![prompt.to_string(), context.to_string()]);
        Ok(self.answer.clone())
    }
}

impl StandIn for dyn LlmClient {
    type Double = LlmClientStandIn;

    fn stand_in() -> Arc<LlmClientStandIn> {
        Arc::new(LlmClientStandIn::default())
    }

    fn upcast(double: Arc<LlmClientStandIn>) -> Arc<dyn LlmClient> {
        double
    }
}

#[derive(Debug, Default)]
pub struct EmbedderStandIn {
    pub calls: CallLog,
    dimension: usize,
}

impl EmbedderStandIn {
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            calls: CallLog::default(),
            dimension,
        }
    }

    fn zero(&self) -> Embedding {
        Embedding::zeros(self.dimension)
    }
}

#[async_trait]
impl Embedder for EmbedderStandIn {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        self.calls.record("embed", vec![text.to_string()]);
        Ok(self.zero())
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        self.calls
            .record("embed_batch", texts.iter().map(|t| t.to_string()).collect());
        Ok(texts.iter().map(|_| self.zero()).collect())
    }
}

impl StandIn for dyn Embedder {
    type Double = EmbedderStandIn;

    fn stand_in() -> Arc<EmbedderStandIn> {
        Arc::new(EmbedderStandIn::default())
    }

    fn upcast(double: Arc<EmbedderStandIn>) -> Arc<dyn Embedder> {
        double
    }
}

#[derive(Debug, Default)]
pub struct VectorStoreStandIn {
    pub calls: CallLog,
}

#[async_trait]
impl VectorStore for VectorStoreStandIn {
    async fn upsert(
        &self,
        document: &Document,
        chunks: &[Chunk],
        _embeddings: &[Embedding],
    ) -> Result<(), VectorStoreError> {
        self.calls.record(
            "upsert",
            vec![document.filename.clone(), chunks.len().to_string()],
        );
        Ok(())
    }

    async fn search(
        &self,
        _embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        self.calls.record("search", vec![top_k.to_string()]);
        Ok(Vec::new())
    }

    async fn list_documents(&self) -> Result<Vec<Document>, VectorStoreError> {
        self.calls.record("list_documents", Vec::new());
        Ok(Vec::new())
    }

    async fn delete_document(&self, document_id: DocumentId) -> Result<usize, VectorStoreError> {
        self.calls
            .record("delete_document", vec![document_id.to_string()]);
        Ok(0)
    }
}

impl StandIn for dyn VectorStore {
    type Double = VectorStoreStandIn;

    fn stand_in() -> Arc<VectorStoreStandIn> {
        Arc::new(VectorStoreStandIn::default())
    }

    fn upcast(double: Arc<VectorStoreStandIn>) -> Arc<dyn VectorStore> {
        double
    }
}

/// Returns the whole text as a single chunk.
#[derive(Debug, Default)]
pub struct TextSplitterStandIn {
    pub calls: CallLog,
}

#[async_trait]
impl TextSplitter for TextSplitterStandIn {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        self.calls.record("split", vec![text.to_string()]);
        Ok(vec![Chunk::new(text.to_string(), document_id, 0)])
    }
}

impl StandIn for dyn TextSplitter {
    type Double = TextSplitterStandIn;

    fn stand_in() -> Arc<TextSplitterStandIn> {
        Arc::new(TextSplitterStandIn::default())
    }

    fn upcast(double: Arc<TextSplitterStandIn>) -> Arc<dyn TextSplitter> {
        double
    }
}
