use std::sync::Arc;

use crate::application::ports::{
    Embedder, EmbedderError, TextSplitter, TextSplitterError, VectorStore, VectorStoreError,
};
use crate::domain::{Document, DocumentId};

pub struct IngestService {
    embedder: Arc<dyn Embedder>,
    vector_store: Arc<dyn VectorStore>,
    text_splitter: Arc<dyn TextSplitter>,
}

#[derive(Debug, Clone)]
pub struct IngestedDocument {
    pub document: Document,
    pub chunk_count: usize,
}

impl IngestService {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        vector_store: Arc<dyn VectorStore>,
        text_splitter: Arc<dyn TextSplitter>,
    ) -> Self {
        Self {
            embedder,
            vector_store,
            text_splitter,
        }
    }

    pub async fn ingest_text(
        &self,
        filename: String,
        text: &str,
    ) -> Result<IngestedDocument, IngestError> {
        if text.trim().is_empty() {
            return Err(IngestError::EmptyDocument(filename));
        }

        let document = Document::new(filename, text.len() as u64);
        let chunks = self.text_splitter.split(text, document.id).await?;

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        self.vector_store
            .upsert(&document, &chunks, &embeddings)
            .await?;

        tracing::info!(
            document_id = %document.id,
            filename = %document.filename,
            chunks = chunks.len(),
            "Document ingested"
        );

        Ok(IngestedDocument {
            document,
            chunk_count: chunks.len(),
        })
    }

    pub async fn list_documents(&self) -> Result<Vec<Document>, IngestError> {
        Ok(self.vector_store.list_documents().await?)
    }

    pub async fn delete_document(&self, document_id: DocumentId) -> Result<(), IngestError> {
        let removed = self.vector_store.delete_document(document_id).await?;
        if removed == 0 {
            return Err(IngestError::NotFound(document_id));
        }
        tracing::info!(document_id = %document_id, chunks = removed, "Document deleted");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("document `{0}` has no text")]
    EmptyDocument(String),
    #[error("document {0} not found")]
    NotFound(DocumentId),
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("storage: {0}")]
    Storage(#[from] VectorStoreError),
}
