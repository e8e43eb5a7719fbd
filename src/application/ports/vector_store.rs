use async_trait::async_trait;

use super::{SearchResult, VectorStoreError};
use crate::domain::{Chunk, Document, DocumentId, Embedding};

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Stores `chunks` of `document`; `embeddings` pairs with `chunks` by index.
    async fn upsert(
        &self,
        document: &Document,
        chunks: &[Chunk],
        embeddings: &[Embedding],
    ) -> Result<(), VectorStoreError>;

    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError>;

    async fn list_documents(&self) -> Result<Vec<Document>, VectorStoreError>;

    /// Removes a document and its chunks, returning how many chunks went away.
    async fn delete_document(&self, document_id: DocumentId) -> Result<usize, VectorStoreError>;
}
