use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{SearchResult, VectorStore, VectorStoreError};
use crate::domain::{Chunk, Document, DocumentId, Embedding};

/// Process-local vector store ranking by cosine similarity.
pub struct InMemoryVectorStore {
    dimension: usize,
    inner: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    documents: HashMap<DocumentId, Document>,
    entries: Vec<(Chunk, Embedding)>,
}

impl InMemoryVectorStore {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            inner: RwLock::new(StoreState::default()),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn upsert(
        &self,
        document: &Document,
        chunks: &[Chunk],
        embeddings: &[Embedding],
    ) -> Result<(), VectorStoreError> {
        if chunks.len() != embeddings.len() {
            return Err(VectorStoreError::UpsertFailed(format!(
                "{} chunks but {} embeddings",
                chunks.len(),
                embeddings.len()
            )));
        }
        if let Some(bad) = embeddings.iter().find(|e| e.dimensions() != self.dimension) {
            return Err(VectorStoreError::DimensionMismatch {
                expected: self.dimension,
                actual: bad.dimensions(),
            });
        }

        let mut state = self.inner.write().await;
        state
            .entries
            .retain(|(chunk, _)| chunk.document_id != document.id);
        state
            .entries
            .extend(chunks.iter().cloned().zip(embeddings.iter().cloned()));
        state.documents.insert(document.id, document.clone());
        Ok(())
    }

    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        if embedding.dimensions() != self.dimension {
            return Err(VectorStoreError::DimensionMismatch {
                expected: self.dimension,
                actual: embedding.dimensions(),
            });
        }

        let state = self.inner.read().await;
        let mut results: Vec<SearchResult> = state
            .entries
            .iter()
            .map(|(chunk, stored)| SearchResult {
                chunk: chunk.clone(),
                score: embedding.cosine_similarity(stored),
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(top_k);
        Ok(results)
    }

    async fn list_documents(&self) -> Result<Vec<Document>, VectorStoreError> {
        let state = self.inner.read().await;
        let mut documents: Vec<Document> = state.documents.values().cloned().collect();
        documents.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(documents)
    }

    async fn delete_document(&self, document_id: DocumentId) -> Result<usize, VectorStoreError> {
        let mut state = self.inner.write().await;
        let before = state.entries.len();
        state
            .entries
            .retain(|(chunk, _)| chunk.document_id != document_id);
        state.documents.remove(&document_id);
        Ok(before - state.entries.len())
    }
}
