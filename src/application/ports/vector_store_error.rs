#[derive(Debug, thiserror::Error)]
pub enum VectorStoreError {
    #[error("upsert failed: {0}")]
    UpsertFailed(String),
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
