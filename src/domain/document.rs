use super::chunk::DocumentId;

/// A text document known to the vector store.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            size_bytes,
        }
    }
}
