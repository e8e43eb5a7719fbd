use std::hash::{DefaultHasher, Hash, Hasher};

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::Embedding;

/// Deterministic bag-of-words embedder for the `mock` embedding mode.
///
/// Texts sharing words get similar vectors, which is enough for retrieval to
/// behave sensibly without a model.
pub struct MockEmbedder {
    dimension: usize,
}

impl MockEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn embed_text(&self, text: &str) -> Embedding {
        let mut values = vec![0.0_f32; self.dimension];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            let bucket = (hasher.finish() % self.dimension as u64) as usize;
            values[bucket] += 1.0;
        }

        let mut embedding = Embedding::new(values);
        let norm = embedding.norm();
        if norm > 0.0 {
            embedding.values.iter_mut().for_each(|v| *v /= norm);
        }
        embedding
    }
}

#[async_trait::async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        Ok(self.embed_text(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }
}
