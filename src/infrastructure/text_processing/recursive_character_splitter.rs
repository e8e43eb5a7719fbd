use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, DocumentId};

/// Fixed-size character windows with overlap.
///
/// A window that would cut through a word is shortened to the last
/// whitespace inside it, unless that would leave less than half a window.
/// The next window starts on a word boundary within the overlap when one
/// exists.
/// Offsets count characters, not bytes.
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    fn window_end(&self, chars: &[char], start: usize) -> usize {
        let hard_end = (start + self.chunk_size).min(chars.len());
        if hard_end == chars.len() || chars[hard_end].is_whitespace() {
            return hard_end;
        }

        let min_end = start + self.chunk_size / 2;
        chars[start..hard_end]
            .iter()
            .rposition(|c| c.is_whitespace())
            .map(|pos| start + pos)
            .filter(|end| *end > min_end)
            .unwrap_or(hard_end)
    }

    /// Steps back by the overlap, then forward to the next word start.
    fn next_start(&self, chars: &[char], start: usize, end: usize) -> usize {
        let back = end.saturating_sub(self.chunk_overlap).max(start + 1);
        if chars[back - 1].is_whitespace() {
            return back;
        }

        chars[back..]
            .iter()
            .take(end + 1 - back)
            .position(|c| c.is_whitespace())
            .map(|pos| back + pos + 1)
            .unwrap_or(back)
    }
}

#[async_trait]
impl TextSplitter for RecursiveCharacterSplitter {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        if self.chunk_size == 0 || self.chunk_overlap >= self.chunk_size {
            return Err(TextSplitterError::SplittingFailed(format!(
                "invalid window: size {} with overlap {}",
                self.chunk_size, self.chunk_overlap
            )));
        }

        let chars: Vec<char> = text.chars().collect();
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = self.window_end(&chars, start);
            let chunk_text: String = chars[start..end].iter().collect();
            if !chunk_text.trim().is_empty() {
                chunks.push(Chunk::new(chunk_text.trim().to_string(), document_id, start));
            }

            if end == chars.len() {
                break;
            }
            start = self.next_start(&chars, start, end);
        }

        Ok(chunks)
    }
}
