mod chunk;
mod document;
mod embedding;
mod message;
mod message_role;

pub use chunk::{Chunk, ChunkId, DocumentId};
pub use document::Document;
pub use embedding::Embedding;
pub use message::Message;
pub use message_role::MessageRole;
