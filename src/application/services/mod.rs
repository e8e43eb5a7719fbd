mod chat_service;
mod ingest_service;

pub use chat_service::{ChatError, ChatResponse, ChatService, SourceChunk};
pub use ingest_service::{IngestError, IngestService, IngestedDocument};
