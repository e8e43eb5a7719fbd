mod chat;
mod error_response;
mod health;
mod ingest;
pub mod openai_types;

pub use chat::chat_completions_handler;
pub use error_response::{ErrorBody, ErrorResponse, error_response};
pub use health::health_handler;
pub use ingest::{delete_document_handler, ingest_text_handler, list_documents_handler};
