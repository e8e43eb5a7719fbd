use serde::{Deserialize, Serialize};

use crate::application::services::{ChatResponse, SourceChunk};

pub const DEFAULT_MODEL: &str = "docu-chat";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    #[serde(default = "default_model")]
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Ground the answer in ingested documents.
    #[serde(default)]
    pub use_context: bool,
    #[serde(default)]
    pub stream: Option<bool>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: &'static str,
    pub created: u64,
    pub model: String,
    pub choices: Vec<ChatChoice>,
    pub sources: Vec<SourceResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatChoice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceResponse {
    pub document_id: String,
    pub text: String,
    pub score: f32,
}

impl From<SourceChunk> for SourceResponse {
    fn from(source: SourceChunk) -> Self {
        Self {
            document_id: source.document_id,
            text: source.text,
            score: source.score,
        }
    }
}

impl ChatCompletionResponse {
    pub fn new(model: String, response: ChatResponse) -> Self {
        Self {
            id: format!("chatcmpl-{}", uuid::Uuid::new_v4()),
            object: "chat.completion",
            created: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            model,
            choices: vec![ChatChoice {
                index: 0,
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: response.answer,
                },
                finish_reason: "stop".to_string(),
            }],
            sources: response.sources.into_iter().map(Into::into).collect(),
        }
    }
}
