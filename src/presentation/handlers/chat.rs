use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::{ChatError, ChatService};
use crate::domain::Message;
use crate::infrastructure::observability::sanitize_prompt;

use super::error_response::error_response;
use super::openai_types::{ChatCompletionRequest, ChatCompletionResponse};

#[tracing::instrument(
    skip(chat_service, request),
    fields(model = %request.model, use_context = request.use_context)
)]
pub async fn chat_completions_handler(
    State(chat_service): State<Arc<ChatService>>,
    Json(request): Json<ChatCompletionRequest>,
) -> Response {
    if request.stream == Some(true) {
        return error_response(StatusCode::BAD_REQUEST, "Streaming is not supported");
    }

    let mut messages = Vec::with_capacity(request.messages.len());
    for message in &request.messages {
        match message.role.parse() {
            Ok(role) => messages.push(Message::new(role, message.content.clone())),
            Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
        }
    }

    if let Some(last) = messages.last() {
        tracing::debug!(prompt = %sanitize_prompt(&last.content), "Processing chat completion");
    }

    match chat_service.chat(&messages, request.use_context).await {
        Ok(response) => {
            tracing::info!(sources = response.sources.len(), "Chat completion successful");
            (
                StatusCode::OK,
                Json(ChatCompletionResponse::new(request.model, response)),
            )
                .into_response()
        }
        Err(ChatError::EmptyPrompt) => {
            tracing::warn!("Chat completion request with empty user message");
            error_response(StatusCode::BAD_REQUEST, "No user message provided")
        }
        Err(e) => {
            tracing::error!(error = %e, "Chat completion failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Chat failed: {}", e),
            )
        }
    }
}
