use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use crate::application::services::ChatService;
use crate::infrastructure::di::{Container, Injectable, ResolutionError};
use crate::presentation::handlers::chat_completions_handler;

pub struct ChatRouter {
    chat_service: Arc<ChatService>,
}

impl ChatRouter {
    pub fn new(chat_service: Arc<ChatService>) -> Self {
        Self { chat_service }
    }

    pub fn routes(&self) -> Router {
        Router::new()
            .route("/v1/chat/completions", post(chat_completions_handler))
            .with_state(Arc::clone(&self.chat_service))
    }
}

impl Injectable for ChatRouter {
    fn inject(container: &Container) -> Result<Self, ResolutionError> {
        Ok(Self::new(container.get::<ChatService>()?))
    }
}
