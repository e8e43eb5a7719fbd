use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::application::services::IngestService;
use crate::infrastructure::di::{Container, Injectable, ResolutionError};
use crate::presentation::handlers::{
    delete_document_handler, ingest_text_handler, list_documents_handler,
};

pub struct IngestRouter {
    ingest_service: Arc<IngestService>,
}

impl IngestRouter {
    pub fn new(ingest_service: Arc<IngestService>) -> Self {
        Self { ingest_service }
    }

    pub fn routes(&self) -> Router {
        Router::new()
            .route("/v1/ingest/text", post(ingest_text_handler))
            .route("/v1/ingest/list", get(list_documents_handler))
            .route("/v1/ingest/{document_id}", delete(delete_document_handler))
            .with_state(Arc::clone(&self.ingest_service))
    }
}

impl Injectable for IngestRouter {
    fn inject(container: &Container) -> Result<Self, ResolutionError> {
        Ok(Self::new(container.get::<IngestService>()?))
    }
}
