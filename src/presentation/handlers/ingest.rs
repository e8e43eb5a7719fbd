use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::{IngestError, IngestService};
use crate::domain::{Document, DocumentId};

use super::error_response::error_response;

#[derive(Deserialize)]
pub struct IngestTextRequest {
    pub file_name: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct DocumentResponse {
    pub document_id: String,
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Serialize)]
pub struct IngestTextResponse {
    pub document: DocumentResponse,
    pub chunks: usize,
}

#[derive(Serialize)]
pub struct ListDocumentsResponse {
    pub data: Vec<DocumentResponse>,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            document_id: document.id.to_string(),
            file_name: document.filename,
            size_bytes: document.size_bytes,
        }
    }
}

#[tracing::instrument(skip(ingest_service, request), fields(file_name = %request.file_name))]
pub async fn ingest_text_handler(
    State(ingest_service): State<Arc<IngestService>>,
    Json(request): Json<IngestTextRequest>,
) -> Response {
    match ingest_service
        .ingest_text(request.file_name, &request.text)
        .await
    {
        Ok(ingested) => (
            StatusCode::CREATED,
            Json(IngestTextResponse {
                document: ingested.document.into(),
                chunks: ingested.chunk_count,
            }),
        )
            .into_response(),
        Err(e) => ingest_error_response(e),
    }
}

pub async fn list_documents_handler(
    State(ingest_service): State<Arc<IngestService>>,
) -> Response {
    match ingest_service.list_documents().await {
        Ok(documents) => (
            StatusCode::OK,
            Json(ListDocumentsResponse {
                data: documents.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => ingest_error_response(e),
    }
}

#[tracing::instrument(skip(ingest_service))]
pub async fn delete_document_handler(
    State(ingest_service): State<Arc<IngestService>>,
    Path(document_id): Path<String>,
) -> Response {
    let document_id: DocumentId = match document_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid document id: {}", document_id),
            );
        }
    };

    match ingest_service.delete_document(document_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ingest_error_response(e),
    }
}

fn ingest_error_response(error: IngestError) -> Response {
    let status = match &error {
        IngestError::EmptyDocument(_) => StatusCode::BAD_REQUEST,
        IngestError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %error, "Ingest operation failed");
    } else {
        tracing::warn!(error = %error, "Ingest request rejected");
    }
    error_response(status, error.to_string())
}
