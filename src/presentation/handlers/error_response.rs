use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub r#type: &'static str,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let r#type = if status.is_client_error() {
        "invalid_request_error"
    } else {
        "api_error"
    };
    (
        status,
        Json(ErrorResponse {
            error: ErrorBody {
                message: message.into(),
                r#type,
            },
        }),
    )
        .into_response()
}
