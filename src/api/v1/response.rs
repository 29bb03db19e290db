/*
 * Responsibility
 * - negotiate 済みの ContentType に合わせて応答を組み立てる
 */
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::negotiation::ContentType;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"message": ...}` for JSON, the bare message for plain text.
pub fn render(content_type: ContentType, status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    match content_type {
        ContentType::Json => (status, Json(MessageResponse { message })).into_response(),
        ContentType::PlainText => (
            status,
            [(header::CONTENT_TYPE, content_type.mime_type())],
            message,
        )
            .into_response(),
    }
}
