/*
 * Responsibility
 * - POST /echo (negotiated guard)
 * - 受け取った body を negotiate 済みの形式でそのまま返す
 */
use axum::{http::StatusCode, response::Response};

use crate::api::v1::{extractors::Negotiated, response::render};

pub async fn echo(Negotiated(content_type): Negotiated, body: String) -> Response {
    render(content_type, StatusCode::OK, body)
}
