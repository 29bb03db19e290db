/*
 * Responsibility
 * - GET /status (json_only guard)
 * - JSON しか返さない endpoint の例
 */
use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub authentication: &'static str,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let authentication = if state.secret.is_disabled() {
        "disabled"
    } else {
        "enabled"
    };

    Json(StatusResponse {
        status: "ok",
        authentication,
    })
}
