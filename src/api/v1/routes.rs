/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - guard をどの route に掛けるかもここで決める
 *   - /health: なし
 *   - /status: json_only
 *   - /echo: negotiated
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::v1::handlers::{echo::echo, health::health, status::status};
use crate::middleware::guard;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let json_only = guard::json_only(Router::new().route("/status", get(status)), state.clone());
    let negotiated = guard::negotiated(Router::new().route("/echo", post(echo)), state);

    Router::new()
        .route("/health", get(health))
        .merge(json_only)
        .merge(negotiated)
}
