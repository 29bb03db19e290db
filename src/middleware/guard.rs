//! Request guards: shared secret → incoming Content-Type → Accept negotiation.
//!
//! 先に失敗したものだけを返す (short-circuit)。
//! On success the chosen `ContentType` is put into request extensions for the
//! `Negotiated` extractor.
//!
//! ```ignore
//! let echo = Router::new().route("/echo", post(echo));
//! let echo = middleware::guard::negotiated(echo, state.clone());
//! ```

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::Response,
};

use crate::auth;
use crate::error::AppError;
use crate::negotiation::{self, ContentType};
use crate::state::AppState;

/// Routes that can answer in JSON or plain text.
pub fn negotiated(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, negotiated_guard))
}

/// Routes that only ever answer in JSON.
pub fn json_only(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, json_only_guard))
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    if auth::verify(&state.secret, headers) {
        return Ok(());
    }
    // header の値は絶対にログに出さない
    tracing::warn!(
        has_authorization = headers.contains_key(axum::http::header::AUTHORIZATION),
        "request secret verification failed"
    );
    Err(AppError::Unauthorized)
}

fn validate_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    if negotiation::is_acceptable_content_type(headers) {
        return Ok(());
    }
    tracing::warn!("unsupported request content type");
    Err(AppError::UnsupportedMediaType)
}

async fn negotiated_guard(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    authenticate(&state, req.headers())?;
    validate_content_type(req.headers())?;

    let content_type = negotiation::negotiate_content_type(req.headers()).ok_or_else(|| {
        tracing::warn!("no acceptable response content type");
        AppError::NotAcceptable
    })?;
    tracing::debug!(?content_type, "negotiated response content type");

    req.extensions_mut().insert(content_type);

    Ok(next.run(req).await)
}

async fn json_only_guard(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    authenticate(&state, req.headers())?;
    validate_content_type(req.headers())?;

    if !negotiation::accepts_json(req.headers()) {
        tracing::warn!("client does not accept json");
        return Err(AppError::NotAcceptable);
    }

    req.extensions_mut().insert(ContentType::Json);

    Ok(next.run(req).await)
}
