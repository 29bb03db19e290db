use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::negotiation::ContentType;

/// Handler で、negotiate 済みの ContentType を受け取るための extractor
/// guard middleware が ContentType を request.extensions() に insert 済みである前提
/// 見つからない場合は 500 を返す（guard が route に掛かっていない = 配線ミス）
#[derive(Debug, Clone, Copy)]
pub struct Negotiated(pub ContentType);

impl<S> FromRequestParts<S> for Negotiated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ContentType>()
            .copied()
            .map(Negotiated)
            .ok_or_else(|| {
                tracing::error!(
                    path = %parts.uri.path(),
                    "negotiated content type missing; guard not applied"
                );
                AppError::Internal
            })
    }
}
