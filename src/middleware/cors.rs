//! CORS policy for browser clients.
//!
//! - Development: Allow-Origin `*`, no credentials.
//! - Production: exact-match allowlist from `CORS_ALLOWED_ORIGINS`. An empty
//!   allowlist sends no CORS headers at all.
//!
//! The guard headers (`Authorization`, `Content-Type`, `Accept`) must be
//! allowed or preflight fails before the guards ever run.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

fn layer(config: &Config) -> CorsLayer {
    let cors = if config.app_env.is_production() {
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        CorsLayer::new().allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _req| allowed.iter().any(|v| v == origin),
        ))
    } else {
        CorsLayer::new().allow_origin(Any)
    };

    cors.allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(Duration::from_secs(60 * 10))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::auth::Secret;
    use crate::config::AppEnv;

    const ORIGIN: &str = "https://app.example";

    fn production_app() -> Router {
        let config = Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            app_env: AppEnv::Production,
            cors_allowed_origins: vec![ORIGIN.to_string()],
            request_secret: Secret::disabled(),
            request_body_limit_bytes: 1024,
            request_timeout_seconds: 5,
        };
        apply(Router::new().route("/echo", post(|| async { "ok" })), &config)
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/echo")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(
                header::ACCESS_CONTROL_REQUEST_HEADERS,
                "authorization,content-type,accept",
            )
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn preflight_from_allowlisted_origin_allows_guard_headers() {
        let res = production_app().oneshot(preflight(ORIGIN)).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);

        let allowed = res.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        for name in ["authorization", "content-type", "accept"] {
            assert!(allowed.contains(name), "{name} missing from {allowed}");
        }
    }

    #[tokio::test]
    async fn preflight_from_unknown_origin_gets_no_allow_origin() {
        let res = production_app()
            .oneshot(preflight("https://evil.example"))
            .await
            .unwrap();

        assert!(!res.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
