//! Router assembly.
//!
//! # Responsibilities
//! - Build the Axum router with the versioned API sub-tree
//! - Wire cross-cutting middleware: request IDs, tracing, API-version
//!   context, panic recovery, request/body deadlines
//! - Render unmatched paths as the standard JSON 404
//!
//! # Design Decisions
//! - Trailing-slash normalization wraps the whole router; the lifecycle
//!   applies it when the serve task is created (it must sit outside the
//!   routing table to take effect)
//! - Handlers share state through `AppState`; both store handles are safe
//!   for concurrent use and need no extra locking

use std::any::Any;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::api::{self, API_PATH_PREFIX};
use crate::http::response;
use crate::stores::{PgPool, SessionStore};

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub sessions: Arc<dyn SessionStore>,
}

/// API version marker available to every request via extension.
#[derive(Clone, Debug)]
pub struct ApiVersion(pub &'static str);

/// Build the dispatch tree with all middleware applied.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let v1 = api::v1::router(&state);

    let router = Router::new()
        .nest(
            &format!("{}/{}", API_PATH_PREFIX, api::v1::API_VERSION),
            v1,
        )
        .fallback(not_found)
        .with_state(state);

    apply_layers(router, config)
}

// Later layers wrap earlier ones: the trace/request-id pair ends up
// outermost, panic recovery sits directly around the routes.
fn apply_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(Extension(ApiVersion(api::v1::API_VERSION)))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(RequestBodyTimeoutLayer::new(config.read_timeout()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.write_timeout(),
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn not_found() -> impl IntoResponse {
    response::not_found("404 page not found")
}

/// Convert a handler panic into the generic 500 body. The panic payload is
/// logged server-side only.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    response::internal_error(format_args!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
    use std::collections::HashMap;
    use tower::ServiceExt;

    use crate::stores::StoreError;

    struct MapSessions(HashMap<String, String>);

    #[async_trait]
    impl SessionStore for MapSessions {
        async fn resolve(&self, token: &str) -> Result<Option<String>, StoreError> {
            Ok(self.0.get(token).cloned())
        }
    }

    fn test_state(tokens: &[(&str, &str)]) -> AppState {
        let map = tokens
            .iter()
            .map(|(t, l)| (t.to_string(), l.to_string()))
            .collect();

        AppState {
            // Lazy pool: never connects unless a handler queries it.
            db: PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new()),
            sessions: Arc::new(MapSessions(map)),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unmounted_path_is_json_404() {
        let router = build_router(test_state(&[]), &ServerConfig::default());

        let response = router
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "404 page not found");
    }

    #[tokio::test]
    async fn test_status_is_open() {
        let router = build_router(test_state(&[]), &ServerConfig::default());

        let response = router
            .oneshot(Request::get("/api/v1/status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_me_requires_valid_token() {
        let router = build_router(test_state(&[("tok", "alice")]), &ServerConfig::default());

        let response = router
            .clone()
            .oneshot(
                Request::get("/api/v1/me")
                    .header("Authorization", "Bearer tok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["login"], "alice");

        for auth in [Some("Bearer badtoken"), Some("Bearer"), None] {
            let mut request = Request::get("/api/v1/me");
            if let Some(value) = auth {
                request = request.header("Authorization", value);
            }
            let response = router
                .clone()
                .oneshot(request.body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            let json = body_json(response).await;
            assert_eq!(json["error"], "401 Unauthorized");
        }
    }

    #[tokio::test]
    async fn test_panic_is_contained() {
        async fn boom() -> &'static str {
            panic!("handler blew up")
        }

        let router = apply_layers(
            Router::new()
                .route("/boom", get(boom))
                .route("/ok", get(|| async { "fine" })),
            &ServerConfig::default(),
        );

        let response = router
            .clone()
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "500 Internal server error");

        // The service must keep serving after a recovered panic.
        let response = router
            .oneshot(Request::get("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
