//! Access gate middleware.
//!
//! Resolves the bearer token from the `Authorization` header against the
//! session store. A missing or malformed header degrades to the empty token,
//! which fails resolution like any unknown token; both cases unify into a
//! single 401 outcome.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::http::response;
use crate::http::server::AppState;

/// Login resolved by the access gate, attached as a request extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserLogin(pub String);

/// Reject the request unless its token resolves to a login.
pub async fn access_gate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = bearer_token(req.headers());

    match state.sessions.resolve(token).await {
        Ok(Some(login)) => {
            req.extensions_mut().insert(UserLogin(login));
            next.run(req).await
        }
        Ok(None) => response::unauthorized().into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "token resolution failed");
            response::unauthorized().into_response()
        }
    }
}

/// Second whitespace-separated field of the Authorization header, else "".
fn bearer_token(headers: &HeaderMap) -> &str {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().nth(1))
        .unwrap_or("")
}
