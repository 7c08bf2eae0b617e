//! API v1 sub-tree.
//!
//! `/status` is an open liveness probe. `/me` sits behind the access gate and
//! echoes the login the gate resolved; future resource routers mount beside
//! them in `router`.

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;

use crate::http::middleware::{access_gate, UserLogin};
use crate::http::server::AppState;

/// Version segment for this sub-tree.
pub const API_VERSION: &str = "v1";

#[derive(Debug, Serialize)]
struct StatusBody {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct MeBody {
    login: String,
}

/// Build the v1 router. Routes added before the gate layer are protected.
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route_layer(from_fn_with_state(state.clone(), access_gate))
        .route("/status", get(status))
}

async fn status() -> Json<StatusBody> {
    Json(StatusBody { status: "ok" })
}

async fn me(Extension(login): Extension<UserLogin>) -> Json<MeBody> {
    Json(MeBody { login: login.0 })
}
