//! HTTP routes for the caller's own views.

use axum::{routing::get, Router};

use super::handlers::{my_sessions, my_sessions_of_kind, suggested_sessions, MeHandlers};

/// Router mounted under `/api/me`.
pub fn me_routes(handlers: MeHandlers) -> Router {
    Router::new()
        .route("/suggested-sessions", get(suggested_sessions))
        .route("/sessions", get(my_sessions))
        .route("/sessions/:kind", get(my_sessions_of_kind))
        .with_state(handlers)
}
