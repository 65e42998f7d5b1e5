//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    check_interest, check_participation, confirm_participant, create_session, get_session,
    invite_developer, list_interested_users, record_interest, suggested_developers,
    update_session, SessionHandlers,
};

/// Session router, mounted under `/api/sessions`.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session).patch(update_session))
        .route("/:id/confirm", post(confirm_participant))
        .route("/:id/invite/:developer_id", post(invite_developer))
        .route("/:id/interest", post(record_interest).get(check_interest))
        .route("/:id/interested-users", get(list_interested_users))
        .route("/:id/participants/:user_id", get(check_participation))
        .route("/:id/suggested-developers", get(suggested_developers))
        .with_state(handlers)
}
