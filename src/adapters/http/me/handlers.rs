//! HTTP handlers for the caller's own views.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::session_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::session::SessionResponse;
use crate::application::handlers::matching::{SuggestSessionsHandler, SuggestSessionsQuery};
use crate::application::handlers::queries::{
    ListUserSessionsHandler, ListUserSessionsQuery, SessionListKind,
};
use crate::domain::session::SessionError;

#[derive(Clone)]
pub struct MeHandlers {
    suggest_handler: Arc<SuggestSessionsHandler>,
    sessions_handler: Arc<ListUserSessionsHandler>,
}

impl MeHandlers {
    pub fn new(
        suggest_handler: Arc<SuggestSessionsHandler>,
        sessions_handler: Arc<ListUserSessionsHandler>,
    ) -> Self {
        Self {
            suggest_handler,
            sessions_handler,
        }
    }
}

/// GET /api/me/suggested-sessions
pub async fn suggested_sessions(
    State(handlers): State<MeHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = SuggestSessionsQuery { user_id: user.id };

    match handlers.suggest_handler.handle(query).await {
        Ok(sessions) => {
            let response: Vec<SessionResponse> = sessions.iter().map(Into::into).collect();
            Json(response).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// GET /api/me/sessions - Hosted, participating and interested at once
pub async fn my_sessions(
    State(handlers): State<MeHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListUserSessionsQuery { user_id: user.id };

    match handlers.sessions_handler.my_sessions(&query).await {
        Ok(sessions) => Json(sessions).into_response(),
        Err(e) => session_error_response(SessionError::from(e)),
    }
}

/// GET /api/me/sessions/:kind - `hosted`, `participating` or `interested`
pub async fn my_sessions_of_kind(
    State(handlers): State<MeHandlers>,
    RequireAuth(user): RequireAuth,
    Path(kind): Path<SessionListKind>,
) -> Response {
    let query = ListUserSessionsQuery { user_id: user.id };

    match handlers.sessions_handler.list(&query, kind).await {
        Ok(sessions) => Json(sessions).into_response(),
        Err(e) => session_error_response(SessionError::from(e)),
    }
}
