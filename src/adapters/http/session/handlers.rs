//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::command_metadata;
use crate::adapters::http::error::{
    create_session_error_response, invalid_id, session_error_response,
};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::matching::{SuggestDevelopersHandler, SuggestDevelopersQuery};
use crate::application::handlers::session::{
    CheckInterestHandler, CheckInterestQuery, CheckParticipationHandler, CheckParticipationQuery,
    ConfirmParticipantCommand, ConfirmParticipantHandler, CreateSessionCommand,
    CreateSessionHandler, GetSessionHandler, GetSessionQuery, InviteDeveloperCommand,
    InviteDeveloperHandler, ListInterestedUsersHandler, ListInterestedUsersQuery,
    RecordInterestCommand, RecordInterestHandler, UpdateSessionCommand, UpdateSessionHandler,
};
use crate::domain::foundation::{SessionId, UserId};

use super::dto::{
    ConfirmParticipantRequest, ConfirmParticipantResponse, CreateSessionRequest,
    DeveloperResponse, InterestStatusResponse, MessageResponse, ParticipationResponse,
    SessionResponse, UpdateSessionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    pub create_handler: Arc<CreateSessionHandler>,
    pub update_handler: Arc<UpdateSessionHandler>,
    pub get_handler: Arc<GetSessionHandler>,
    pub confirm_handler: Arc<ConfirmParticipantHandler>,
    pub invite_handler: Arc<InviteDeveloperHandler>,
    pub interest_handler: Arc<RecordInterestHandler>,
    pub check_interest_handler: Arc<CheckInterestHandler>,
    pub check_participation_handler: Arc<CheckParticipationHandler>,
    pub interested_users_handler: Arc<ListInterestedUsersHandler>,
    pub suggest_handler: Arc<SuggestDevelopersHandler>,
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| invalid_id("session"))
}

fn parse_user_id(raw: String) -> Result<UserId, Response> {
    UserId::new(raw).map_err(|_| invalid_id("user"))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Create a session under one of the caller's projects
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    let cmd = CreateSessionCommand {
        project_id: req.project_id,
        description: req.description,
        schedule_date_time: req.schedule_date_time,
        duration_minutes: req.duration_minutes,
        session_link: req.session_link,
        participant_limit: req.participant_limit,
        active: req.active,
        public: req.public,
        stack: req.stack,
        languages: req.languages,
    };

    match handlers
        .create_handler
        .handle(cmd, command_metadata(&user, &headers))
        .await
    {
        Ok(result) => (
            StatusCode::CREATED,
            Json(SessionResponse::from(&result.session)),
        )
            .into_response(),
        Err(e) => create_session_error_response(e),
    }
}

/// GET /api/sessions/:id
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => Json(SessionResponse::from(&session)).into_response(),
        Err(e) => session_error_response(e),
    }
}

/// PATCH /api/sessions/:id - Host only
pub async fn update_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(session_id): Path<String>,
    Json(req): Json<UpdateSessionRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateSessionCommand {
        session_id,
        description: req.description,
        schedule_date_time: req.schedule_date_time,
        duration_minutes: req.duration_minutes,
        session_link: req.session_link,
        participant_limit: req.participant_limit,
        active: req.active,
        public: req.public,
        stack: req.stack,
        languages: req.languages,
    };

    match handlers
        .update_handler
        .handle(cmd, command_metadata(&user, &headers))
        .await
    {
        Ok(result) => Json(SessionResponse::from(&result.session)).into_response(),
        Err(e) => session_error_response(e),
    }
}

/// POST /api/sessions/:id/confirm - Host confirms a developer by username
pub async fn confirm_participant(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(session_id): Path<String>,
    Json(req): Json<ConfirmParticipantRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ConfirmParticipantCommand {
        session_id,
        developer_username: req.username,
    };

    match handlers
        .confirm_handler
        .handle(cmd, command_metadata(&user, &headers))
        .await
    {
        Ok(result) => Json(ConfirmParticipantResponse {
            message: result.message(),
            session: SessionResponse::from(&result.session),
        })
        .into_response(),
        Err(e) => session_error_response(e),
    }
}

/// POST /api/sessions/:id/invite/:developer_id - Host invites a developer
pub async fn invite_developer(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path((session_id, developer_id)): Path<(String, String)>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let developer_id = match parse_user_id(developer_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = InviteDeveloperCommand {
        session_id,
        developer_id,
    };

    match handlers
        .invite_handler
        .handle(cmd, command_metadata(&user, &headers))
        .await
    {
        Ok(result) => Json(MessageResponse::new(result.message())).into_response(),
        Err(e) => session_error_response(e),
    }
}

/// POST /api/sessions/:id/interest - Caller expresses interest
pub async fn record_interest(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .interest_handler
        .handle(
            RecordInterestCommand { session_id },
            command_metadata(&user, &headers),
        )
        .await
    {
        Ok(result) => (
            StatusCode::CREATED,
            Json(MessageResponse::new(result.message())),
        )
            .into_response(),
        Err(e) => session_error_response(e),
    }
}

/// GET /api/sessions/:id/interest - Has the caller expressed interest?
pub async fn check_interest(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = CheckInterestQuery {
        session_id,
        user_id: user.id,
    };

    match handlers.check_interest_handler.handle(query).await {
        Ok(interested) => Json(InterestStatusResponse {
            session_id: session_id.to_string(),
            interested,
        })
        .into_response(),
        Err(e) => session_error_response(e),
    }
}

/// GET /api/sessions/:id/interested-users
pub async fn list_interested_users(
    State(handlers): State<SessionHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .interested_users_handler
        .handle(ListInterestedUsersQuery { session_id })
        .await
    {
        Ok(developers) => {
            let response: Vec<DeveloperResponse> = developers.iter().map(Into::into).collect();
            Json(response).into_response()
        }
        Err(e) => session_error_response(e),
    }
}

/// GET /api/sessions/:id/participants/:user_id
pub async fn check_participation(
    State(handlers): State<SessionHandlers>,
    RequireAuth(_user): RequireAuth,
    Path((session_id, user_id)): Path<(String, String)>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let user_id = match parse_user_id(user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = CheckParticipationQuery {
        session_id,
        user_id: user_id.clone(),
    };

    match handlers.check_participation_handler.handle(query).await {
        Ok(is_participant) => Json(ParticipationResponse {
            session_id: session_id.to_string(),
            user_id: user_id.to_string(),
            is_participant,
        })
        .into_response(),
        Err(e) => session_error_response(e),
    }
}

/// GET /api/sessions/:id/suggested-developers
pub async fn suggested_developers(
    State(handlers): State<SessionHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .suggest_handler
        .handle(SuggestDevelopersQuery { session_id })
        .await
    {
        Ok(developers) => {
            let response: Vec<DeveloperResponse> = developers.iter().map(Into::into).collect();
            Json(response).into_response()
        }
        Err(e) => session_error_response(e),
    }
}
