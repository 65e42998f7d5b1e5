//! Error responses shared by every endpoint.
//!
//! Each module error exposes an `ErrorKind`; the kind alone decides the
//! status code. Internal errors are logged and replaced by a generic body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{ErrorCode, ErrorKind};
use crate::domain::project::ProjectError;
use crate::domain::session::SessionError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, "An internal error occurred")
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Permission => StatusCode::FORBIDDEN,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotificationDelivery => StatusCode::BAD_GATEWAY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond(kind: ErrorKind, code: ErrorCode, message: String) -> Response {
    let status = status_for(kind);
    if kind == ErrorKind::Internal {
        tracing::error!(error = %message, "Request failed");
        return (status, Json(ErrorResponse::internal())).into_response();
    }
    (status, Json(ErrorResponse::new(code, message))).into_response()
}

pub fn session_error_response(error: SessionError) -> Response {
    respond(error.kind(), error.code(), error.to_string())
}

/// Session creation reports a missing project as 403, not 404.
pub fn create_session_error_response(error: SessionError) -> Response {
    if let SessionError::ProjectNotFound(_) = error {
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new(ErrorCode::Forbidden, error.to_string())),
        )
            .into_response();
    }
    session_error_response(error)
}

pub fn project_error_response(error: ProjectError) -> Response {
    if let ProjectError::UnknownLanguages(names) = &error {
        let body = ErrorResponse::new(ErrorCode::LanguageNotFound, error.to_string())
            .with_details(serde_json::json!({ "names": names }));
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }
    respond(error.kind(), error.code(), error.to_string())
}

/// 400 for a malformed path segment.
pub fn invalid_id(what: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid {} ID", what))),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProjectId, SessionId};

    #[test]
    fn not_found_maps_to_404() {
        let response = session_error_response(SessionError::SessionNotFound(SessionId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_host_maps_to_403() {
        let response = session_error_response(SessionError::NotHost);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn limit_reached_maps_to_400() {
        let response =
            session_error_response(SessionError::ParticipantLimitReached { limit: 1 });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_interest_maps_to_409() {
        let response = session_error_response(SessionError::DuplicateInterest);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = session_error_response(SessionError::infrastructure("pool timed out"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_project_on_create_is_forbidden() {
        let response =
            create_session_error_response(SessionError::ProjectNotFound(ProjectId::new()));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_project_elsewhere_is_not_found() {
        let response = session_error_response(SessionError::ProjectNotFound(ProjectId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn project_not_owner_maps_to_403() {
        let response = project_error_response(ProjectError::NotOwner);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
