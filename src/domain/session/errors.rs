//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, ErrorKind, ProjectId, SessionId, ValidationError,
};
use crate::domain::project::ProjectError;

/// Reason attached to a stack parse failure.
pub const ALLOWED_STACKS_REASON: &str = "You can only choose Fullstack, Backend, or Frontend.";

/// Reason attached to a limit lowered below the confirmed count.
pub const LIMIT_BELOW_CONFIRMED_REASON: &str =
    "Participant limit cannot be lower than the number of confirmed participants.";

/// Session lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("Project {0} is not active")]
    ProjectInactive(ProjectId),

    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Developer not found: {0}")]
    DeveloperNotFound(String),

    #[error("You are not the owner of this project.")]
    NotOwner,

    #[error("Only the host of the session can perform this action.")]
    NotHost,

    #[error("{reason}")]
    InvalidStack { reason: String },

    #[error("{reason}")]
    InvalidLanguages { reason: String },

    #[error("Could not inherit level from project: {0}")]
    LevelInheritance(String),

    #[error("Participant limit reached.")]
    ParticipantLimitReached { limit: u32 },

    #[error("You are already interested in this session.")]
    DuplicateInterest,

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Notification delivery failed: {0}")]
    NotificationDelivery(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn invalid_stack(reason: impl Into<String>) -> Self {
        SessionError::InvalidStack {
            reason: reason.into(),
        }
    }

    pub fn invalid_languages(reason: impl Into<String>) -> Self {
        SessionError::InvalidLanguages {
            reason: reason.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::ProjectNotFound(_)
            | SessionError::SessionNotFound(_)
            | SessionError::DeveloperNotFound(_) => ErrorKind::NotFound,
            SessionError::NotOwner | SessionError::NotHost => ErrorKind::Permission,
            SessionError::ProjectInactive(_)
            | SessionError::InvalidStack { .. }
            | SessionError::InvalidLanguages { .. }
            | SessionError::LevelInheritance(_)
            | SessionError::ParticipantLimitReached { .. }
            | SessionError::ValidationFailed { .. } => ErrorKind::Validation,
            SessionError::DuplicateInterest => ErrorKind::Conflict,
            SessionError::NotificationDelivery(_) => ErrorKind::NotificationDelivery,
            SessionError::Infrastructure(_) => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::ProjectNotFound(_) => ErrorCode::ProjectNotFound,
            SessionError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            SessionError::DeveloperNotFound(_) => ErrorCode::UserNotFound,
            SessionError::NotOwner | SessionError::NotHost => ErrorCode::Forbidden,
            SessionError::DuplicateInterest => ErrorCode::DuplicateInterest,
            SessionError::NotificationDelivery(_) => ErrorCode::NotificationFailed,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
            _ => ErrorCode::ValidationFailed,
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotificationFailed => SessionError::NotificationDelivery(err.message),
            ErrorCode::ValidationFailed => SessionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ProjectError> for SessionError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(id) => SessionError::ProjectNotFound(id),
            ProjectError::NotOwner => SessionError::NotOwner,
            ProjectError::ValidationFailed { field, message } => {
                SessionError::ValidationFailed { field, message }
            }
            other => SessionError::Infrastructure(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_failures_map_to_expected_kinds() {
        assert_eq!(SessionError::NotHost.kind(), ErrorKind::Permission);
        assert_eq!(SessionError::NotOwner.kind(), ErrorKind::Permission);
        assert_eq!(
            SessionError::SessionNotFound(SessionId::new()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            SessionError::ParticipantLimitReached { limit: 1 }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(SessionError::DuplicateInterest.kind(), ErrorKind::Conflict);
        assert_eq!(
            SessionError::NotificationDelivery("timeout".into()).kind(),
            ErrorKind::NotificationDelivery
        );
    }

    #[test]
    fn user_facing_messages() {
        assert_eq!(
            SessionError::ParticipantLimitReached { limit: 3 }.to_string(),
            "Participant limit reached."
        );
        assert_eq!(
            SessionError::DuplicateInterest.to_string(),
            "You are already interested in this session."
        );
        assert_eq!(
            SessionError::invalid_stack(ALLOWED_STACKS_REASON).to_string(),
            ALLOWED_STACKS_REASON
        );
    }

    #[test]
    fn notification_domain_error_converts_to_delivery_failure() {
        let err: SessionError =
            DomainError::new(ErrorCode::NotificationFailed, "smtp refused").into();
        assert_eq!(err, SessionError::NotificationDelivery("smtp refused".into()));
    }

    #[test]
    fn project_not_owner_converts_to_session_not_owner() {
        let err: SessionError = ProjectError::NotOwner.into();
        assert_eq!(err, SessionError::NotOwner);
    }
}
