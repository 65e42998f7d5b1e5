//! Project-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, ErrorKind, LevelId, ProjectId, ValidationError,
};

/// Project-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Only the owner of the project can modify it")]
    NotOwner,

    #[error("Selected level does not exist: {0}")]
    LevelNotFound(LevelId),

    #[error("Unknown languages: {}", .0.join(", "))]
    UnknownLanguages(Vec<String>),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ProjectError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProjectError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProjectError::Infrastructure(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectError::NotFound(_) => ErrorKind::NotFound,
            ProjectError::NotOwner => ErrorKind::Permission,
            ProjectError::LevelNotFound(_)
            | ProjectError::UnknownLanguages(_)
            | ProjectError::ValidationFailed { .. } => ErrorKind::Validation,
            ProjectError::Infrastructure(_) => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectError::NotFound(_) => ErrorCode::ProjectNotFound,
            ProjectError::NotOwner => ErrorCode::Forbidden,
            ProjectError::LevelNotFound(_) => ErrorCode::LevelNotFound,
            ProjectError::UnknownLanguages(_) => ErrorCode::LanguageNotFound,
            ProjectError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProjectError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for ProjectError {
    fn from(err: ValidationError) -> Self {
        ProjectError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ProjectError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => ProjectError::NotOwner,
            ErrorCode::ValidationFailed => ProjectError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ProjectError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(ProjectError::NotFound(ProjectId::new()).kind(), ErrorKind::NotFound);
        assert_eq!(ProjectError::NotOwner.kind(), ErrorKind::Permission);
        assert_eq!(
            ProjectError::UnknownLanguages(vec!["Cobol".into()]).kind(),
            ErrorKind::Validation
        );
        assert_eq!(ProjectError::infrastructure("db down").kind(), ErrorKind::Internal);
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err: ProjectError = DomainError::database("connection reset").into();
        assert!(matches!(err, ProjectError::Infrastructure(_)));
    }

    #[test]
    fn unknown_languages_lists_names() {
        let err = ProjectError::UnknownLanguages(vec!["Cobol".into(), "Ada".into()]);
        assert_eq!(err.to_string(), "Unknown languages: Cobol, Ada");
    }
}
