//! Session reader port (read side / CQRS queries).
//!
//! Per-user projections over sessions. Nothing is cached; every call
//! recomputes from current state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Stack;
use crate::domain::foundation::{DomainError, ProjectId, SessionId, Timestamp, UserId};
use crate::domain::session::Session;

/// Reader port for session projections.
#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Sessions where `user_id` is the host, by schedule.
    async fn list_hosted(&self, user_id: &UserId) -> Result<Vec<SessionView>, DomainError>;

    /// Sessions where `user_id` is a confirmed participant, by schedule.
    async fn list_participating(&self, user_id: &UserId) -> Result<Vec<SessionView>, DomainError>;

    /// Sessions `user_id` recorded interest in, by schedule.
    async fn list_interested(&self, user_id: &UserId) -> Result<Vec<SessionView>, DomainError>;

    /// Sessions hosted under a project, by schedule.
    async fn list_by_project(&self, project_id: &ProjectId)
        -> Result<Vec<SessionView>, DomainError>;
}

/// Read model of a session for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub id: SessionId,
    pub project_id: ProjectId,
    pub host_id: UserId,
    pub description: String,
    pub schedule_date_time: Timestamp,
    pub duration_minutes: u32,
    pub session_link: Option<String>,

    /// Zero means unlimited.
    pub participant_limit: u32,
    pub participant_count: u32,
    pub active: bool,
    pub public: bool,
    pub stack: Stack,
    pub level: Option<String>,
    pub languages: Vec<String>,
    pub created_at: Timestamp,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            id: *session.id(),
            project_id: *session.project_id(),
            host_id: session.host_id().clone(),
            description: session.description().to_string(),
            schedule_date_time: *session.schedule_date_time(),
            duration_minutes: session.duration_minutes(),
            session_link: session.session_link().map(str::to_string),
            participant_limit: session.participant_limit().value(),
            participant_count: session.participant_count() as u32,
            active: session.is_active(),
            public: session.is_public(),
            stack: session.stack(),
            level: session.level().map(|l| l.name.clone()),
            languages: session.languages().names(),
            created_at: *session.created_at(),
        }
    }
}

/// The aggregate "my sessions" view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MySessions {
    pub hosted: Vec<SessionView>,
    pub participating: Vec<SessionView>,
    pub interested: Vec<SessionView>,
}
