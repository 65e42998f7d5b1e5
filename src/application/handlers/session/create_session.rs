//! CreateSessionHandler - Command handler for scheduling a session.
//!
//! The requester must own the project; stack and languages are checked
//! against the project and the level is inherited from it.

use std::sync::Arc;

use crate::application::handlers::publish_event;
use crate::domain::foundation::{CommandMetadata, EventId, ProjectId, SessionId, Timestamp};
use crate::domain::session::rules::parse_session_stack;
use crate::domain::session::{
    NewSession, ParticipantLimit, Session, SessionCreated, SessionError, DEFAULT_DURATION_MINUTES,
};
use crate::ports::{CatalogReader, EventPublisher, ProjectRepository, SessionRepository};

use super::resolve_session_languages;

#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub project_id: ProjectId,
    pub description: String,
    pub schedule_date_time: Timestamp,
    /// Defaults to two hours.
    pub duration_minutes: Option<u32>,
    pub session_link: Option<String>,
    /// Zero means unlimited.
    pub participant_limit: u32,
    pub active: bool,
    pub public: bool,
    pub stack: String,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub session: Session,
    pub event: SessionCreated,
}

pub struct CreateSessionHandler {
    projects: Arc<dyn ProjectRepository>,
    sessions: Arc<dyn SessionRepository>,
    catalog: Arc<dyn CatalogReader>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateSessionHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        sessions: Arc<dyn SessionRepository>,
        catalog: Arc<dyn CatalogReader>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            projects,
            sessions,
            catalog,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateSessionResult, SessionError> {
        // 1. Resolve the project
        let project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or(SessionError::ProjectNotFound(cmd.project_id))?;

        // 2. Ownership before anything about the payload
        project.authorize(&metadata.user_id)?;

        // 3. Build the aggregate
        let stack = parse_session_stack(&cmd.stack)?;
        let languages = resolve_session_languages(self.catalog.as_ref(), &cmd.languages).await?;

        let session = Session::create(
            SessionId::new(),
            &project,
            &metadata.user_id,
            NewSession {
                description: cmd.description,
                schedule_date_time: cmd.schedule_date_time,
                duration_minutes: cmd.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
                session_link: cmd.session_link,
                participant_limit: ParticipantLimit::new(cmd.participant_limit),
                active: cmd.active,
                public: cmd.public,
                stack,
                languages,
            },
        )?;

        // 4. Persist
        self.sessions.save(&session).await?;

        // 5. Publish
        let event = SessionCreated {
            event_id: EventId::new(),
            session_id: *session.id(),
            project_id: *project.id(),
            host_id: session.host_id().clone(),
            stack: session.stack(),
            schedule_date_time: *session.schedule_date_time(),
            created_at: *session.created_at(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        tracing::info!(
            session_id = %session.id(),
            project_id = %project.id(),
            stack = %session.stack(),
            limit = %session.participant_limit(),
            "Session created"
        );

        Ok(CreateSessionResult { session, event })
    }
}
