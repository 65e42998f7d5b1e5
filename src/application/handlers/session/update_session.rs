//! UpdateSessionHandler - Host edits a session.
//!
//! The limit check in `apply_changes` runs on the loaded snapshot; the
//! repository repeats it against the participants stored at write time.

use std::sync::Arc;

use crate::application::handlers::publish_event;
use crate::domain::foundation::{CommandMetadata, EventId, SessionId, Timestamp};
use crate::domain::session::rules::parse_session_stack;
use crate::domain::session::{
    ParticipantLimit, Session, SessionChanges, SessionError, SessionUpdated,
};
use crate::ports::{CatalogReader, EventPublisher, ProjectRepository, SessionRepository};

use super::{load_session, resolve_session_languages};

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSessionCommand {
    pub session_id: SessionId,
    pub description: Option<String>,
    pub schedule_date_time: Option<Timestamp>,
    pub duration_minutes: Option<u32>,
    pub session_link: Option<Option<String>>,
    pub participant_limit: Option<u32>,
    pub active: Option<bool>,
    pub public: Option<bool>,
    pub stack: Option<String>,
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct UpdateSessionResult {
    pub session: Session,
    pub event: SessionUpdated,
}

pub struct UpdateSessionHandler {
    projects: Arc<dyn ProjectRepository>,
    sessions: Arc<dyn SessionRepository>,
    catalog: Arc<dyn CatalogReader>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateSessionHandler {
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
        cmd: UpdateSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateSessionResult, SessionError> {
        let mut session = load_session(self.sessions.as_ref(), &cmd.session_id).await?;
        session.authorize_host(&metadata.user_id)?;

        let project = self
            .projects
            .find_by_id(session.project_id())
            .await?
            .ok_or(SessionError::ProjectNotFound(*session.project_id()))?;

        let stack = cmd.stack.as_deref().map(parse_session_stack).transpose()?;
        let languages = match &cmd.languages {
            Some(names) => Some(resolve_session_languages(self.catalog.as_ref(), names).await?),
            None => None,
        };

        session.apply_changes(
            &metadata.user_id,
            &project,
            SessionChanges {
                description: cmd.description,
                schedule_date_time: cmd.schedule_date_time,
                duration_minutes: cmd.duration_minutes,
                session_link: cmd.session_link,
                participant_limit: cmd.participant_limit.map(ParticipantLimit::new),
                active: cmd.active,
                public: cmd.public,
                stack,
                languages,
            },
        )?;

        self.sessions.update(&session).await?;
        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .unwrap_or(session);

        let event = SessionUpdated {
            event_id: EventId::new(),
            session_id: *session.id(),
            updated_by: metadata.user_id.clone(),
            updated_at: *session.updated_at(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(UpdateSessionResult { session, event })
    }
}
