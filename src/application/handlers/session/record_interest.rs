//! RecordInterestHandler - A user expresses interest in a session.
//!
//! Interest is unique per (user, session); the repository enforces it. The
//! host is notified best-effort once the record is stored.

use std::sync::Arc;

use crate::application::handlers::publish_event;
use crate::domain::foundation::{CommandMetadata, EventId, SessionId};
use crate::domain::notification::Notification;
use crate::domain::session::{InterestRecorded, InterestedParticipant, Session, SessionError};
use crate::ports::{
    DeveloperDirectory, EventPublisher, InterestInsert, InterestRepository,
    NotificationDispatcher, SessionRepository,
};

use super::{load_host, load_session, notify_best_effort};

#[derive(Debug, Clone)]
pub struct RecordInterestCommand {
    pub session_id: SessionId,
}

#[derive(Debug, Clone)]
pub struct RecordInterestResult {
    pub interest: InterestedParticipant,
    pub event: InterestRecorded,
    /// Whether the host notification was handed off successfully.
    pub notified: bool,
}

impl RecordInterestResult {
    pub fn message(&self) -> &'static str {
        "You have successfully expressed interest in this session."
    }
}

pub struct RecordInterestHandler {
    sessions: Arc<dyn SessionRepository>,
    interests: Arc<dyn InterestRepository>,
    directory: Arc<dyn DeveloperDirectory>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RecordInterestHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        interests: Arc<dyn InterestRepository>,
        directory: Arc<dyn DeveloperDirectory>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            sessions,
            interests,
            directory,
            dispatcher,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordInterestCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordInterestResult, SessionError> {
        let session = load_session(self.sessions.as_ref(), &cmd.session_id).await?;

        let interest = InterestedParticipant::new(metadata.user_id.clone(), *session.id());
        if self.interests.record(&interest).await? == InterestInsert::Duplicate {
            return Err(SessionError::DuplicateInterest);
        }

        let event = InterestRecorded {
            event_id: EventId::new(),
            session_id: *session.id(),
            user_id: interest.user_id.clone(),
            recorded_at: interest.created_at,
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        let notified = self.notify_host(&session, &interest).await;

        Ok(RecordInterestResult {
            interest,
            event,
            notified,
        })
    }

    async fn notify_host(&self, session: &Session, interest: &InterestedParticipant) -> bool {
        let host = load_host(self.directory.as_ref(), session).await;
        let interested = self.directory.find_by_id(&interest.user_id).await;

        match (host, interested) {
            (Ok(host), Ok(Some(interested))) => {
                let notification = Notification::interest(session, &host, &interested);
                notify_best_effort(self.dispatcher.as_ref(), notification).await
            }
            _ => {
                tracing::warn!(
                    session_id = %session.id(),
                    user_id = %interest.user_id,
                    "Profiles unavailable; interest notification not sent"
                );
                false
            }
        }
    }
}
