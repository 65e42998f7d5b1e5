//! InviteDeveloperHandler - Host invites a developer by id.
//!
//! Nothing is persisted, so delivery runs inline and a delivery failure is
//! returned to the caller.

use std::sync::Arc;

use crate::application::handlers::publish_event;
use crate::domain::foundation::{CommandMetadata, EventId, SessionId, Timestamp, UserId};
use crate::domain::notification::Notification;
use crate::domain::session::{DeveloperInvited, SessionError};
use crate::ports::{DeveloperDirectory, EventPublisher, NotificationDispatcher, SessionRepository};

use super::{load_host, load_session};

#[derive(Debug, Clone)]
pub struct InviteDeveloperCommand {
    pub session_id: SessionId,
    pub developer_id: UserId,
}

#[derive(Debug, Clone)]
pub struct InviteDeveloperResult {
    pub notification: Notification,
    pub event: DeveloperInvited,
}

impl InviteDeveloperResult {
    pub fn message(&self) -> &'static str {
        "Invitation sent successfully"
    }
}

pub struct InviteDeveloperHandler {
    sessions: Arc<dyn SessionRepository>,
    directory: Arc<dyn DeveloperDirectory>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl InviteDeveloperHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        directory: Arc<dyn DeveloperDirectory>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            sessions,
            directory,
            dispatcher,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: InviteDeveloperCommand,
        metadata: CommandMetadata,
    ) -> Result<InviteDeveloperResult, SessionError> {
        let session = load_session(self.sessions.as_ref(), &cmd.session_id).await?;
        session.authorize_host(&metadata.user_id)?;

        let developer = self
            .directory
            .find_by_id(&cmd.developer_id)
            .await?
            .ok_or_else(|| SessionError::DeveloperNotFound(cmd.developer_id.to_string()))?;
        let host = load_host(self.directory.as_ref(), &session).await?;

        let notification = Notification::invitation(&session, &host, &developer);
        self.dispatcher.dispatch(notification.clone()).await?;

        let event = DeveloperInvited {
            event_id: EventId::new(),
            session_id: *session.id(),
            developer_id: developer.id.clone(),
            invited_by: metadata.user_id.clone(),
            invited_at: Timestamp::now(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(InviteDeveloperResult {
            notification,
            event,
        })
    }
}
