//! ConfirmParticipantHandler - Host confirms a developer into a session.
//!
//! Order of checks: host, developer exists, participant limit. The limit is
//! re-checked atomically by `SessionRepository::add_participant`, so two
//! concurrent confirmations cannot overshoot it. The confirmation email is
//! sent after the insert commits and its failure never undoes the insert.

use std::sync::Arc;

use crate::application::handlers::publish_event;
use crate::domain::developer::Developer;
use crate::domain::foundation::{CommandMetadata, EventId, SessionId, Timestamp};
use crate::domain::notification::Notification;
use crate::domain::session::{ConfirmOutcome, ParticipantConfirmed, Session, SessionError};
use crate::ports::{
    DeveloperDirectory, EventPublisher, NotificationDispatcher, ParticipantInsert,
    SessionRepository,
};

use super::{load_host, load_session, notify_best_effort};

#[derive(Debug, Clone)]
pub struct ConfirmParticipantCommand {
    pub session_id: SessionId,
    pub developer_username: String,
}

#[derive(Debug, Clone)]
pub struct ConfirmParticipantResult {
    /// Session state after the confirmation.
    pub session: Session,
    pub developer: Developer,
    pub outcome: ConfirmOutcome,
    /// Whether the confirmation email was handed off successfully.
    pub notified: bool,
}

impl ConfirmParticipantResult {
    pub fn message(&self) -> String {
        match self.outcome {
            ConfirmOutcome::Confirmed => format!(
                "Developer {} has been confirmed for the session.",
                self.developer.username
            ),
            ConfirmOutcome::AlreadyConfirmed => format!(
                "Developer {} is already confirmed for the session.",
                self.developer.username
            ),
        }
    }
}

pub struct ConfirmParticipantHandler {
    sessions: Arc<dyn SessionRepository>,
    directory: Arc<dyn DeveloperDirectory>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ConfirmParticipantHandler {
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
        cmd: ConfirmParticipantCommand,
        metadata: CommandMetadata,
    ) -> Result<ConfirmParticipantResult, SessionError> {
        // 1. Host only
        let mut session = load_session(self.sessions.as_ref(), &cmd.session_id).await?;
        session.authorize_host(&metadata.user_id)?;

        // 2. Developer must exist
        let developer = self
            .directory
            .find_by_username(&cmd.developer_username)
            .await?
            .ok_or_else(|| SessionError::DeveloperNotFound(cmd.developer_username.clone()))?;

        // 3. Limit check on the loaded snapshot
        let outcome = session.confirm_participant(&metadata.user_id, &developer.id)?;
        if outcome == ConfirmOutcome::AlreadyConfirmed {
            return Ok(ConfirmParticipantResult {
                session,
                developer,
                outcome,
                notified: false,
            });
        }

        // 4. Authoritative insert
        match self
            .sessions
            .add_participant(&cmd.session_id, &developer.id)
            .await?
        {
            ParticipantInsert::Inserted => {}
            ParticipantInsert::AlreadyPresent => {
                return Ok(ConfirmParticipantResult {
                    session: load_session(self.sessions.as_ref(), &cmd.session_id).await?,
                    developer,
                    outcome: ConfirmOutcome::AlreadyConfirmed,
                    notified: false,
                });
            }
            ParticipantInsert::LimitReached { limit } => {
                return Err(SessionError::ParticipantLimitReached { limit });
            }
        }

        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .unwrap_or(session);

        let event = ParticipantConfirmed {
            event_id: EventId::new(),
            session_id: *session.id(),
            developer_id: developer.id.clone(),
            participant_count: session.participant_count(),
            confirmed_at: Timestamp::now(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        tracing::info!(
            session_id = %session.id(),
            developer_id = %developer.id,
            participants = session.participant_count(),
            "Participant confirmed"
        );

        // 5. Best-effort confirmation email
        let notified = match load_host(self.directory.as_ref(), &session).await {
            Ok(host) => {
                let notification = Notification::confirmation(&session, &host, &developer);
                notify_best_effort(self.dispatcher.as_ref(), notification).await
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %session.id(),
                    error = %e,
                    "Host profile unavailable; confirmation not sent"
                );
                false
            }
        };

        Ok(ConfirmParticipantResult {
            session,
            developer,
            outcome: ConfirmOutcome::Confirmed,
            notified,
        })
    }
}
