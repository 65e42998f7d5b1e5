//! Session command and query handlers.

mod check_interest;
mod check_participation;
mod confirm_participant;
mod create_session;
mod get_session;
mod invite_developer;
mod list_interested_users;
mod record_interest;
mod update_session;

pub use check_interest::{CheckInterestHandler, CheckInterestQuery};
pub use check_participation::{CheckParticipationHandler, CheckParticipationQuery};
pub use confirm_participant::{
    ConfirmParticipantCommand, ConfirmParticipantHandler, ConfirmParticipantResult,
};
pub use create_session::{CreateSessionCommand, CreateSessionHandler, CreateSessionResult};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use invite_developer::{InviteDeveloperCommand, InviteDeveloperHandler, InviteDeveloperResult};
pub use list_interested_users::{ListInterestedUsersHandler, ListInterestedUsersQuery};
pub use record_interest::{RecordInterestCommand, RecordInterestHandler, RecordInterestResult};
pub use update_session::{UpdateSessionCommand, UpdateSessionHandler, UpdateSessionResult};

use crate::domain::catalog::LanguageSet;
use crate::domain::developer::Developer;
use crate::domain::foundation::SessionId;
use crate::domain::notification::Notification;
use crate::domain::session::{Session, SessionError};
use crate::ports::{CatalogReader, DeveloperDirectory, NotificationDispatcher, SessionRepository};

use super::unknown_language_names;

pub(crate) async fn load_session(
    sessions: &dyn SessionRepository,
    id: &SessionId,
) -> Result<Session, SessionError> {
    sessions
        .find_by_id(id)
        .await?
        .ok_or(SessionError::SessionNotFound(*id))
}

async fn load_host(
    directory: &dyn DeveloperDirectory,
    session: &Session,
) -> Result<Developer, SessionError> {
    directory
        .find_by_id(session.host_id())
        .await?
        .ok_or_else(|| SessionError::DeveloperNotFound(session.host_id().to_string()))
}

async fn resolve_session_languages(
    catalog: &dyn CatalogReader,
    names: &[String],
) -> Result<LanguageSet, SessionError> {
    catalog
        .find_languages_by_names(names)
        .await
        .map_err(|e| match unknown_language_names(&e) {
            Some(names) => {
                SessionError::invalid_languages(format!("Unknown languages: {}", names.join(", ")))
            }
            None => SessionError::from(e),
        })
}

/// Dispatches after the state change has committed; a failure is logged
/// and reported as `false`.
async fn notify_best_effort(dispatcher: &dyn NotificationDispatcher, notification: Notification) -> bool {
    let kind = notification.kind;
    let session_id = notification.session_id;
    let recipient = notification.recipient_id.clone();

    match dispatcher.dispatch(notification).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                kind = %kind,
                session_id = %session_id,
                recipient = %recipient,
                error = %e,
                "Notification failed; state change kept"
            );
            false
        }
    }
}
