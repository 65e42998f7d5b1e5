//! CheckParticipationHandler - Is a user a confirmed participant?

use std::sync::Arc;

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::SessionError;
use crate::ports::{DeveloperDirectory, SessionRepository};

use super::load_session;

#[derive(Debug, Clone)]
pub struct CheckParticipationQuery {
    pub session_id: SessionId,
    pub user_id: UserId,
}

pub struct CheckParticipationHandler {
    sessions: Arc<dyn SessionRepository>,
    directory: Arc<dyn DeveloperDirectory>,
}

impl CheckParticipationHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, directory: Arc<dyn DeveloperDirectory>) -> Self {
        Self {
            sessions,
            directory,
        }
    }

    /// Both the session and the user must exist.
    pub async fn handle(&self, query: CheckParticipationQuery) -> Result<bool, SessionError> {
        let session = load_session(self.sessions.as_ref(), &query.session_id).await?;
        if self.directory.find_by_id(&query.user_id).await?.is_none() {
            return Err(SessionError::DeveloperNotFound(query.user_id.to_string()));
        }
        Ok(session.is_participant(&query.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{user, Fixture};
    use crate::domain::catalog::Stack;

    #[tokio::test]
    async fn reports_membership() {
        let fx = Fixture::new();
        fx.developer("dev-a", None, None, &[]).await;
        fx.developer("dev-b", None, None, &[]).await;
        let project = fx.project("owner", Stack::Backend, &[&fx.go], &fx.mid).await;
        let session = fx.session(&project, Stack::Backend, &[], 0).await;
        fx.store
            .add_participant(session.id(), &user("dev-a"))
            .await
            .unwrap();
        let handler = CheckParticipationHandler::new(fx.store.clone(), fx.store.clone());

        let query = |id: &str| CheckParticipationQuery {
            session_id: *session.id(),
            user_id: user(id),
        };

        assert!(handler.handle(query("dev-a")).await.unwrap());
        assert!(!handler.handle(query("dev-b")).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let fx = Fixture::new();
        let project = fx.project("owner", Stack::Backend, &[&fx.go], &fx.mid).await;
        let session = fx.session(&project, Stack::Backend, &[], 0).await;
        let handler = CheckParticipationHandler::new(fx.store.clone(), fx.store.clone());

        let err = handler
            .handle(CheckParticipationQuery {
                session_id: *session.id(),
                user_id: user("ghost"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::DeveloperNotFound(_)));
    }
}
