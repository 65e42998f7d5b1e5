//! CheckInterestHandler - Has a user expressed interest in a session?

use std::sync::Arc;

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::SessionError;
use crate::ports::{InterestRepository, SessionRepository};

use super::load_session;

#[derive(Debug, Clone)]
pub struct CheckInterestQuery {
    pub session_id: SessionId,
    pub user_id: UserId,
}

pub struct CheckInterestHandler {
    sessions: Arc<dyn SessionRepository>,
    interests: Arc<dyn InterestRepository>,
}

impl CheckInterestHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, interests: Arc<dyn InterestRepository>) -> Self {
        Self {
            sessions,
            interests,
        }
    }

    pub async fn handle(&self, query: CheckInterestQuery) -> Result<bool, SessionError> {
        load_session(self.sessions.as_ref(), &query.session_id).await?;
        Ok(self
            .interests
            .exists(&query.user_id, &query.session_id)
            .await?)
    }
}
