//! SuggestSessionsHandler - Sessions matching a developer's profile.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::matching::suggest_sessions_for;
use crate::domain::session::{Session, SessionError};
use crate::ports::{DeveloperDirectory, SessionRepository};

#[derive(Debug, Clone)]
pub struct SuggestSessionsQuery {
    pub user_id: UserId,
}

pub struct SuggestSessionsHandler {
    sessions: Arc<dyn SessionRepository>,
    directory: Arc<dyn DeveloperDirectory>,
}

impl SuggestSessionsHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, directory: Arc<dyn DeveloperDirectory>) -> Self {
        Self {
            sessions,
            directory,
        }
    }

    /// A developer without a stack gets no suggestions.
    pub async fn handle(&self, query: SuggestSessionsQuery) -> Result<Vec<Session>, SessionError> {
        let developer = self
            .directory
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| SessionError::DeveloperNotFound(query.user_id.to_string()))?;

        let Some(stack) = developer.stack else {
            return Ok(Vec::new());
        };

        let pool = self.sessions.find_by_stack(stack).await?;
        Ok(suggest_sessions_for(&developer, pool))
    }
}
