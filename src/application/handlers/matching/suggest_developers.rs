//! SuggestDevelopersHandler - Developers matching a session's criteria.
//!
//! The directory narrows the pool by stack; the matching engine applies the
//! language and level filters.

use std::sync::Arc;

use crate::application::handlers::session::load_session;
use crate::domain::developer::Developer;
use crate::domain::foundation::SessionId;
use crate::domain::matching::suggest_developers_for;
use crate::domain::session::SessionError;
use crate::ports::{DeveloperDirectory, SessionRepository};

#[derive(Debug, Clone)]
pub struct SuggestDevelopersQuery {
    pub session_id: SessionId,
}

pub struct SuggestDevelopersHandler {
    sessions: Arc<dyn SessionRepository>,
    directory: Arc<dyn DeveloperDirectory>,
}

impl SuggestDevelopersHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, directory: Arc<dyn DeveloperDirectory>) -> Self {
        Self {
            sessions,
            directory,
        }
    }

    pub async fn handle(&self, query: SuggestDevelopersQuery) -> Result<Vec<Developer>, SessionError> {
        let session = load_session(self.sessions.as_ref(), &query.session_id).await?;
        let pool = self.directory.find_by_stack(session.stack()).await?;
        let suggestions = suggest_developers_for(&session, pool);

        tracing::debug!(
            session_id = %session.id(),
            count = suggestions.len(),
            "Suggested developers"
        );
        Ok(suggestions)
    }
}
