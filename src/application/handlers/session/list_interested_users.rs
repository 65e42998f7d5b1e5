//! ListInterestedUsersHandler - Developers who recorded interest in a session.

use std::sync::Arc;

use crate::domain::developer::Developer;
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{DeveloperDirectory, InterestRepository, SessionRepository};

use super::load_session;

#[derive(Debug, Clone)]
pub struct ListInterestedUsersQuery {
    pub session_id: SessionId,
}

pub struct ListInterestedUsersHandler {
    sessions: Arc<dyn SessionRepository>,
    interests: Arc<dyn InterestRepository>,
    directory: Arc<dyn DeveloperDirectory>,
}

impl ListInterestedUsersHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        interests: Arc<dyn InterestRepository>,
        directory: Arc<dyn DeveloperDirectory>,
    ) -> Self {
        Self {
            sessions,
            interests,
            directory,
        }
    }

    pub async fn handle(
        &self,
        query: ListInterestedUsersQuery,
    ) -> Result<Vec<Developer>, SessionError> {
        load_session(self.sessions.as_ref(), &query.session_id).await?;
        let ids = self.interests.list_user_ids(&query.session_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.directory.find_by_ids(&ids).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{user, Fixture};
    use crate::domain::catalog::Stack;
    use crate::domain::session::InterestedParticipant;

    #[tokio::test]
    async fn lists_developers_with_interest() {
        let fx = Fixture::new();
        fx.developer("dev-a", None, None, &[]).await;
        fx.developer("dev-b", None, None, &[]).await;
        fx.developer("dev-c", None, None, &[]).await;
        let project = fx.project("owner", Stack::Backend, &[&fx.go], &fx.mid).await;
        let session = fx.session(&project, Stack::Backend, &[], 0).await;
        for id in ["dev-a", "dev-c"] {
            fx.store
                .record(&InterestedParticipant::new(user(id), *session.id()))
                .await
                .unwrap();
        }

        let developers = ListInterestedUsersHandler::new(
            fx.store.clone(),
            fx.store.clone(),
            fx.store.clone(),
        )
        .handle(ListInterestedUsersQuery {
            session_id: *session.id(),
        })
        .await
        .unwrap();

        let mut names: Vec<_> = developers.iter().map(|d| d.username.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["dev-a", "dev-c"]);
    }
}
