//! ListUserSessionsHandler - Hosted, participating and interested sessions.
//!
//! Every call goes to the reader; nothing is cached.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{MySessions, SessionReader, SessionView};

/// Which per-user projection to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionListKind {
    Hosted,
    Participating,
    Interested,
}

#[derive(Debug, Clone)]
pub struct ListUserSessionsQuery {
    pub user_id: UserId,
}

pub struct ListUserSessionsHandler {
    reader: Arc<dyn SessionReader>,
}

impl ListUserSessionsHandler {
    pub fn new(reader: Arc<dyn SessionReader>) -> Self {
        Self { reader }
    }

    pub async fn list(
        &self,
        query: &ListUserSessionsQuery,
        kind: SessionListKind,
    ) -> Result<Vec<SessionView>, DomainError> {
        match kind {
            SessionListKind::Hosted => self.reader.list_hosted(&query.user_id).await,
            SessionListKind::Participating => self.reader.list_participating(&query.user_id).await,
            SessionListKind::Interested => self.reader.list_interested(&query.user_id).await,
        }
    }

    /// All three projections at once.
    pub async fn my_sessions(&self, query: &ListUserSessionsQuery) -> Result<MySessions, DomainError> {
        let (hosted, participating, interested) = tokio::try_join!(
            self.reader.list_hosted(&query.user_id),
            self.reader.list_participating(&query.user_id),
            self.reader.list_interested(&query.user_id),
        )?;

        Ok(MySessions {
            hosted,
            participating,
            interested,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{user, Fixture};
    use crate::domain::catalog::Stack;
    use crate::domain::session::InterestedParticipant;
    use crate::ports::{InterestRepository, SessionRepository};

    #[tokio::test]
    async fn projections_reflect_current_state() {
        let fx = Fixture::new();
        let project = fx.project("owner", Stack::Backend, &[&fx.go], &fx.mid).await;
        let hosted = fx.session(&project, Stack::Backend, &[], 0).await;
        let other = fx.session(&project, Stack::Backend, &[], 0).await;
        fx.store.add_participant(hosted.id(), &user("dev-a")).await.unwrap();
        fx.store
            .record(&InterestedParticipant::new(user("dev-a"), *other.id()))
            .await
            .unwrap();
        let handler = ListUserSessionsHandler::new(fx.store.clone());

        let owner = ListUserSessionsQuery { user_id: user("owner") };
        let dev = ListUserSessionsQuery { user_id: user("dev-a") };

        assert_eq!(handler.list(&owner, SessionListKind::Hosted).await.unwrap().len(), 2);
        let participating = handler.list(&dev, SessionListKind::Participating).await.unwrap();
        assert_eq!(participating.len(), 1);
        assert_eq!(participating[0].id, *hosted.id());
        assert_eq!(participating[0].participant_count, 1);

        let mine = handler.my_sessions(&dev).await.unwrap();
        assert!(mine.hosted.is_empty());
        assert_eq!(mine.participating.len(), 1);
        assert_eq!(mine.interested.len(), 1);
        assert_eq!(mine.interested[0].id, *other.id());
    }

    #[tokio::test]
    async fn unknown_user_has_empty_views() {
        let fx = Fixture::new();
        let handler = ListUserSessionsHandler::new(fx.store.clone());

        let mine = handler
            .my_sessions(&ListUserSessionsQuery { user_id: user("nobody") })
            .await
            .unwrap();

        assert_eq!(mine, MySessions::default());
    }
}
