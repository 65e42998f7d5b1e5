use async_trait::async_trait;

use crate::domain::catalog::Stack;
use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, SessionId, UserId};
use crate::domain::session::{ConfirmOutcome, Session, SessionError, LIMIT_BELOW_CONFIRMED_REASON};
use crate::ports::{ParticipantInsert, SessionReader, SessionRepository, SessionView};

use super::InMemoryStore;

fn session_not_found(id: &SessionId) -> DomainError {
    DomainError::new(
        ErrorCode::SessionNotFound,
        format!("Session not found: {}", id),
    )
}

fn sorted_views<'a>(sessions: impl Iterator<Item = &'a Session>) -> Vec<SessionView> {
    let mut views: Vec<SessionView> = sessions.map(SessionView::from).collect();
    views.sort_by(|a, b| a.schedule_date_time.cmp(&b.schedule_date_time));
    views
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.projects.contains_key(session.project_id()) {
            return Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project not found: {}", session.project_id()),
            ));
        }
        state.sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let stored = state
            .sessions
            .get_mut(session.id())
            .ok_or_else(|| session_not_found(session.id()))?;
        if !session
            .participant_limit()
            .allows_total(stored.participant_count())
        {
            return Err(DomainError::validation(
                "participant_limit",
                LIMIT_BELOW_CONFIRMED_REASON,
            ));
        }
        *stored = session.with_participants_from(stored);
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.state.read().await.sessions.get(id).cloned())
    }

    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Session>, DomainError> {
        let state = self.state.read().await;
        let mut sessions: Vec<Session> = state
            .sessions
            .values()
            .filter(|s| s.project_id() == project_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| a.schedule_date_time().cmp(b.schedule_date_time()));
        Ok(sessions)
    }

    async fn find_by_stack(&self, stack: Stack) -> Result<Vec<Session>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .sessions
            .values()
            .filter(|s| s.stack() == stack)
            .cloned()
            .collect())
    }

    async fn add_participant(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<ParticipantInsert, DomainError> {
        let mut state = self.state.write().await;
        let stored = state
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| session_not_found(session_id))?;

        let host = stored.host_id().clone();
        match stored.confirm_participant(&host, user_id) {
            Ok(ConfirmOutcome::Confirmed) => Ok(ParticipantInsert::Inserted),
            Ok(ConfirmOutcome::AlreadyConfirmed) => Ok(ParticipantInsert::AlreadyPresent),
            Err(SessionError::ParticipantLimitReached { limit }) => {
                Ok(ParticipantInsert::LimitReached { limit })
            }
            Err(other) => Err(DomainError::new(ErrorCode::InternalError, other.to_string())),
        }
    }

    async fn is_participant(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .sessions
            .get(session_id)
            .map(|s| s.is_participant(user_id))
            .unwrap_or(false))
    }
}

#[async_trait]
impl SessionReader for InMemoryStore {
    async fn list_hosted(&self, user_id: &UserId) -> Result<Vec<SessionView>, DomainError> {
        let state = self.state.read().await;
        Ok(sorted_views(
            state.sessions.values().filter(|s| s.is_host(user_id)),
        ))
    }

    async fn list_participating(&self, user_id: &UserId) -> Result<Vec<SessionView>, DomainError> {
        let state = self.state.read().await;
        Ok(sorted_views(
            state.sessions.values().filter(|s| s.is_participant(user_id)),
        ))
    }

    async fn list_interested(&self, user_id: &UserId) -> Result<Vec<SessionView>, DomainError> {
        let state = self.state.read().await;
        Ok(sorted_views(
            state
                .interests
                .iter()
                .filter(|i| &i.user_id == user_id)
                .filter_map(|i| state.sessions.get(&i.session_id)),
        ))
    }

    async fn list_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<SessionView>, DomainError> {
        let state = self.state.read().await;
        Ok(sorted_views(
            state
                .sessions
                .values()
                .filter(|s| s.project_id() == project_id),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{LanguageSet, Level, ProgLanguage};
    use crate::domain::foundation::{LanguageId, LevelId, Timestamp};
    use crate::domain::project::{NewProject, Project};
    use crate::domain::session::{NewSession, ParticipantLimit, SessionChanges};
    use crate::ports::ProjectRepository;
    use std::sync::Arc;

    fn host() -> UserId {
        UserId::new("host").unwrap()
    }

    async fn seeded(limit: u32) -> (Arc<InMemoryStore>, Session, Project) {
        let store = Arc::new(InMemoryStore::new());
        let project = Project::new(
            ProjectId::new(),
            host(),
            NewProject {
                name: "Project".to_string(),
                description: None,
                image_url: None,
                stack: Stack::Backend,
                languages: vec![ProgLanguage::new(LanguageId::new(), "Go")].into(),
                level: Level::new(LevelId::new(), "Mid"),
                active: true,
            },
        )
        .unwrap();
        ProjectRepository::save(store.as_ref(), &project).await.unwrap();

        let session = Session::create(
            SessionId::new(),
            &project,
            &host(),
            NewSession {
                description: "Pairing".to_string(),
                schedule_date_time: Timestamp::now(),
                duration_minutes: 120,
                session_link: None,
                participant_limit: ParticipantLimit::new(limit),
                active: true,
                public: true,
                stack: Stack::Backend,
                languages: LanguageSet::new(),
            },
        )
        .unwrap();
        SessionRepository::save(store.as_ref(), &session).await.unwrap();
        (store, session, project)
    }

    #[tokio::test]
    async fn add_participant_reports_each_outcome() {
        let (store, session, _) = seeded(1).await;
        let a = UserId::new("dev-a").unwrap();
        let b = UserId::new("dev-b").unwrap();

        assert_eq!(
            store.add_participant(session.id(), &a).await.unwrap(),
            ParticipantInsert::Inserted
        );
        assert_eq!(
            store.add_participant(session.id(), &a).await.unwrap(),
            ParticipantInsert::AlreadyPresent
        );
        assert_eq!(
            store.add_participant(session.id(), &b).await.unwrap(),
            ParticipantInsert::LimitReached { limit: 1 }
        );
        assert!(store.is_participant(session.id(), &a).await.unwrap());
        assert!(!store.is_participant(session.id(), &b).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_confirmations_never_overshoot_the_limit() {
        let (store, session, _) = seeded(3).await;

        let mut tasks = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            let id = *session.id();
            tasks.push(tokio::spawn(async move {
                let user = UserId::new(format!("dev-{i}")).unwrap();
                store.add_participant(&id, &user).await.unwrap()
            }));
        }

        let mut inserted = 0;
        for task in tasks {
            if task.await.unwrap() == ParticipantInsert::Inserted {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 3);
        let stored = SessionRepository::find_by_id(store.as_ref(), session.id()).await.unwrap().unwrap();
        assert_eq!(stored.participant_count(), 3);
    }

    #[tokio::test]
    async fn update_keeps_stored_participants() {
        let (store, session, project) = seeded(0).await;
        let dev = UserId::new("dev-a").unwrap();
        store.add_participant(session.id(), &dev).await.unwrap();

        let mut stale = session.clone();
        stale
            .apply_changes(
                &host(),
                &project,
                SessionChanges {
                    description: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        SessionRepository::update(store.as_ref(), &stale).await.unwrap();

        let stored = SessionRepository::find_by_id(store.as_ref(), session.id()).await.unwrap().unwrap();
        assert_eq!(stored.description(), "Renamed");
        assert!(stored.is_participant(&dev));
    }

    #[tokio::test]
    async fn update_rejects_limit_below_participants_confirmed_since_load() {
        let (store, session, project) = seeded(0).await;
        let mut stale = SessionRepository::find_by_id(store.as_ref(), session.id())
            .await
            .unwrap()
            .unwrap();
        for dev in ["dev-a", "dev-b"] {
            store
                .add_participant(session.id(), &UserId::new(dev).unwrap())
                .await
                .unwrap();
        }

        stale
            .apply_changes(
                &host(),
                &project,
                SessionChanges {
                    participant_limit: Some(ParticipantLimit::new(1)),
                    ..Default::default()
                },
            )
            .unwrap();
        let err = SessionRepository::update(store.as_ref(), &stale).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let stored = SessionRepository::find_by_id(store.as_ref(), session.id()).await.unwrap().unwrap();
        assert!(stored.participant_limit().is_unlimited());
        assert_eq!(stored.participant_count(), 2);
    }

    #[tokio::test]
    async fn update_accepts_limit_equal_to_confirmed_count() {
        let (store, session, project) = seeded(0).await;
        let mut stale = session.clone();
        for dev in ["dev-a", "dev-b"] {
            store
                .add_participant(session.id(), &UserId::new(dev).unwrap())
                .await
                .unwrap();
        }

        stale
            .apply_changes(
                &host(),
                &project,
                SessionChanges {
                    participant_limit: Some(ParticipantLimit::new(2)),
                    ..Default::default()
                },
            )
            .unwrap();
        SessionRepository::update(store.as_ref(), &stale).await.unwrap();

        let stored = SessionRepository::find_by_id(store.as_ref(), session.id()).await.unwrap().unwrap();
        assert_eq!(stored.participant_limit().value(), 2);
        assert_eq!(
            store
                .add_participant(session.id(), &UserId::new("dev-c").unwrap())
                .await
                .unwrap(),
            ParticipantInsert::LimitReached { limit: 2 }
        );
    }

    #[tokio::test]
    async fn reader_projects_hosted_and_participating() {
        let (store, session, _) = seeded(0).await;
        let dev = UserId::new("dev-a").unwrap();
        store.add_participant(session.id(), &dev).await.unwrap();

        let hosted = store.list_hosted(&host()).await.unwrap();
        let participating = store.list_participating(&dev).await.unwrap();

        assert_eq!(hosted.len(), 1);
        assert_eq!(participating.len(), 1);
        assert_eq!(participating[0].participant_count, 1);
        assert!(store.list_hosted(&dev).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_unknown_session_fails() {
        let (store, _, project) = seeded(0).await;
        let other = Session::create(
            SessionId::new(),
            &project,
            &host(),
            NewSession {
                description: "Ghost".to_string(),
                schedule_date_time: Timestamp::now(),
                duration_minutes: 60,
                session_link: None,
                participant_limit: ParticipantLimit::UNLIMITED,
                active: true,
                public: true,
                stack: Stack::Backend,
                languages: LanguageSet::new(),
            },
        )
        .unwrap();

        let err = SessionRepository::update(store.as_ref(), &other).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }
}
