//! Shared fixture for handler tests: an in-memory store seeded with a small
//! catalog, an event bus and a capturing mail transport.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::events::InMemoryEventBus;
use crate::adapters::mail::InMemoryMailTransport;
use crate::adapters::memory::InMemoryStore;
use crate::adapters::notifications::DirectDispatcher;
use crate::domain::catalog::{LanguageSet, Level, ProgLanguage, Stack};
use crate::domain::developer::Developer;
use crate::domain::foundation::{
    CommandMetadata, LanguageId, LevelId, ProjectId, SessionId, Timestamp, UserId,
};
use crate::domain::project::{NewProject, Project};
use crate::domain::session::{NewSession, ParticipantLimit, Session};
use crate::ports::{ProjectRepository, SessionRepository};

pub(crate) fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub(crate) fn metadata(id: &str) -> CommandMetadata {
    CommandMetadata::new(user(id)).with_correlation_id(format!("test-{id}"))
}

pub(crate) struct Fixture {
    pub store: Arc<InMemoryStore>,
    pub bus: Arc<InMemoryEventBus>,
    pub mail: Arc<InMemoryMailTransport>,
    pub dispatcher: Arc<DirectDispatcher>,
    pub junior: Level,
    pub mid: Level,
    pub senior: Level,
    pub python: ProgLanguage,
    pub go: ProgLanguage,
    pub js: ProgLanguage,
}

impl Fixture {
    pub fn new() -> Self {
        let junior = Level::new(LevelId::new(), "Junior");
        let mid = Level::new(LevelId::new(), "Mid");
        let senior = Level::new(LevelId::new(), "Senior");
        let python = ProgLanguage::new(LanguageId::new(), "Python");
        let go = ProgLanguage::new(LanguageId::new(), "Go");
        let js = ProgLanguage::new(LanguageId::new(), "JavaScript");

        let store = Arc::new(InMemoryStore::new().with_catalog(
            vec![junior.clone(), mid.clone(), senior.clone()],
            vec![python.clone(), go.clone(), js.clone()],
        ));
        let mail = Arc::new(InMemoryMailTransport::new());
        let dispatcher = Arc::new(DirectDispatcher::new(mail.clone(), Duration::from_secs(1)));

        Self {
            store,
            bus: Arc::new(InMemoryEventBus::new()),
            mail,
            dispatcher,
            junior,
            mid,
            senior,
            python,
            go,
            js,
        }
    }

    /// Registers a developer; the email is `<id>@example.com`.
    pub async fn developer(
        &self,
        id: &str,
        stack: Option<Stack>,
        level: Option<&Level>,
        languages: &[&ProgLanguage],
    ) -> Developer {
        let developer = Developer {
            id: user(id),
            username: id.to_string(),
            name: format!("Dev {id}"),
            email: format!("{id}@example.com"),
            stack,
            level: level.cloned(),
            languages: languages.iter().map(|l| (*l).clone()).collect(),
        };
        self.store.upsert_developer(developer.clone()).await;
        developer
    }

    /// Saves an active project owned by `owner`.
    pub async fn project(
        &self,
        owner: &str,
        stack: Stack,
        languages: &[&ProgLanguage],
        level: &Level,
    ) -> Project {
        let project = Project::new(
            ProjectId::new(),
            user(owner),
            NewProject {
                name: format!("{owner}'s project"),
                description: None,
                image_url: None,
                stack,
                languages: languages.iter().map(|l| (*l).clone()).collect(),
                level: level.clone(),
                active: true,
            },
        )
        .unwrap();
        ProjectRepository::save(self.store.as_ref(), &project)
            .await
            .unwrap();
        project
    }

    /// Saves a session hosted by the project owner.
    pub async fn session(
        &self,
        project: &Project,
        stack: Stack,
        languages: &[&ProgLanguage],
        limit: u32,
    ) -> Session {
        let session = Session::create(
            SessionId::new(),
            project,
            project.owner_id(),
            NewSession {
                description: "Pairing on the API".to_string(),
                schedule_date_time: Timestamp::now().add_days(3),
                duration_minutes: 90,
                session_link: Some("https://meet.example.com/abc".to_string()),
                participant_limit: ParticipantLimit::new(limit),
                active: true,
                public: true,
                stack,
                languages: languages
                    .iter()
                    .map(|l| (*l).clone())
                    .collect::<LanguageSet>(),
            },
        )
        .unwrap();
        SessionRepository::save(self.store.as_ref(), &session)
            .await
            .unwrap();
        session
    }
}
