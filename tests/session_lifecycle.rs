//! Session lifecycle scenarios driven through the application handlers
//! over the in-memory store.

use std::sync::Arc;
use std::time::Duration;

use pair_connect::adapters::events::InMemoryEventBus;
use pair_connect::adapters::mail::InMemoryMailTransport;
use pair_connect::adapters::memory::InMemoryStore;
use pair_connect::adapters::notifications::DirectDispatcher;
use pair_connect::application::{
    ConfirmParticipantCommand, ConfirmParticipantHandler, CreateProjectCommand,
    CreateProjectHandler, CreateSessionCommand, CreateSessionHandler, RecordInterestCommand,
    RecordInterestHandler, SuggestDevelopersHandler, SuggestDevelopersQuery,
};
use pair_connect::domain::catalog::{Level, ProgLanguage, Stack};
use pair_connect::domain::developer::Developer;
use pair_connect::domain::foundation::{
    CommandMetadata, LanguageId, LevelId, ProjectId, Timestamp, UserId,
};
use pair_connect::domain::session::{Session, SessionError};

struct World {
    store: Arc<InMemoryStore>,
    bus: Arc<InMemoryEventBus>,
    mail: Arc<InMemoryMailTransport>,
    dispatcher: Arc<DirectDispatcher>,
    mid: Level,
    senior: Level,
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn as_user(id: &str) -> CommandMetadata {
    CommandMetadata::new(user(id))
}

fn developer(id: &str, stack: Stack, level: &Level, languages: &[&ProgLanguage]) -> Developer {
    Developer {
        id: user(id),
        username: id.to_string(),
        name: format!("Dev {id}"),
        email: format!("{id}@example.com"),
        stack: Some(stack),
        level: Some(level.clone()),
        languages: languages.iter().map(|l| (*l).clone()).collect(),
    }
}

impl World {
    fn new() -> Self {
        let mid = Level::new(LevelId::new(), "Mid");
        let senior = Level::new(LevelId::new(), "Senior");
        let python = ProgLanguage::new(LanguageId::new(), "Python");
        let go = ProgLanguage::new(LanguageId::new(), "Go");
        let js = ProgLanguage::new(LanguageId::new(), "JS");

        let store = InMemoryStore::new()
            .with_catalog(
                vec![mid.clone(), senior.clone()],
                vec![python.clone(), go.clone(), js.clone()],
            )
            .with_developers(vec![
                developer("owner", Stack::Fullstack, &senior, &[&go]),
                developer("dev-a", Stack::Backend, &senior, &[&python]),
                developer("dev-b", Stack::Backend, &senior, &[&go]),
                developer("front-mid-js", Stack::Frontend, &mid, &[&js]),
                developer("front-mid-python", Stack::Frontend, &mid, &[&python]),
                developer("back-mid-js", Stack::Backend, &mid, &[&js]),
                developer("front-senior-js", Stack::Frontend, &senior, &[&js]),
            ]);

        let mail = Arc::new(InMemoryMailTransport::new());
        Self {
            store: Arc::new(store),
            bus: Arc::new(InMemoryEventBus::new()),
            dispatcher: Arc::new(DirectDispatcher::new(mail.clone(), Duration::from_secs(1))),
            mail,
            mid,
            senior,
        }
    }

    async fn project(&self, stack: &str, languages: &[&str], level: &Level) -> ProjectId {
        let handler =
            CreateProjectHandler::new(self.store.clone(), self.store.clone(), self.bus.clone());
        let result = handler
            .handle(
                CreateProjectCommand {
                    name: "Scenario project".to_string(),
                    description: None,
                    image_url: None,
                    stack: stack.to_string(),
                    languages: languages.iter().map(|l| l.to_string()).collect(),
                    level_id: level.id,
                    active: true,
                },
                as_user("owner"),
            )
            .await
            .unwrap();
        *result.project.id()
    }

    async fn session(
        &self,
        project_id: ProjectId,
        stack: &str,
        languages: &[&str],
        limit: u32,
    ) -> Result<Session, SessionError> {
        let handler = CreateSessionHandler::new(
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.bus.clone(),
        );
        handler
            .handle(
                CreateSessionCommand {
                    project_id,
                    description: "Scenario session".to_string(),
                    schedule_date_time: Timestamp::now().add_days(7),
                    duration_minutes: Some(60),
                    session_link: None,
                    participant_limit: limit,
                    active: true,
                    public: true,
                    stack: stack.to_string(),
                    languages: languages.iter().map(|l| l.to_string()).collect(),
                },
                as_user("owner"),
            )
            .await
            .map(|result| result.session)
    }

    fn confirm_handler(&self) -> ConfirmParticipantHandler {
        ConfirmParticipantHandler::new(
            self.store.clone(),
            self.store.clone(),
            self.dispatcher.clone(),
            self.bus.clone(),
        )
    }

    async fn confirm(&self, session: &Session, username: &str) -> Result<usize, SessionError> {
        self.confirm_handler()
            .handle(
                ConfirmParticipantCommand {
                    session_id: *session.id(),
                    developer_username: username.to_string(),
                },
                as_user("owner"),
            )
            .await
            .map(|result| result.session.participant_count())
    }
}

#[tokio::test]
async fn backend_session_with_limit_one_admits_exactly_one_developer() {
    let world = World::new();
    let project = world
        .project("Backend", &["Python", "Go"], &world.senior)
        .await;

    let session = world
        .session(project, "Backend", &["Python"], 1)
        .await
        .unwrap();
    assert_eq!(session.level().map(|l| l.name.as_str()), Some("Senior"));

    assert_eq!(world.confirm(&session, "dev-a").await.unwrap(), 1);
    assert_eq!(
        world.confirm(&session, "dev-b").await.unwrap_err(),
        SessionError::ParticipantLimitReached { limit: 1 }
    );
    assert_eq!(world.mail.sent_count(), 1);
}

#[tokio::test]
async fn session_stack_must_match_non_fullstack_project() {
    let world = World::new();
    let project = world.project("Backend", &["Go"], &world.senior).await;

    for stack in ["Frontend", "Fullstack"] {
        let err = world.session(project, stack, &["Go"], 0).await.unwrap_err();
        assert!(
            matches!(err, SessionError::InvalidStack { .. }),
            "{stack}: {err:?}"
        );
    }
}

#[tokio::test]
async fn fullstack_project_accepts_every_stack_and_nothing_else() {
    let world = World::new();
    let project = world.project("Fullstack", &["Go"], &world.senior).await;

    for stack in ["Fullstack", "Backend", "Frontend"] {
        assert!(world.session(project, stack, &["Go"], 0).await.is_ok());
    }
    assert!(world.session(project, "Mobile", &["Go"], 0).await.is_err());
}

#[tokio::test]
async fn unlimited_session_takes_every_confirmation() {
    let world = World::new();
    let project = world.project("Backend", &["Go"], &world.senior).await;
    let session = world.session(project, "Backend", &["Go"], 0).await.unwrap();

    for (expected, username) in ["dev-a", "dev-b", "back-mid-js"].into_iter().enumerate() {
        assert_eq!(
            world.confirm(&session, username).await.unwrap(),
            expected + 1
        );
    }
    assert!(world.bus.has_event("session.participant_confirmed"));
}

#[tokio::test]
async fn interest_is_unique_per_session_not_per_user() {
    let world = World::new();
    let project = world.project("Backend", &["Go"], &world.senior).await;
    let first = world.session(project, "Backend", &["Go"], 0).await.unwrap();
    let second = world.session(project, "Backend", &["Go"], 0).await.unwrap();

    let handler = RecordInterestHandler::new(
        world.store.clone(),
        world.store.clone(),
        world.store.clone(),
        world.dispatcher.clone(),
        world.bus.clone(),
    );
    let record = |session: &Session| RecordInterestCommand {
        session_id: *session.id(),
    };

    handler.handle(record(&first), as_user("dev-a")).await.unwrap();
    handler.handle(record(&second), as_user("dev-a")).await.unwrap();
    let err = handler
        .handle(record(&first), as_user("dev-a"))
        .await
        .unwrap_err();

    assert_eq!(err, SessionError::DuplicateInterest);
    assert_eq!(world.store.interest_count().await, 2);
    assert_eq!(world.mail.sent_to("owner@example.com").len(), 2);
}

#[tokio::test]
async fn developer_suggestions_require_stack_level_and_a_shared_language() {
    let world = World::new();
    let project = world.project("Frontend", &["JS"], &world.mid).await;
    let session = world.session(project, "Frontend", &["JS"], 0).await.unwrap();

    let suggested = SuggestDevelopersHandler::new(world.store.clone(), world.store.clone())
        .handle(SuggestDevelopersQuery {
            session_id: *session.id(),
        })
        .await
        .unwrap();

    let usernames: Vec<&str> = suggested.iter().map(|d| d.username.as_str()).collect();
    assert_eq!(usernames, vec!["front-mid-js"]);
}
