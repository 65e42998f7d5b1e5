//! UpdateProjectHandler - Command handler for editing a project.
//!
//! Only the owner may update. Languages, when provided, replace the set
//! wholesale. Existing sessions are never rewritten: a stack or language
//! change that any of them would violate is rejected instead.

use std::sync::Arc;

use crate::application::handlers::publish_event;
use crate::domain::foundation::{CommandMetadata, EventId, LevelId, ProjectId};
use crate::domain::project::{Project, ProjectChanges, ProjectError, ProjectUpdated};
use crate::domain::session::rules::{validate_languages, validate_stack_assignment};
use crate::ports::{CatalogReader, EventPublisher, ProjectRepository, SessionRepository};

use super::{parse_stack, resolve_languages, resolve_level};

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectCommand {
    pub project_id: ProjectId,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub stack: Option<String>,
    pub languages: Option<Vec<String>>,
    pub level_id: Option<LevelId>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct UpdateProjectResult {
    pub project: Project,
    pub event: ProjectUpdated,
}

pub struct UpdateProjectHandler {
    projects: Arc<dyn ProjectRepository>,
    sessions: Arc<dyn SessionRepository>,
    catalog: Arc<dyn CatalogReader>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateProjectHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        sessions: Arc<dyn SessionRepository>,
        catalog: Arc<dyn CatalogReader>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            projects,
            sessions,
            catalog,
            event_publisher,
        }
    }

    /// Every existing session must still fit the updated project.
    async fn check_sessions_still_fit(&self, project: &Project) -> Result<(), ProjectError> {
        for session in self.sessions.find_by_project(project.id()).await? {
            validate_stack_assignment(project.stack(), session.stack())
                .map_err(|e| ProjectError::validation("stack", e.to_string()))?;
            validate_languages(project.languages(), session.languages())
                .map_err(|e| ProjectError::validation("languages", e.to_string()))?;
        }
        Ok(())
    }

    pub async fn handle(
        &self,
        cmd: UpdateProjectCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateProjectResult, ProjectError> {
        let mut project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or(ProjectError::NotFound(cmd.project_id))?;

        // Ownership first, so strangers learn nothing from catalog errors.
        project.authorize(&metadata.user_id)?;

        let stack = cmd.stack.as_deref().map(parse_stack).transpose()?;
        let level = match &cmd.level_id {
            Some(id) => Some(resolve_level(self.catalog.as_ref(), id).await?),
            None => None,
        };
        let languages = match &cmd.languages {
            Some(names) => Some(resolve_languages(self.catalog.as_ref(), names).await?),
            None => None,
        };
        let rescopes_sessions = stack.is_some() || languages.is_some();

        project.apply_changes(
            &metadata.user_id,
            ProjectChanges {
                name: cmd.name,
                description: cmd.description,
                image_url: cmd.image_url,
                stack,
                languages,
                level,
                active: cmd.active,
            },
        )?;

        if rescopes_sessions {
            self.check_sessions_still_fit(&project).await?;
        }

        self.projects.update(&project).await?;

        let event = ProjectUpdated {
            event_id: EventId::new(),
            project_id: *project.id(),
            updated_by: metadata.user_id.clone(),
            active: project.is_active(),
            updated_at: *project.updated_at(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(UpdateProjectResult { project, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{metadata, Fixture};
    use crate::domain::catalog::Stack;

    fn handler(fx: &Fixture) -> UpdateProjectHandler {
        UpdateProjectHandler::new(
            fx.store.clone(),
            fx.store.clone(),
            fx.store.clone(),
            fx.bus.clone(),
        )
    }

    #[tokio::test]
    async fn owner_updates_fields() {
        let fx = Fixture::new();
        let project = fx.project("owner", Stack::Backend, &[&fx.python], &fx.mid).await;

        let result = handler(&fx)
            .handle(
                UpdateProjectCommand {
                    project_id: *project.id(),
                    name: Some("Renamed".to_string()),
                    languages: Some(vec!["Go".to_string(), "JavaScript".to_string()]),
                    level_id: Some(fx.senior.id),
                    active: Some(false),
                    ..Default::default()
                },
                metadata("owner"),
            )
            .await
            .unwrap();

        assert_eq!(result.project.name(), "Renamed");
        assert_eq!(result.project.level(), &fx.senior);
        assert!(!result.project.languages().contains(&fx.python.id));
        assert!(!result.project.is_active());
        assert!(!result.event.active);
        assert!(fx.bus.has_event("project.updated"));
    }

    #[tokio::test]
    async fn non_owner_is_rejected() {
        let fx = Fixture::new();
        let project = fx.project("owner", Stack::Backend, &[&fx.python], &fx.mid).await;

        let err = handler(&fx)
            .handle(
                UpdateProjectCommand {
                    project_id: *project.id(),
                    name: Some("Hijacked".to_string()),
                    ..Default::default()
                },
                metadata("intruder"),
            )
            .await
            .unwrap_err();

        assert_eq!(err, ProjectError::NotOwner);
        let stored = ProjectRepository::find_by_id(fx.store.as_ref(), project.id())
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.name(), "Hijacked");
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let fx = Fixture::new();
        let err = handler(&fx)
            .handle(
                UpdateProjectCommand {
                    project_id: ProjectId::new(),
                    ..Default::default()
                },
                metadata("owner"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::NotFound(_)));
    }

    #[tokio::test]
    async fn emptying_languages_is_rejected() {
        let fx = Fixture::new();
        let project = fx.project("owner", Stack::Backend, &[&fx.python], &fx.mid).await;

        let err = handler(&fx)
            .handle(
                UpdateProjectCommand {
                    project_id: *project.id(),
                    languages: Some(vec![]),
                    ..Default::default()
                },
                metadata("owner"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::ValidationFailed { .. }));
    }

    fn stack_change(project: &Project, stack: &str) -> UpdateProjectCommand {
        UpdateProjectCommand {
            project_id: *project.id(),
            stack: Some(stack.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn stack_change_that_strands_a_session_is_rejected() {
        let fx = Fixture::new();
        let project = fx.project("owner", Stack::Backend, &[&fx.go], &fx.mid).await;
        fx.session(&project, Stack::Backend, &[&fx.go], 0).await;

        let err = handler(&fx)
            .handle(stack_change(&project, "Frontend"), metadata("owner"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::ValidationFailed { ref field, .. } if field == "stack"));
        let stored = ProjectRepository::find_by_id(fx.store.as_ref(), project.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.stack(), Stack::Backend);
        assert!(!fx.bus.has_event("project.updated"));
    }

    #[tokio::test]
    async fn narrowing_fullstack_rejects_sessions_on_other_stacks() {
        let fx = Fixture::new();
        let project = fx.project("owner", Stack::Fullstack, &[&fx.js], &fx.mid).await;
        fx.session(&project, Stack::Frontend, &[], 0).await;

        let err = handler(&fx)
            .handle(stack_change(&project, "Backend"), metadata("owner"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::ValidationFailed { .. }));

        let ok = handler(&fx)
            .handle(stack_change(&project, "Frontend"), metadata("owner"))
            .await
            .unwrap();
        assert_eq!(ok.project.stack(), Stack::Frontend);
    }

    #[tokio::test]
    async fn dropping_a_language_in_use_is_rejected() {
        let fx = Fixture::new();
        let project = fx
            .project("owner", Stack::Backend, &[&fx.python, &fx.go], &fx.mid)
            .await;
        fx.session(&project, Stack::Backend, &[&fx.python], 0).await;

        let err = handler(&fx)
            .handle(
                UpdateProjectCommand {
                    project_id: *project.id(),
                    languages: Some(vec!["Go".to_string()]),
                    ..Default::default()
                },
                metadata("owner"),
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, ProjectError::ValidationFailed { ref field, .. } if field == "languages")
        );

        let ok = handler(&fx)
            .handle(
                UpdateProjectCommand {
                    project_id: *project.id(),
                    languages: Some(vec!["Python".to_string()]),
                    ..Default::default()
                },
                metadata("owner"),
            )
            .await
            .unwrap();
        assert!(!ok.project.languages().contains(&fx.go.id));
    }
}
