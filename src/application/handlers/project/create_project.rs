//! CreateProjectHandler - Command handler for registering projects.

use std::sync::Arc;

use crate::application::handlers::publish_event;
use crate::domain::foundation::{CommandMetadata, EventId, LevelId, ProjectId};
use crate::domain::project::{NewProject, Project, ProjectCreated, ProjectError};
use crate::ports::{CatalogReader, EventPublisher, ProjectRepository};

use super::{parse_stack, resolve_languages, resolve_level};

/// Command to create a project. The owner is the requesting user.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub stack: String,
    pub languages: Vec<String>,
    pub level_id: LevelId,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct CreateProjectResult {
    pub project: Project,
    pub event: ProjectCreated,
}

pub struct CreateProjectHandler {
    projects: Arc<dyn ProjectRepository>,
    catalog: Arc<dyn CatalogReader>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateProjectHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        catalog: Arc<dyn CatalogReader>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            projects,
            catalog,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateProjectCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateProjectResult, ProjectError> {
        let stack = parse_stack(&cmd.stack)?;
        let level = resolve_level(self.catalog.as_ref(), &cmd.level_id).await?;
        let languages = resolve_languages(self.catalog.as_ref(), &cmd.languages).await?;

        let project = Project::new(
            ProjectId::new(),
            metadata.user_id.clone(),
            NewProject {
                name: cmd.name,
                description: cmd.description,
                image_url: cmd.image_url,
                stack,
                languages,
                level,
                active: cmd.active,
            },
        )?;

        self.projects.save(&project).await?;

        let event = ProjectCreated {
            event_id: EventId::new(),
            project_id: *project.id(),
            owner_id: project.owner_id().clone(),
            name: project.name().to_string(),
            stack: project.stack(),
            created_at: *project.created_at(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        tracing::info!(
            project_id = %project.id(),
            owner_id = %project.owner_id(),
            stack = %project.stack(),
            "Project created"
        );

        Ok(CreateProjectResult { project, event })
    }
}
