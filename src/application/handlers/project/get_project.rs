//! GetProjectHandler - Query handler for a single project.

use std::sync::Arc;

use crate::domain::foundation::ProjectId;
use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

#[derive(Debug, Clone)]
pub struct GetProjectQuery {
    pub project_id: ProjectId,
}

pub struct GetProjectHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl GetProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, query: GetProjectQuery) -> Result<Project, ProjectError> {
        self.projects
            .find_by_id(&query.project_id)
            .await?
            .ok_or(ProjectError::NotFound(query.project_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::catalog::Stack;

    #[tokio::test]
    async fn returns_existing_project() {
        let fx = Fixture::new();
        let project = fx.project("owner", Stack::Frontend, &[&fx.js], &fx.mid).await;

        let found = GetProjectHandler::new(fx.store.clone())
            .handle(GetProjectQuery {
                project_id: *project.id(),
            })
            .await
            .unwrap();

        assert_eq!(found, project);
    }

    #[tokio::test]
    async fn unknown_project_is_not_found() {
        let fx = Fixture::new();
        let id = ProjectId::new();

        let err = GetProjectHandler::new(fx.store.clone())
            .handle(GetProjectQuery { project_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, ProjectError::NotFound(id));
    }
}
