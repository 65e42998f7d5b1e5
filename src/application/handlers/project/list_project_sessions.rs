//! ListProjectSessionsHandler - Sessions hosted under one project.

use std::sync::Arc;

use crate::domain::foundation::ProjectId;
use crate::domain::project::ProjectError;
use crate::ports::{ProjectRepository, SessionReader, SessionView};

#[derive(Debug, Clone)]
pub struct ListProjectSessionsQuery {
    pub project_id: ProjectId,
}

pub struct ListProjectSessionsHandler {
    projects: Arc<dyn ProjectRepository>,
    reader: Arc<dyn SessionReader>,
}

impl ListProjectSessionsHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, reader: Arc<dyn SessionReader>) -> Self {
        Self { projects, reader }
    }

    pub async fn handle(
        &self,
        query: ListProjectSessionsQuery,
    ) -> Result<Vec<SessionView>, ProjectError> {
        if self.projects.find_by_id(&query.project_id).await?.is_none() {
            return Err(ProjectError::NotFound(query.project_id));
        }
        Ok(self.reader.list_by_project(&query.project_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::catalog::Stack;

    #[tokio::test]
    async fn lists_only_sessions_of_the_project() {
        let fx = Fixture::new();
        let project = fx.project("owner", Stack::Fullstack, &[&fx.go], &fx.mid).await;
        let other = fx.project("owner", Stack::Fullstack, &[&fx.go], &fx.mid).await;
        let first = fx.session(&project, Stack::Backend, &[], 0).await;
        fx.session(&project, Stack::Frontend, &[], 0).await;
        fx.session(&other, Stack::Backend, &[], 0).await;

        let views = ListProjectSessionsHandler::new(fx.store.clone(), fx.store.clone())
            .handle(ListProjectSessionsQuery {
                project_id: *project.id(),
            })
            .await
            .unwrap();

        assert_eq!(views.len(), 2);
        assert!(views.iter().all(|v| &v.project_id == project.id()));
        assert!(views.iter().any(|v| &v.id == first.id()));
    }

    #[tokio::test]
    async fn unknown_project_is_not_found() {
        let fx = Fixture::new();

        let err = ListProjectSessionsHandler::new(fx.store.clone(), fx.store.clone())
            .handle(ListProjectSessionsQuery {
                project_id: ProjectId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::NotFound(_)));
    }
}
