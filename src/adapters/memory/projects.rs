use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, UserId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

use super::InMemoryStore;

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.projects.contains_key(project.id()) {
            return Err(DomainError::database(format!(
                "Project {} already exists",
                project.id()
            )));
        }
        state.projects.insert(*project.id(), project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state.projects.get_mut(project.id()) {
            Some(stored) => {
                *stored = project.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project not found: {}", project.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        Ok(self.state.read().await.projects.get(id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Project>, DomainError> {
        let state = self.state.read().await;
        let mut projects: Vec<Project> = state
            .projects
            .values()
            .filter(|p| p.owner_id() == owner_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(projects)
    }
}
