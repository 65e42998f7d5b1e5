//! ListOwnedProjectsHandler - Projects owned by a user.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

#[derive(Debug, Clone)]
pub struct ListOwnedProjectsQuery {
    pub owner_id: UserId,
}

pub struct ListOwnedProjectsHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl ListOwnedProjectsHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, query: ListOwnedProjectsQuery) -> Result<Vec<Project>, ProjectError> {
        Ok(self.projects.find_by_owner(&query.owner_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{user, Fixture};
    use crate::domain::catalog::Stack;

    #[tokio::test]
    async fn lists_only_the_owners_projects() {
        let fx = Fixture::new();
        let mine = fx.project("owner", Stack::Backend, &[&fx.go], &fx.mid).await;
        fx.project("someone-else", Stack::Backend, &[&fx.go], &fx.mid).await;

        let projects = ListOwnedProjectsHandler::new(fx.store.clone())
            .handle(ListOwnedProjectsQuery {
                owner_id: user("owner"),
            })
            .await
            .unwrap();

        assert_eq!(projects, vec![mine]);
    }
}
