//! Project repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId, UserId};
use crate::domain::project::Project;

/// Repository port for Project aggregate persistence.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Save a new project together with its language links.
    async fn save(&self, project: &Project) -> Result<(), DomainError>;

    /// Update an existing project; languages are replaced wholesale.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    async fn update(&self, project: &Project) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// Projects owned by a user, newest first.
    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Project>, DomainError>;
}
