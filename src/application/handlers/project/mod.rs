//! Project command and query handlers.

mod create_project;
mod get_project;
mod list_owned_projects;
mod list_project_sessions;
mod update_project;

pub use create_project::{CreateProjectCommand, CreateProjectHandler, CreateProjectResult};
pub use get_project::{GetProjectHandler, GetProjectQuery};
pub use list_owned_projects::{ListOwnedProjectsHandler, ListOwnedProjectsQuery};
pub use list_project_sessions::{ListProjectSessionsHandler, ListProjectSessionsQuery};
pub use update_project::{UpdateProjectCommand, UpdateProjectHandler, UpdateProjectResult};

use crate::domain::catalog::{LanguageSet, Level, Stack};
use crate::domain::foundation::LevelId;
use crate::domain::project::ProjectError;
use crate::ports::CatalogReader;

use super::unknown_language_names;

fn parse_stack(raw: &str) -> Result<Stack, ProjectError> {
    raw.parse::<Stack>()
        .map_err(|e| ProjectError::validation("stack", e.to_string()))
}

async fn resolve_level(catalog: &dyn CatalogReader, id: &LevelId) -> Result<Level, ProjectError> {
    catalog
        .find_level(id)
        .await?
        .ok_or(ProjectError::LevelNotFound(*id))
}

async fn resolve_languages(
    catalog: &dyn CatalogReader,
    names: &[String],
) -> Result<LanguageSet, ProjectError> {
    catalog
        .find_languages_by_names(names)
        .await
        .map_err(|e| match unknown_language_names(&e) {
            Some(names) => ProjectError::UnknownLanguages(names),
            None => ProjectError::from(e),
        })
}
