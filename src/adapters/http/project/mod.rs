//! HTTP adapter for project endpoints.

mod dto;
mod handlers;
mod routes;

pub(crate) use dto::double_option;
pub use dto::{CreateProjectRequest, LevelResponse, ProjectResponse, UpdateProjectRequest};
pub use handlers::ProjectHandlers;
pub use routes::project_routes;
