//! HTTP routes for project endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_project, get_project, list_project_sessions, list_projects, update_project,
    ProjectHandlers,
};

/// Project router, mounted under `/api/projects`.
pub fn project_routes(handlers: ProjectHandlers) -> Router {
    Router::new()
        .route("/", post(create_project).get(list_projects))
        .route("/:id", get(get_project).patch(update_project))
        .route("/:id/sessions", get(list_project_sessions))
        .with_state(handlers)
}
