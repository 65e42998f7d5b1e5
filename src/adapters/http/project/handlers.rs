//! HTTP handlers for project endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_id, project_error_response};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::command_metadata;
use crate::application::handlers::project::{
    CreateProjectCommand, CreateProjectHandler, GetProjectHandler, GetProjectQuery,
    ListOwnedProjectsHandler, ListOwnedProjectsQuery, ListProjectSessionsHandler,
    ListProjectSessionsQuery, UpdateProjectCommand, UpdateProjectHandler,
};
use crate::domain::foundation::ProjectId;

use super::dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};

#[derive(Clone)]
pub struct ProjectHandlers {
    create_handler: Arc<CreateProjectHandler>,
    update_handler: Arc<UpdateProjectHandler>,
    get_handler: Arc<GetProjectHandler>,
    owned_handler: Arc<ListOwnedProjectsHandler>,
    sessions_handler: Arc<ListProjectSessionsHandler>,
}

impl ProjectHandlers {
    pub fn new(
        create_handler: Arc<CreateProjectHandler>,
        update_handler: Arc<UpdateProjectHandler>,
        get_handler: Arc<GetProjectHandler>,
        owned_handler: Arc<ListOwnedProjectsHandler>,
        sessions_handler: Arc<ListProjectSessionsHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            get_handler,
            owned_handler,
            sessions_handler,
        }
    }
}

/// POST /api/projects
pub async fn create_project(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Json(req): Json<CreateProjectRequest>,
) -> Response {
    let cmd = CreateProjectCommand {
        name: req.name,
        description: req.description,
        image_url: req.image_url,
        stack: req.stack,
        languages: req.languages,
        level_id: req.level_id,
        active: req.active,
    };

    match handlers
        .create_handler
        .handle(cmd, command_metadata(&user, &headers))
        .await
    {
        Ok(result) => (
            StatusCode::CREATED,
            Json(ProjectResponse::from(&result.project)),
        )
            .into_response(),
        Err(e) => project_error_response(e),
    }
}

/// GET /api/projects - Projects owned by the caller
pub async fn list_projects(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListOwnedProjectsQuery { owner_id: user.id };

    match handlers.owned_handler.handle(query).await {
        Ok(projects) => {
            let response: Vec<ProjectResponse> = projects.iter().map(Into::into).collect();
            Json(response).into_response()
        }
        Err(e) => project_error_response(e),
    }
}

/// GET /api/projects/:id
pub async fn get_project(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(project_id): Path<String>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };

    match handlers.get_handler.handle(GetProjectQuery { project_id }).await {
        Ok(project) => Json(ProjectResponse::from(&project)).into_response(),
        Err(e) => project_error_response(e),
    }
}

/// PATCH /api/projects/:id
pub async fn update_project(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(project_id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };

    let cmd = UpdateProjectCommand {
        project_id,
        name: req.name,
        description: req.description,
        image_url: req.image_url,
        stack: req.stack,
        languages: req.languages,
        level_id: req.level_id,
        active: req.active,
    };

    match handlers
        .update_handler
        .handle(cmd, command_metadata(&user, &headers))
        .await
    {
        Ok(result) => Json(ProjectResponse::from(&result.project)).into_response(),
        Err(e) => project_error_response(e),
    }
}

/// GET /api/projects/:id/sessions
pub async fn list_project_sessions(
    State(handlers): State<ProjectHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(project_id): Path<String>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };

    match handlers
        .sessions_handler
        .handle(ListProjectSessionsQuery { project_id })
        .await
    {
        Ok(sessions) => Json(sessions).into_response(),
        Err(e) => project_error_response(e),
    }
}
