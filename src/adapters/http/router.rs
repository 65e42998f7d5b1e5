//! Router assembly.
//!
//! Builds every application handler from one bundle of ports and mounts
//! the module routers under `/api`. Layer order, outermost first: request
//! id, trace, CORS, timeout, auth.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::{middleware, routing::get, Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::memory::InMemoryStore;
use crate::application::handlers::matching::{SuggestDevelopersHandler, SuggestSessionsHandler};
use crate::application::handlers::project::{
    CreateProjectHandler, GetProjectHandler, ListOwnedProjectsHandler,
    ListProjectSessionsHandler, UpdateProjectHandler,
};
use crate::application::handlers::queries::ListUserSessionsHandler;
use crate::application::handlers::session::{
    CheckInterestHandler, CheckParticipationHandler, ConfirmParticipantHandler,
    CreateSessionHandler, GetSessionHandler, InviteDeveloperHandler, ListInterestedUsersHandler,
    RecordInterestHandler, UpdateSessionHandler,
};
use crate::config::ServerConfig;
use crate::ports::{
    CatalogReader, DeveloperDirectory, EventPublisher, InterestRepository,
    NotificationDispatcher, ProjectRepository, SessionReader, SessionRepository, TokenValidator,
};

use super::catalog::catalog_routes;
use super::me::{me_routes, MeHandlers};
use super::middleware::auth_middleware;
use super::project::{project_routes, ProjectHandlers};
use super::session::{session_routes, SessionHandlers};
use super::REQUEST_ID_HEADER;

/// Every port the HTTP surface depends on.
#[derive(Clone)]
pub struct AppPorts {
    pub projects: Arc<dyn ProjectRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub session_reader: Arc<dyn SessionReader>,
    pub interests: Arc<dyn InterestRepository>,
    pub directory: Arc<dyn DeveloperDirectory>,
    pub catalog: Arc<dyn CatalogReader>,
    pub dispatcher: Arc<dyn NotificationDispatcher>,
    pub events: Arc<dyn EventPublisher>,
    pub tokens: Arc<dyn TokenValidator>,
}

impl AppPorts {
    /// All persistence ports backed by one in-memory store.
    pub fn in_memory(
        store: Arc<InMemoryStore>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        events: Arc<dyn EventPublisher>,
        tokens: Arc<dyn TokenValidator>,
    ) -> Self {
        Self {
            projects: store.clone(),
            sessions: store.clone(),
            session_reader: store.clone(),
            interests: store.clone(),
            directory: store.clone(),
            catalog: store,
            dispatcher,
            events,
            tokens,
        }
    }
}

/// Cross-cutting router settings.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub request_timeout: Duration,
    /// Allowed CORS origins; empty means same-origin only.
    pub cors_origins: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

impl From<&ServerConfig> for RouterOptions {
    fn from(config: &ServerConfig) -> Self {
        Self {
            request_timeout: config.request_timeout(),
            cors_origins: config.cors_origins_list(),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

fn project_handlers(ports: &AppPorts) -> ProjectHandlers {
    ProjectHandlers::new(
        Arc::new(CreateProjectHandler::new(
            ports.projects.clone(),
            ports.catalog.clone(),
            ports.events.clone(),
        )),
        Arc::new(UpdateProjectHandler::new(
            ports.projects.clone(),
            ports.sessions.clone(),
            ports.catalog.clone(),
            ports.events.clone(),
        )),
        Arc::new(GetProjectHandler::new(ports.projects.clone())),
        Arc::new(ListOwnedProjectsHandler::new(ports.projects.clone())),
        Arc::new(ListProjectSessionsHandler::new(
            ports.projects.clone(),
            ports.session_reader.clone(),
        )),
    )
}

fn session_handlers(ports: &AppPorts) -> SessionHandlers {
    SessionHandlers {
        create_handler: Arc::new(CreateSessionHandler::new(
            ports.projects.clone(),
            ports.sessions.clone(),
            ports.catalog.clone(),
            ports.events.clone(),
        )),
        update_handler: Arc::new(UpdateSessionHandler::new(
            ports.projects.clone(),
            ports.sessions.clone(),
            ports.catalog.clone(),
            ports.events.clone(),
        )),
        get_handler: Arc::new(GetSessionHandler::new(ports.sessions.clone())),
        confirm_handler: Arc::new(ConfirmParticipantHandler::new(
            ports.sessions.clone(),
            ports.directory.clone(),
            ports.dispatcher.clone(),
            ports.events.clone(),
        )),
        invite_handler: Arc::new(InviteDeveloperHandler::new(
            ports.sessions.clone(),
            ports.directory.clone(),
            ports.dispatcher.clone(),
            ports.events.clone(),
        )),
        interest_handler: Arc::new(RecordInterestHandler::new(
            ports.sessions.clone(),
            ports.interests.clone(),
            ports.directory.clone(),
            ports.dispatcher.clone(),
            ports.events.clone(),
        )),
        check_interest_handler: Arc::new(CheckInterestHandler::new(
            ports.sessions.clone(),
            ports.interests.clone(),
        )),
        check_participation_handler: Arc::new(CheckParticipationHandler::new(
            ports.sessions.clone(),
            ports.directory.clone(),
        )),
        interested_users_handler: Arc::new(ListInterestedUsersHandler::new(
            ports.sessions.clone(),
            ports.interests.clone(),
            ports.directory.clone(),
        )),
        suggest_handler: Arc::new(SuggestDevelopersHandler::new(
            ports.sessions.clone(),
            ports.directory.clone(),
        )),
    }
}

fn me_handlers(ports: &AppPorts) -> MeHandlers {
    MeHandlers::new(
        Arc::new(SuggestSessionsHandler::new(
            ports.sessions.clone(),
            ports.directory.clone(),
        )),
        Arc::new(ListUserSessionsHandler::new(ports.session_reader.clone())),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// The complete application router.
pub fn api_router(ports: AppPorts, options: RouterOptions) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let api = Router::new()
        .nest("/projects", project_routes(project_handlers(&ports)))
        .nest("/sessions", session_routes(session_handlers(&ports)))
        .nest("/me", me_routes(me_handlers(&ports)))
        .nest("/catalog", catalog_routes(ports.catalog.clone()))
        .layer(middleware::from_fn_with_state(
            ports.tokens.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}
