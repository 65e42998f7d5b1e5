//! HTTP adapters - REST API over the application handlers.
//!
//! Each module has its own handler state, DTOs and routes; `router`
//! assembles them under `/api` with the shared middleware stack.

pub mod catalog;
pub mod error;
pub mod me;
pub mod middleware;
pub mod project;
pub mod router;
pub mod session;

pub use router::{api_router, AppPorts, RouterOptions};

use axum::http::HeaderMap;

use crate::domain::foundation::{AuthenticatedUser, CommandMetadata};

/// Header set by the request-id layer and echoed on every response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Command metadata for an authenticated request.
///
/// The request id becomes the correlation id of every event the command
/// publishes.
pub(crate) fn command_metadata(user: &AuthenticatedUser, headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new(user.id.clone()).with_source("api");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => metadata.with_correlation_id(request_id),
        None => metadata,
    }
}
