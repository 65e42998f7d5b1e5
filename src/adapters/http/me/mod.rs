//! HTTP adapter for `/api/me` endpoints.

mod handlers;
mod routes;

pub use handlers::MeHandlers;
pub use routes::me_routes;
