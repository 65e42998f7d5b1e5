//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ConfirmParticipantRequest, ConfirmParticipantResponse, CreateSessionRequest,
    DeveloperResponse, InterestStatusResponse, MessageResponse, ParticipationResponse,
    SessionResponse, UpdateSessionRequest,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
