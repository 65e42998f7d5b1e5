//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::matching::{
    SuggestDevelopersHandler, SuggestDevelopersQuery, SuggestSessionsHandler,
    SuggestSessionsQuery,
};
pub use handlers::project::{
    CreateProjectCommand, CreateProjectHandler, CreateProjectResult, GetProjectHandler,
    GetProjectQuery, ListOwnedProjectsHandler, ListOwnedProjectsQuery,
    ListProjectSessionsHandler, ListProjectSessionsQuery, UpdateProjectCommand,
    UpdateProjectHandler, UpdateProjectResult,
};
pub use handlers::queries::{ListUserSessionsHandler, ListUserSessionsQuery, SessionListKind};
pub use handlers::session::{
    CheckInterestHandler, CheckInterestQuery, CheckParticipationHandler, CheckParticipationQuery,
    ConfirmParticipantCommand, ConfirmParticipantHandler, ConfirmParticipantResult,
    CreateSessionCommand, CreateSessionHandler, CreateSessionResult, GetSessionHandler,
    GetSessionQuery, InviteDeveloperCommand, InviteDeveloperHandler, InviteDeveloperResult,
    ListInterestedUsersHandler, ListInterestedUsersQuery, RecordInterestCommand,
    RecordInterestHandler, RecordInterestResult, UpdateSessionCommand, UpdateSessionHandler,
    UpdateSessionResult,
};
