//! Per-user read queries.

mod list_user_sessions;

pub use list_user_sessions::{ListUserSessionsHandler, ListUserSessionsQuery, SessionListKind};
