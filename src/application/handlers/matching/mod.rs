//! Matching query handlers.

mod suggest_developers;
mod suggest_sessions;

pub use suggest_developers::{SuggestDevelopersHandler, SuggestDevelopersQuery};
pub use suggest_sessions::{SuggestSessionsHandler, SuggestSessionsQuery};
